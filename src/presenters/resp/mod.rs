pub mod resp2;
pub mod resp3;

use std::io::Write;

/// Simple error line. CR and LF in `message` would end the frame early, so
/// they are replaced with spaces.
fn write_error<W: Write + ?Sized>(message: &str, out: &mut W) -> std::io::Result<()> {
    let line: String = message
        .chars()
        .map(|ch| if ch == '\r' || ch == '\n' { ' ' } else { ch })
        .collect();

    write!(out, "-ERR {}\r\n", line)
}
