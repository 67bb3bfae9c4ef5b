use std::io::Write;

use crate::controllers::command::reply::Reply;
use crate::controllers::ports::reply_presenter::ReplyPresenterPort;
use crate::presenters::resp::write_error;

/// Encodes replies for RESP2 clients, which have no verbatim type: the body
/// goes out as a bulk string and the format tag is dropped.
pub struct Resp2Presenter {}

impl ReplyPresenterPort for Resp2Presenter {
    fn present<W: Write + ?Sized>(&self, reply: &Reply, out: &mut W) -> std::io::Result<()> {
        match reply {
            Reply::Verbatim { body, .. } => {
                write!(out, "${}\r\n", body.len())?;
                out.write_all(body.as_bytes())?;
                out.write_all(b"\r\n")
            }
            Reply::Error(message) => write_error(message, out),
        }
    }
}

impl Default for Resp2Presenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Resp2Presenter {
    pub fn new() -> Self {
        Self {}
    }
}
