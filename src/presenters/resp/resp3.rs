use std::io::Write;

use crate::controllers::command::reply::Reply;
use crate::controllers::ports::reply_presenter::ReplyPresenterPort;
use crate::presenters::resp::write_error;

/// Encodes replies for clients speaking RESP3.
pub struct Resp3Presenter {}

impl ReplyPresenterPort for Resp3Presenter {
    fn present<W: Write + ?Sized>(&self, reply: &Reply, out: &mut W) -> std::io::Result<()> {
        match reply {
            Reply::Verbatim { format, body } => {
                // =<len>\r\n<fmt>:<body>\r\n, len counting the "<fmt>:" prefix
                write!(out, "={}\r\n{}:", format.len() + 1 + body.len(), format)?;
                out.write_all(body.as_bytes())?;
                out.write_all(b"\r\n")
            }
            Reply::Error(message) => write_error(message, out),
        }
    }
}

impl Default for Resp3Presenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Resp3Presenter {
    pub fn new() -> Self {
        Self {}
    }
}
