use std::io::Write;

use crate::controllers::command::reply::Reply;
use crate::controllers::ports::reply_presenter::ReplyPresenterPort;

/// Writes verbatim bodies as-is, for terminals.
pub struct PlainTextPresenter {}

impl ReplyPresenterPort for PlainTextPresenter {
    fn present<W: Write + ?Sized>(&self, reply: &Reply, out: &mut W) -> std::io::Result<()> {
        match reply {
            Reply::Verbatim { body, .. } => out.write_all(body.as_bytes()),
            Reply::Error(message) => writeln!(out, "ERR {}", message),
        }
    }
}

impl Default for PlainTextPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PlainTextPresenter {
    pub fn new() -> Self {
        Self {}
    }
}
