use std::io::Write;

use crate::controllers::command::reply::Reply;

pub trait ReplyPresenterPort {
    fn present<W: Write + ?Sized>(&self, reply: &Reply, out: &mut W) -> std::io::Result<()>;
}
