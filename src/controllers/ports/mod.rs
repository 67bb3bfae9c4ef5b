pub mod reply_presenter;

pub use reply_presenter::ReplyPresenterPort;
