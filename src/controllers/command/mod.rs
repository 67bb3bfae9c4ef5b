pub mod args;
mod controller;
pub mod errors;
pub mod reply;

pub use args::{JuliaArgs, parse_long};
pub use controller::JuliaCommand;
pub use errors::ArgumentError;
pub use reply::{Reply, TEXT_FORMAT};
