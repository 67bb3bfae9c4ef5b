pub mod command;
pub mod ports;
