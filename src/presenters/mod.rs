pub mod resp;
pub mod text;
