#[allow(clippy::module_inception)]
pub mod generate_glyph_grid;
pub mod ports;
