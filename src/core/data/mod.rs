pub mod cell;
pub mod complex;
pub mod glyph_grid;
pub mod grid_size;
