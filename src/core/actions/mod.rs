pub mod generate_fractal;
pub mod generate_glyph_grid;
pub mod render_julia;
