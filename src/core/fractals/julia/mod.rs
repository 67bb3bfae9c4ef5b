pub mod algorithm;
pub mod errors;
pub mod glyph_mapping;
pub mod render_config;
pub mod renderer;
pub mod seed;
