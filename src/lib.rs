mod controllers;
mod core;
mod presenters;

pub use crate::controllers::command::{
    ArgumentError, JuliaArgs, JuliaCommand, Reply, TEXT_FORMAT, parse_long,
};
pub use crate::controllers::ports::ReplyPresenterPort;
pub use crate::core::actions::generate_glyph_grid::ports::glyph_map::GlyphMap;
pub use crate::core::actions::render_julia::{RenderError, render_julia, render_julia_parallel};
pub use crate::core::data::cell::Cell;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::glyph_grid::{GlyphGrid, GlyphGridError};
pub use crate::core::data::grid_size::{GridSize, MAX_EXTENT, MIN_EXTENT};
pub use crate::core::fractals::julia::algorithm::escape_iterations;
pub use crate::core::fractals::julia::errors::JuliaError;
pub use crate::core::fractals::julia::glyph_mapping::ascii_gradient::{
    ASCII_GRADIENT, AsciiGradient,
};
pub use crate::core::fractals::julia::render_config::RenderConfig;
pub use crate::core::fractals::julia::renderer::JuliaRenderer;
pub use crate::core::fractals::julia::seed::JuliaSeed;
pub use crate::core::util::cell_to_complex_coords::{
    CellToComplexCoordsError, cell_to_complex_coords,
};
pub use crate::presenters::resp::resp2::Resp2Presenter;
pub use crate::presenters::resp::resp3::Resp3Presenter;
pub use crate::presenters::text::plain::PlainTextPresenter;
