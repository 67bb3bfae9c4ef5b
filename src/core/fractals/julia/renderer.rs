use crate::core::actions::render_julia::{RenderError, render_julia};
use crate::core::data::glyph_grid::GlyphGrid;
use crate::core::fractals::julia::glyph_mapping::ascii_gradient::AsciiGradient;
use crate::core::fractals::julia::render_config::RenderConfig;
use crate::core::fractals::julia::seed::JuliaSeed;
use rand::Rng;

/// Renders ASCII Julia sets with a fresh random seed per call.
///
/// The generator is owned by the renderer; seed it for reproducible art.
#[derive(Debug)]
pub struct JuliaRenderer<R: Rng> {
    rng: R,
    config: RenderConfig,
    gradient: AsciiGradient,
}

impl<R: Rng> JuliaRenderer<R> {
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, RenderConfig::default())
    }

    pub fn with_config(rng: R, config: RenderConfig) -> Self {
        Self {
            rng,
            config,
            gradient: AsciiGradient::new(),
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders a `columns` × `rows` block of text, each row ending in `\n`.
    pub fn render(
        &mut self,
        columns: Option<i64>,
        rows: Option<i64>,
    ) -> Result<String, RenderError> {
        self.render_grid(columns, rows).map(|(grid, _)| grid.to_text())
    }

    /// Like [`render`](Self::render), returning the grid and the seed drawn for it.
    pub fn render_grid(
        &mut self,
        columns: Option<i64>,
        rows: Option<i64>,
    ) -> Result<(GlyphGrid, JuliaSeed), RenderError> {
        let size = self.config.grid_size(columns, rows);
        let seed = JuliaSeed::random(&mut self.rng);
        let grid = render_julia(size, seed, &self.gradient)?;

        Ok((grid, seed))
    }
}
