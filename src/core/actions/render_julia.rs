use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::actions::generate_glyph_grid::generate_glyph_grid::generate_glyph_grid;
use crate::core::actions::generate_glyph_grid::ports::glyph_map::GlyphMap;
use crate::core::data::glyph_grid::{GlyphGrid, GlyphGridError};
use crate::core::data::grid_size::GridSize;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::julia::errors::JuliaError;
use crate::core::fractals::julia::seed::JuliaSeed;
use crate::core::util::cell_to_complex_coords::CellToComplexCoordsError;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("julia algorithm error: {0}")]
    Julia(#[from] JuliaError),
    #[error("coordinate mapping error: {0}")]
    Coords(#[from] CellToComplexCoordsError),
    #[error("glyph grid error: {0}")]
    GlyphGrid(#[from] GlyphGridError),
}

/// Renders the Julia set for `seed` onto a grid of `size`, one glyph per
/// cell. The iteration budget comes from the palette.
pub fn render_julia<Map: GlyphMap>(
    size: GridSize,
    seed: JuliaSeed,
    mapper: &Map,
) -> Result<GlyphGrid, RenderError> {
    let algorithm = JuliaAlgorithm::new(size, seed, mapper.max_iterations())?;
    let iterations = generate_fractal(size, &algorithm)?;

    Ok(generate_glyph_grid(iterations, mapper, size)?)
}

/// Same output as [`render_julia`], with cells computed on the rayon pool.
pub fn render_julia_parallel<Map: GlyphMap>(
    size: GridSize,
    seed: JuliaSeed,
    mapper: &Map,
) -> Result<GlyphGrid, RenderError> {
    let algorithm = JuliaAlgorithm::new(size, seed, mapper.max_iterations())?;
    let iterations = generate_fractal_rayon(size, &algorithm)?;

    Ok(generate_glyph_grid(iterations, mapper, size)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::julia::glyph_mapping::ascii_gradient::AsciiGradient;

    #[test]
    fn test_single_cell_at_corner_escapes_immediately() {
        let grid = render_julia(
            GridSize::clamped(1, 1),
            JuliaSeed::new(0.0, 0.0),
            &AsciiGradient::new(),
        )
        .unwrap();

        assert_eq!(grid.to_text(), " \n");
    }

    #[test]
    fn test_two_by_two_with_zero_seed() {
        let grid = render_julia(
            GridSize::clamped(2, 2),
            JuliaSeed::new(0.0, 0.0),
            &AsciiGradient::new(),
        )
        .unwrap();

        assert_eq!(grid.to_text(), "  \n &\n");
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let size = GridSize::clamped(100, 100);
        let seed = JuliaSeed::new(-0.7, 0.27);
        let gradient = AsciiGradient::new();

        let sequential = render_julia(size, seed, &gradient).unwrap();
        let parallel = render_julia_parallel(size, seed, &gradient).unwrap();

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_single_glyph_palette_has_no_iteration_budget() {
        struct OneGlyph;

        impl GlyphMap for OneGlyph {
            fn glyph(&self, _: u32) -> u8 {
                b'#'
            }

            fn len(&self) -> usize {
                1
            }
        }

        let result = render_julia(GridSize::clamped(4, 4), JuliaSeed::new(0.0, 0.0), &OneGlyph);

        assert_eq!(result, Err(RenderError::Julia(JuliaError::ZeroMaxIterationsError)));
    }
}
