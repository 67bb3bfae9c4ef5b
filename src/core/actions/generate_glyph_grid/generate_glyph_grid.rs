use crate::core::actions::generate_glyph_grid::ports::glyph_map::GlyphMap;
use crate::core::data::glyph_grid::{GlyphGrid, GlyphGridError};
use crate::core::data::grid_size::GridSize;

/// Maps per-cell iteration counts (row-major) to glyphs.
pub fn generate_glyph_grid<Map: GlyphMap>(
    iterations: Vec<u32>,
    mapper: &Map,
    size: GridSize,
) -> Result<GlyphGrid, GlyphGridError> {
    let glyphs = iterations
        .into_iter()
        .map(|count| mapper.glyph(count))
        .collect();

    GlyphGrid::from_glyphs(size, glyphs)
}
