use crate::core::data::cell::Cell;
use crate::core::data::grid_size::GridSize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlyphGridError {
    #[error("grid of {columns}x{rows} needs {expected} glyphs, got {actual}")]
    SizeMismatch {
        columns: u32,
        rows: u32,
        expected: usize,
        actual: usize,
    },
}

pub type GlyphGridData = Vec<u8>;

/// Row-major buffer of single-byte glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphGrid {
    size: GridSize,
    glyphs: GlyphGridData,
}

impl GlyphGrid {
    pub fn from_glyphs(size: GridSize, glyphs: GlyphGridData) -> Result<Self, GlyphGridError> {
        if glyphs.len() != size.cell_count() {
            return Err(GlyphGridError::SizeMismatch {
                columns: size.columns(),
                rows: size.rows(),
                expected: size.cell_count(),
                actual: glyphs.len(),
            });
        }

        Ok(Self { size, glyphs })
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[must_use]
    pub fn glyphs(&self) -> &[u8] {
        &self.glyphs
    }

    #[must_use]
    pub fn glyph_at(&self, cell: Cell) -> Option<u8> {
        self.size.index_of(cell).map(|index| self.glyphs[index])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.glyphs.chunks_exact(self.size.columns() as usize)
    }

    /// Joins the rows into text, every row (the last included) followed
    /// by a single `\n`.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.glyphs.len() + self.size.rows() as usize);

        for row in self.rows() {
            text.extend(row.iter().copied().map(char::from));
            text.push('\n');
        }

        text
    }
}
