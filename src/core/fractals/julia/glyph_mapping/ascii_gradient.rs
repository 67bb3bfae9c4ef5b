use crate::core::actions::generate_glyph_grid::ports::glyph_map::GlyphMap;

/// Sparsest to densest.
pub const ASCII_GRADIENT: &[u8; 10] = b" .:~=+*#&@";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiGradient {
    glyphs: &'static [u8],
}

impl Default for AsciiGradient {
    fn default() -> Self {
        Self::new()
    }
}

impl AsciiGradient {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            glyphs: ASCII_GRADIENT,
        }
    }

    #[must_use]
    pub fn contains(&self, glyph: u8) -> bool {
        self.glyphs.contains(&glyph)
    }
}

impl GlyphMap for AsciiGradient {
    fn glyph(&self, iterations: u32) -> u8 {
        self.glyphs[iterations as usize % self.glyphs.len()]
    }

    fn len(&self) -> usize {
        self.glyphs.len()
    }
}
