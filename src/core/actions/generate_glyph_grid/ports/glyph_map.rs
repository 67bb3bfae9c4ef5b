pub trait GlyphMap {
    /// Glyph shown for a cell whose orbit stopped after `iterations`.
    fn glyph(&self, iterations: u32) -> u8;

    /// Number of distinct glyphs, sparsest first.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iteration budget that keeps every count inside the palette.
    fn max_iterations(&self) -> u32 {
        self.len().saturating_sub(1) as u32
    }
}
