/// A character cell addressed by its zero-based row and column.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: u32,
    pub column: u32,
}
