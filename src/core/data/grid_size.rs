use crate::core::data::cell::Cell;

pub const MIN_EXTENT: u32 = 1;
pub const MAX_EXTENT: u32 = 100;

/// Columns and rows of a glyph grid, always at least one of each.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridSize {
    columns: u32,
    rows: u32,
}

impl GridSize {
    /// Clamps the requested extents into `[MIN_EXTENT, MAX_EXTENT]`.
    #[must_use]
    pub fn clamped(columns: i64, rows: i64) -> Self {
        Self::clamped_within(columns, rows, MAX_EXTENT, MAX_EXTENT)
    }

    /// Clamps against caller-provided upper bounds. Bounds below
    /// `MIN_EXTENT` are raised to it.
    #[must_use]
    pub fn clamped_within(columns: i64, rows: i64, max_columns: u32, max_rows: u32) -> Self {
        Self {
            columns: clamp_extent(columns, max_columns),
            rows: clamp_extent(rows, max_rows),
        }
    }

    #[must_use]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    #[must_use]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.column < self.columns
    }

    /// Row-major index of `cell`, or `None` when it lies outside the grid.
    #[must_use]
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        self.contains(cell)
            .then(|| cell.row as usize * self.columns as usize + cell.column as usize)
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let columns = self.columns;

        (0..self.rows).flat_map(move |row| (0..columns).map(move |column| Cell { row, column }))
    }
}

fn clamp_extent(requested: i64, max: u32) -> u32 {
    let max = max.max(MIN_EXTENT);

    requested.clamp(i64::from(MIN_EXTENT), i64::from(max)) as u32
}
