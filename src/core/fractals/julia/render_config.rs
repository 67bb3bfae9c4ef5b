use crate::core::data::grid_size::{GridSize, MAX_EXTENT};

const DEFAULT_COLUMNS: i64 = 80;
const DEFAULT_ROWS: i64 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub default_columns: i64,
    pub default_rows: i64,
    pub max_columns: u32,
    pub max_rows: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_columns: DEFAULT_COLUMNS,
            default_rows: DEFAULT_ROWS,
            max_columns: MAX_EXTENT,
            max_rows: MAX_EXTENT,
        }
    }
}

impl RenderConfig {
    /// Fills in defaults for absent extents, then clamps.
    #[must_use]
    pub fn grid_size(&self, columns: Option<i64>, rows: Option<i64>) -> GridSize {
        GridSize::clamped_within(
            columns.unwrap_or(self.default_columns),
            rows.unwrap_or(self.default_rows),
            self.max_columns,
            self.max_rows,
        )
    }
}
