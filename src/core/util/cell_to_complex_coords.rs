use crate::core::data::cell::Cell;
use crate::core::data::complex::Complex;
use crate::core::data::grid_size::GridSize;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum CellToComplexCoordsError {
    #[error(
        "cell (row: {}, column: {}) is outside the {}x{} grid",
        .cell.row,
        .cell.column,
        .grid.columns(),
        .grid.rows()
    )]
    CellOutsideGrid { cell: Cell, grid: GridSize },
}

/// Maps a cell onto the `[-2, 2)` square of the complex plane.
///
/// The row index drives the real axis and the column index the imaginary
/// one, each scaled by `2 * extent + 1` of its own axis. Rendered output
/// depends on this exact arithmetic; do not normalise it into a symmetric
/// viewport.
pub fn cell_to_complex_coords(
    cell: Cell,
    grid: GridSize,
) -> Result<Complex, CellToComplexCoordsError> {
    if !grid.contains(cell) {
        return Err(CellToComplexCoordsError::CellOutsideGrid { cell, grid });
    }

    Ok(Complex {
        real: axis_coord(cell.row, grid.rows()),
        imag: axis_coord(cell.column, grid.columns()),
    })
}

fn axis_coord(index: u32, extent: u32) -> f32 {
    4.0 * (2 * index) as f32 / (2 * extent + 1) as f32 - 2.0
}
