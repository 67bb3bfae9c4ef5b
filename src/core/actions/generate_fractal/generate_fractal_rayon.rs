use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::cell::Cell;
use crate::core::data::grid_size::GridSize;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Results come back in the same row-major order as [`generate_fractal`].
///
/// [`generate_fractal`]: crate::core::actions::generate_fractal::generate_fractal::generate_fractal
pub fn generate_fractal_rayon<Alg>(
    size: GridSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let cells: Vec<Cell> = size.cells().collect();

    cells
        .into_par_iter()
        .map(|cell| algorithm.compute(cell))
        .collect()
}
