use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::cell::Cell;
use crate::core::data::complex::Complex;
use crate::core::data::grid_size::GridSize;
use crate::core::fractals::julia::errors::JuliaError;
use crate::core::fractals::julia::seed::JuliaSeed;
use crate::core::util::cell_to_complex_coords::{
    CellToComplexCoordsError, cell_to_complex_coords,
};
use std::ops::ControlFlow;

const ESCAPE_RADIUS_SQUARED: f32 = 4.0;

/// Escape-time count for `z → z² + c` starting at `z`.
///
/// Returns the zero-based index of the step whose result first leaves the
/// radius-2 disc. An orbit that survives all `max_iterations` steps reports
/// `max_iterations - 1`, one short of the budget.
#[must_use]
pub fn escape_iterations(z: Complex, c: Complex, max_iterations: u32) -> u32 {
    let orbit = (0..max_iterations).try_fold(z, |z0, iteration| {
        let z1 = z0.square() + c;

        if z1.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            ControlFlow::Break(iteration)
        } else {
            ControlFlow::Continue(z1)
        }
    });

    match orbit {
        ControlFlow::Break(iteration) => iteration,
        ControlFlow::Continue(_) => max_iterations.saturating_sub(1),
    }
}

#[derive(Debug, PartialEq)]
pub struct JuliaAlgorithm {
    grid_size: GridSize,
    seed: JuliaSeed,
    max_iterations: u32,
}

impl FractalAlgorithm for JuliaAlgorithm {
    type Success = u32;
    type Failure = CellToComplexCoordsError;

    fn compute(&self, cell: Cell) -> Result<Self::Success, Self::Failure> {
        let z = cell_to_complex_coords(cell, self.grid_size)?;

        Ok(escape_iterations(z, self.seed.into(), self.max_iterations))
    }
}

impl JuliaAlgorithm {
    pub fn new(
        grid_size: GridSize,
        seed: JuliaSeed,
        max_iterations: u32,
    ) -> Result<Self, JuliaError> {
        if max_iterations == 0 {
            return Err(JuliaError::ZeroMaxIterationsError);
        }

        Ok(Self {
            grid_size,
            seed,
            max_iterations,
        })
    }
}
