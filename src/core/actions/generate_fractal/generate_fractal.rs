use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid_size::GridSize;

pub fn generate_fractal<Alg: FractalAlgorithm>(
    size: GridSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    size.cells().map(|cell| algorithm.compute(cell)).collect()
}
