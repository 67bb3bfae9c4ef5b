use crate::core::data::cell::Cell;
use std::error::Error;

pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, cell: Cell) -> Result<Self::Success, Self::Failure>;
}
