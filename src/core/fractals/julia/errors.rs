use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum JuliaError {
    #[error("Maximum iterations must be greater than zero")]
    ZeroMaxIterationsError,
}
