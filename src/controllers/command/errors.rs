use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// `position` is the index into the request's argv.
    #[error("value is not an integer or out of range")]
    NotAnInteger { position: usize, value: String },
}
