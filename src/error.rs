use thiserror::Error;

/// Failure modes of the checked `Vector` operations.
///
/// All variants describe caller misuse. None of them are transient, so
/// retrying the same call on the same vector fails the same way.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    #[error("vector is empty")]
    Empty,
    #[error("index {index} out of range for vector of length {len}")]
    Index { index: usize, len: usize },
    #[error("element not found")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, VectorError>;
