//! Failure taxonomy shared by both sorting drivers.

use thiserror::Error;

/// Errors reported by the top-level sort operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// A required argument was missing or could not be interpreted.
    ///
    /// Always detected before the sequence is touched.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The merge scratch buffer could not be reserved.
    ///
    /// The buffer is reserved before the first merge, so the sequence is left exactly
    /// as it was passed in.
    #[error("out of memory: could not reserve a scratch buffer of {requested} elements")]
    OutOfMemory { requested: usize },
}

impl SortError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        SortError::InvalidArgument(msg.into())
    }
}

pub type Result<T, E = SortError> = std::result::Result<T, E>;
