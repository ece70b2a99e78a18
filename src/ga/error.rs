//! Error types for the GA engine.

/// Errors reported by chromosome, population and operator calls.
///
/// Every error is raised before any state is touched, so the target
/// population or individual keeps its last valid state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GaError {
    /// A size, length or gene value the operation cannot accept.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An individual or gene position outside `0..len`.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl GaError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        GaError::InvalidInput(reason.into())
    }

    pub(crate) fn length_mismatch(expected: usize, actual: usize) -> Self {
        GaError::InvalidInput(format!(
            "chromosome length mismatch: expected {expected}, got {actual}"
        ))
    }
}

/// Result alias for GA operations.
pub type Result<T> = std::result::Result<T, GaError>;
