//! Error types for the correlogram library.

use thiserror::Error;

/// Result type alias for correlogram operations.
pub type Result<T> = std::result::Result<T, CorrelogramError>;

/// Errors that can occur while analyzing a series.
///
/// Every variant describes invalid input: the computation is aborted before
/// any vector is produced. Numerical degeneracies (zero variance, singular
/// Yule-Walker systems) are recovered per lag and never show up here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CorrelogramError {
    /// Input series is empty.
    #[error("empty input data")]
    EmptyData,

    /// The series holds a NaN or infinite observation.
    #[error("non-finite value at index {index}")]
    NonFiniteValue { index: usize },

    /// Sample size passed to the confidence bound must be positive.
    #[error("invalid sample size: {0}")]
    InvalidSampleSize(usize),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl CorrelogramError {
    /// Whether the error stems from caller input. Currently true for all variants.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::EmptyData
                | Self::NonFiniteValue { .. }
                | Self::InvalidSampleSize(_)
                | Self::InvalidParameter(_)
        )
    }
}
