//! Error types for calendar input and time conversion.

use thiserror::Error;

/// Errors from birth-time validation and calendar conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// A calendar field or UTC offset is out of range.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// A Julian Date that is NaN or infinite.
    #[error("non-finite Julian Date")]
    NonFiniteJd,
}
