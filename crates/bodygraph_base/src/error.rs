//! Error types for gate and line construction.

use thiserror::Error;

/// Errors from checked gate/line constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BaseError {
    /// Gate number outside 1..=64.
    #[error("invalid gate {0}: must be 1..=64")]
    InvalidGate(u8),
    /// Line number outside 1..=6.
    #[error("invalid line {0}: must be 1..=6")]
    InvalidLine(u8),
}
