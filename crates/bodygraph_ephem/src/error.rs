//! Error types for position lookups.

use thiserror::Error;

use crate::planet::Planet;

/// Errors from a [`PositionProvider`](crate::PositionProvider).
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The requested Julian Date is NaN or infinite.
    #[error("non-finite epoch: {0}")]
    NonFiniteEpoch(f64),
    /// The provider produced a NaN or infinite longitude.
    #[error("{planet} longitude is not finite")]
    NonFiniteLongitude { planet: Planet },
    /// The provider does not cover this body or epoch.
    #[error("{planet} unavailable at JD {jd}: {reason}")]
    Unavailable {
        planet: Planet,
        jd: f64,
        reason: &'static str,
    },
}
