//! Error types for the search and chart layer.

use thiserror::Error;

use bodygraph_ephem::EphemerisError;
use bodygraph_time::TimeError;

/// Errors from design search and chart assembly.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// A search or chart configuration field is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// Birth time failed validation or conversion.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// The position provider failed.
    #[error("ephemeris error: {0}")]
    Ephemeris(#[from] EphemerisError),
}
