//! Ecliptic longitudes for the bodies a chart needs.
//!
//! This crate provides:
//! - [`Planet`]: the eleven queried bodies (Sun through Pluto, plus the
//!   Moon's north node)
//! - [`PositionProvider`]: the seam between chart logic and any ephemeris
//! - [`AnalyticEphemeris`]: a built-in, file-free, low-precision model
//!   (Meeus solar and lunar theories, Standish Keplerian elements,
//!   Delaunay-argument lunar nodes)
//!
//! All longitudes are geocentric, tropical, referred to the equinox of date,
//! in degrees [0, 360).

pub mod analytic;
pub mod error;
pub mod fundamental;
pub mod kepler;
pub mod lunar_nodes;
pub mod moon;
pub mod planet;
pub mod provider;
pub mod sun;

pub use analytic::AnalyticEphemeris;
pub use error::EphemerisError;
pub use lunar_nodes::{NodeMode, mean_node_deg, true_node_deg};
pub use planet::{ALL_PLANETS, Planet};
pub use provider::{PositionProvider, ecliptic_longitude, normalize_deg, normalize_signed_deg};
