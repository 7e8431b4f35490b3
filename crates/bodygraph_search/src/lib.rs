//! Design-moment search and chart assembly.
//!
//! This crate provides:
//! - [`find_design_jd`]: bisection for the moment the Sun stood 88° of arc
//!   before its birth longitude
//! - [`chart_point_at`]: the thirteen chart points mapped to gates and lines
//! - [`calculate_chart`]: personality + design + derivation into a
//!   [`ChartResult`]

pub mod chart;
pub mod chart_types;
pub mod design;
pub mod design_types;
pub mod error;

pub use chart::{calculate_chart, calculate_chart_default, chart_point_at};
pub use chart_types::{
    ALL_POINT_KINDS, ChartConfig, ChartPoint, ChartPointKind, ChartResult, PlanetPosition,
    PointSource,
};
pub use design::find_design_jd;
pub use design_types::{DesignSearchConfig, DesignTime};
pub use error::SearchError;
