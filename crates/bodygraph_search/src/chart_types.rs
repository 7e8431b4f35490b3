//! Types for chart assembly.

use serde::{Deserialize, Serialize};

use bodygraph_base::{Authority, CenterSet, Channel, GateSet, HdType, Profile};
use bodygraph_ephem::Planet;

use crate::design_types::{DesignSearchConfig, DesignTime};

/// The thirteen chart points, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChartPointKind {
    Sun,
    Earth,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    #[serde(rename = "N.Node")]
    NorthNode,
    #[serde(rename = "S.Node")]
    SouthNode,
}

/// All chart points in display order.
pub const ALL_POINT_KINDS: [ChartPointKind; 13] = [
    ChartPointKind::Sun,
    ChartPointKind::Earth,
    ChartPointKind::Moon,
    ChartPointKind::Mercury,
    ChartPointKind::Venus,
    ChartPointKind::Mars,
    ChartPointKind::Jupiter,
    ChartPointKind::Saturn,
    ChartPointKind::Uranus,
    ChartPointKind::Neptune,
    ChartPointKind::Pluto,
    ChartPointKind::NorthNode,
    ChartPointKind::SouthNode,
];

/// Where a chart point's longitude comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointSource {
    /// Looked up from the provider.
    Queried(Planet),
    /// 180° from a queried body.
    OppositeOf(Planet),
}

impl ChartPointKind {
    /// Display label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Earth => "Earth",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
            Self::NorthNode => "N.Node",
            Self::SouthNode => "S.Node",
        }
    }

    pub const fn source(self) -> PointSource {
        match self {
            Self::Sun => PointSource::Queried(Planet::Sun),
            Self::Earth => PointSource::OppositeOf(Planet::Sun),
            Self::Moon => PointSource::Queried(Planet::Moon),
            Self::Mercury => PointSource::Queried(Planet::Mercury),
            Self::Venus => PointSource::Queried(Planet::Venus),
            Self::Mars => PointSource::Queried(Planet::Mars),
            Self::Jupiter => PointSource::Queried(Planet::Jupiter),
            Self::Saturn => PointSource::Queried(Planet::Saturn),
            Self::Uranus => PointSource::Queried(Planet::Uranus),
            Self::Neptune => PointSource::Queried(Planet::Neptune),
            Self::Pluto => PointSource::Queried(Planet::Pluto),
            Self::NorthNode => PointSource::Queried(Planet::NorthNode),
            Self::SouthNode => PointSource::OppositeOf(Planet::NorthNode),
        }
    }
}

impl std::fmt::Display for ChartPointKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One chart point mapped onto the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetPosition {
    pub point: ChartPointKind,
    /// Tropical longitude, degrees [0, 360), unrounded.
    pub degree: f64,
    pub gate: u8,
    pub line: u8,
}

/// All thirteen positions at one moment (personality or design).
///
/// Only built by [`chart_point_at`](crate::chart_point_at), which fills one
/// position per [`ALL_POINT_KINDS`] entry in that order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ChartPoint {
    pub(crate) positions: [PlanetPosition; 13],
}

impl ChartPoint {
    /// The Sun, always the first position.
    pub fn sun(&self) -> &PlanetPosition {
        &self.positions[0]
    }

    /// Position of `kind`, if present.
    pub fn get(&self, kind: ChartPointKind) -> Option<&PlanetPosition> {
        self.positions.iter().find(|p| p.point == kind)
    }

    /// Gates activated at this moment.
    pub fn gates(&self) -> GateSet {
        self.positions.iter().map(|p| p.gate).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlanetPosition> {
        self.positions.iter()
    }
}

/// Configuration for [`calculate_chart`](crate::calculate_chart).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub design: DesignSearchConfig,
}

impl ChartConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        self.design.validate()
    }
}

/// A complete chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResult {
    #[serde(rename = "type")]
    pub hd_type: HdType,
    pub profile: Profile,
    pub authority: Authority,
    pub defined_centers: CenterSet,
    pub undefined_centers: CenterSet,
    pub active_gates: GateSet,
    pub active_channels: Vec<Channel>,
    /// Conscious positions at birth.
    pub personality: ChartPoint,
    /// Unconscious positions at the design moment.
    pub design: ChartPoint,
    pub personality_jd: f64,
    pub design_time: DesignTime,
}
