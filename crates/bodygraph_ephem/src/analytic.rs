//! Built-in analytic ephemeris.

use bodygraph_time::{jd_to_centuries, jd_ut_to_jd_tt};

use crate::error::EphemerisError;
use crate::kepler::planet_apparent_longitude_deg;
use crate::lunar_nodes::{NodeMode, node_deg};
use crate::moon::moon_apparent_longitude_deg;
use crate::planet::Planet;
use crate::provider::{PositionProvider, normalize_deg};
use crate::sun::sun_apparent_longitude_deg;

/// File-free position provider built from series expansions.
///
/// Accuracy is a few arcminutes for the Sun, Moon and inner planets and
/// somewhat worse for the outer planets, within 1800–2050. That is well
/// inside a line (0.9375°) almost everywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyticEphemeris {
    pub node_mode: NodeMode,
}

impl AnalyticEphemeris {
    pub const fn new(node_mode: NodeMode) -> Self {
        Self { node_mode }
    }
}

impl PositionProvider for AnalyticEphemeris {
    fn longitude(&self, planet: Planet, jd_ut: f64) -> Result<f64, EphemerisError> {
        if !jd_ut.is_finite() {
            return Err(EphemerisError::NonFiniteEpoch(jd_ut));
        }
        let t = jd_to_centuries(jd_ut_to_jd_tt(jd_ut));
        let lon = match planet {
            Planet::Sun => sun_apparent_longitude_deg(t),
            Planet::Moon => moon_apparent_longitude_deg(t),
            Planet::NorthNode => node_deg(t, self.node_mode),
            _ => planet_apparent_longitude_deg(planet, t).ok_or(EphemerisError::Unavailable {
                planet,
                jd: jd_ut,
                reason: "no orbital elements",
            })?,
        };
        Ok(normalize_deg(lon))
    }
}
