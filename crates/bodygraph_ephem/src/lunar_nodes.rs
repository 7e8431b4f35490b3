//! Longitude of the Moon's ascending (north) node.
//!
//! Mean node: the fifth Delaunay argument Ω (IERS Conventions 2010).
//! True node: mean node plus the five periodic terms of Meeus,
//! *Astronomical Algorithms* ch. 47 (2(D−F), M, 2D, 2F, 2(M′−F)).
//!
//! The descending (south) node is not computed here; it is always the
//! north node + 180°, derived at chart level.

use serde::{Deserialize, Serialize};

use crate::fundamental::fundamental_arguments;
use crate::provider::normalize_deg;

/// Mean or true (perturbed) node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeMode {
    /// Smooth polynomial regression only.
    Mean,
    /// Mean node plus short-period corrections.
    #[default]
    True,
}

impl std::str::FromStr for NodeMode {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mean" => Ok(Self::Mean),
            "true" => Ok(Self::True),
            _ => Err("node mode must be 'mean' or 'true'"),
        }
    }
}

/// Correction from mean to true node, in degrees.
///
/// `args` = `[l, l', F, D, Ω]` in radians.
fn node_perturbation_deg(args: &[f64; 5]) -> f64 {
    #[rustfmt::skip]
    static TERMS: [[f64; 6]; 5] = [
        // nl   nl'   nF    nD    nΩ    amplitude (deg)
        [ 0.0,  0.0, -2.0,  2.0,  0.0, -1.4979],
        [ 0.0,  1.0,  0.0,  0.0,  0.0, -0.1500],
        [ 0.0,  0.0,  0.0,  2.0,  0.0, -0.1226],
        [ 0.0,  0.0,  2.0,  0.0,  0.0,  0.1176],
        [ 2.0,  0.0, -2.0,  0.0,  0.0, -0.0801],
    ];

    TERMS
        .iter()
        .map(|term| {
            let angle = term[0] * args[0]
                + term[1] * args[1]
                + term[2] * args[2]
                + term[3] * args[3]
                + term[4] * args[4];
            term[5] * angle.sin()
        })
        .sum()
}

/// Mean north node longitude in degrees [0, 360).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn mean_node_deg(t: f64) -> f64 {
    normalize_deg(fundamental_arguments(t)[4].to_degrees())
}

/// True north node longitude in degrees [0, 360).
pub fn true_node_deg(t: f64) -> f64 {
    let args = fundamental_arguments(t);
    normalize_deg(args[4].to_degrees() + node_perturbation_deg(&args))
}

/// North node longitude for the given mode.
pub fn node_deg(t: f64, mode: NodeMode) -> f64 {
    match mode {
        NodeMode::Mean => mean_node_deg(t),
        NodeMode::True => true_node_deg(t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::normalize_signed_deg;

    #[test]
    fn mean_node_at_j2000_approx_125() {
        let deg = mean_node_deg(0.0);
        assert!((deg - 125.04).abs() < 0.1, "mean node at J2000 = {deg}");
    }

    #[test]
    fn mean_node_regresses_about_19_34_per_year() {
        let diff = normalize_signed_deg(mean_node_deg(0.01) - mean_node_deg(0.0));
        assert!((diff - (-19.34)).abs() < 0.5, "1-year motion = {diff}");
    }

    #[test]
    fn true_stays_within_2_degrees_of_mean() {
        for &t in &[-1.0, -0.12, 0.0, 0.24, 1.0] {
            let diff = normalize_signed_deg(true_node_deg(t) - mean_node_deg(t)).abs();
            assert!(diff < 2.0, "t={t}: |true - mean| = {diff}");
        }
    }

    #[test]
    fn mode_dispatch() {
        assert_eq!(node_deg(0.3, NodeMode::Mean), mean_node_deg(0.3));
        assert_eq!(node_deg(0.3, NodeMode::True), true_node_deg(0.3));
        assert_eq!(NodeMode::default(), NodeMode::True);
    }

    #[test]
    fn parse_mode() {
        assert_eq!("Mean".parse::<NodeMode>(), Ok(NodeMode::Mean));
        assert_eq!("true".parse::<NodeMode>(), Ok(NodeMode::True));
        assert!("osculating".parse::<NodeMode>().is_err());
    }
}
