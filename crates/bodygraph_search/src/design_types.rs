//! Types for the design-moment search.

use serde::{Deserialize, Serialize};

/// Configuration for [`find_design_jd`](crate::find_design_jd).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSearchConfig {
    /// Solar arc between design and birth, in degrees (default 88).
    pub solar_arc_deg: f64,
    /// Bracket start, in days before birth (default 100).
    pub bracket_far_days: f64,
    /// Bracket end, in days before birth (default 80).
    pub bracket_near_days: f64,
    /// Convergence threshold on the Sun's longitude, in degrees (default 1e-4).
    pub tolerance_deg: f64,
    /// Bisection cap (default 50).
    pub max_iterations: u32,
}

impl Default for DesignSearchConfig {
    fn default() -> Self {
        Self {
            solar_arc_deg: 88.0,
            bracket_far_days: 100.0,
            bracket_near_days: 80.0,
            tolerance_deg: 1e-4,
            max_iterations: 50,
        }
    }
}

impl DesignSearchConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.solar_arc_deg.is_finite() || self.solar_arc_deg <= 0.0 || self.solar_arc_deg >= 360.0
        {
            return Err("solar_arc_deg must be in (0, 360)");
        }
        if !self.bracket_near_days.is_finite() || self.bracket_near_days <= 0.0 {
            return Err("bracket_near_days must be positive");
        }
        if !self.bracket_far_days.is_finite() || self.bracket_far_days <= self.bracket_near_days {
            return Err("bracket_far_days must exceed bracket_near_days");
        }
        if !self.tolerance_deg.is_finite() || self.tolerance_deg <= 0.0 {
            return Err("tolerance_deg must be positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        Ok(())
    }
}

/// Outcome of the design-moment search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DesignTime {
    /// Design moment as Julian Date (UT).
    pub jd: f64,
    /// Sun longitude being sought, degrees [0, 360).
    pub target_longitude_deg: f64,
    /// Signed Sun longitude minus target at `jd`, degrees.
    pub residual_deg: f64,
    /// Bisection steps taken.
    pub iterations: u32,
    /// Whether `|residual_deg|` fell under the tolerance before the cap.
    pub converged: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let c = DesignSearchConfig::default();
        assert_eq!(c.max_iterations, 50);
        assert!((c.solar_arc_deg - 88.0).abs() < 1e-12);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_inverted_bracket() {
        let c = DesignSearchConfig {
            bracket_far_days: 70.0,
            ..Default::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_zero_iterations() {
        let c = DesignSearchConfig {
            max_iterations: 0,
            ..Default::default()
        };
        assert_eq!(c.validate(), Err("max_iterations must be > 0"));
    }

    #[test]
    fn rejects_nan_tolerance() {
        let c = DesignSearchConfig {
            tolerance_deg: f64::NAN,
            ..Default::default()
        };
        assert!(c.validate().is_err());
    }
}
