//! Design-moment search.
//!
//! The design moment is when the Sun stood a fixed solar arc (88°) behind
//! its birth longitude, roughly three months earlier. The Sun's daily
//! motion varies through the year, so the moment is found by bisection on
//!
//!   f(t) = normalize_signed(sun(t) - target)
//!
//! over a bracket of 80 to 100 days before birth, where f increases
//! monotonically.

use bodygraph_ephem::{
    Planet, PositionProvider, ecliptic_longitude, normalize_deg, normalize_signed_deg,
};

use crate::design_types::{DesignSearchConfig, DesignTime};
use crate::error::SearchError;

/// Find the design moment for a birth at `jd_birth` (UT).
///
/// Returns the midpoint at which the residual first falls under
/// `tolerance_deg`. If the cap is reached first, returns the last midpoint
/// that landed behind the target (seeded with the initial midpoint) and
/// flags `converged = false`; this is logged, not an error.
pub fn find_design_jd<P: PositionProvider + ?Sized>(
    provider: &P,
    jd_birth: f64,
    config: &DesignSearchConfig,
) -> Result<DesignTime, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;

    let birth_sun = ecliptic_longitude(provider, Planet::Sun, jd_birth)?;
    let target = normalize_deg(birth_sun - config.solar_arc_deg);

    let mut low = jd_birth - config.bracket_far_days;
    let mut high = jd_birth - config.bracket_near_days;
    let mut candidate = 0.5 * (low + high);

    for i in 0..config.max_iterations {
        let mid = 0.5 * (low + high);
        let diff = normalize_signed_deg(ecliptic_longitude(provider, Planet::Sun, mid)? - target);

        if diff.abs() < config.tolerance_deg {
            tracing::debug!(
                jd = mid,
                residual = diff,
                iterations = i + 1,
                "design moment converged"
            );
            return Ok(DesignTime {
                jd: mid,
                target_longitude_deg: target,
                residual_deg: diff,
                iterations: i + 1,
                converged: true,
            });
        }

        if diff > 0.0 {
            high = mid;
        } else {
            low = mid;
            candidate = mid;
        }
    }

    let residual =
        normalize_signed_deg(ecliptic_longitude(provider, Planet::Sun, candidate)? - target);
    tracing::warn!(
        jd = candidate,
        residual,
        max_iterations = config.max_iterations,
        "design search hit the iteration cap, using best candidate"
    );
    Ok(DesignTime {
        jd: candidate,
        target_longitude_deg: target,
        residual_deg: residual,
        iterations: config.max_iterations,
        converged: false,
    })
}
