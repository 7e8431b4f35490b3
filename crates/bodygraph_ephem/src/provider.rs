//! The position-provider seam.

use crate::error::EphemerisError;
use crate::planet::Planet;

/// Source of geocentric tropical ecliptic longitudes.
///
/// Implementations must be deterministic and free of side effects: the same
/// `(planet, jd_ut)` always yields the same longitude. Values are expected in
/// [0, 360) but callers go through [`ecliptic_longitude`], which normalises
/// whatever comes back.
pub trait PositionProvider: Send + Sync {
    /// Ecliptic longitude of `planet` in degrees at Julian Date `jd_ut` (UT).
    fn longitude(&self, planet: Planet, jd_ut: f64) -> Result<f64, EphemerisError>;
}

impl<P: PositionProvider + ?Sized> PositionProvider for &P {
    fn longitude(&self, planet: Planet, jd_ut: f64) -> Result<f64, EphemerisError> {
        (**self).longitude(planet, jd_ut)
    }
}

impl<P: PositionProvider + ?Sized> PositionProvider for Box<P> {
    fn longitude(&self, planet: Planet, jd_ut: f64) -> Result<f64, EphemerisError> {
        (**self).longitude(planet, jd_ut)
    }
}

/// Normalize an angle to [0, 360).
pub fn normalize_deg(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Signed angular difference in [-180, 180): `((deg + 180) mod 360) - 180`.
pub fn normalize_signed_deg(deg: f64) -> f64 {
    normalize_deg(deg + 180.0) - 180.0
}

/// Query `provider` and normalise the result into [0, 360).
///
/// Rejects non-finite epochs before the query and non-finite longitudes
/// after it.
pub fn ecliptic_longitude<P: PositionProvider + ?Sized>(
    provider: &P,
    planet: Planet,
    jd_ut: f64,
) -> Result<f64, EphemerisError> {
    if !jd_ut.is_finite() {
        return Err(EphemerisError::NonFiniteEpoch(jd_ut));
    }
    let lon = provider.longitude(planet, jd_ut)?;
    if !lon.is_finite() {
        return Err(EphemerisError::NonFiniteLongitude { planet });
    }
    Ok(normalize_deg(lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(f64);

    impl PositionProvider for Fixed {
        fn longitude(&self, _planet: Planet, _jd_ut: f64) -> Result<f64, EphemerisError> {
            Ok(self.0)
        }
    }

    #[test]
    fn normalize_range() {
        assert_eq!(normalize_deg(360.0), 0.0);
        assert!((normalize_deg(-10.0) - 350.0).abs() < 1e-12);
        assert!((normalize_deg(725.0) - 5.0).abs() < 1e-12);
        assert_eq!(normalize_deg(-1e-17), 0.0);
    }

    #[test]
    fn signed_wraps_across_zero() {
        assert!((normalize_signed_deg(350.0) - (-10.0)).abs() < 1e-12);
        assert!((normalize_signed_deg(-350.0) - 10.0).abs() < 1e-12);
        assert!((normalize_signed_deg(179.0) - 179.0).abs() < 1e-12);
        assert_eq!(normalize_signed_deg(180.0), -180.0);
    }

    #[test]
    fn provider_output_is_normalised() {
        let lon = ecliptic_longitude(&Fixed(-90.0), Planet::Mars, 2_451_545.0).unwrap();
        assert!((lon - 270.0).abs() < 1e-12);
        let lon = ecliptic_longitude(&Fixed(400.0), Planet::Mars, 2_451_545.0).unwrap();
        assert!((lon - 40.0).abs() < 1e-12);
    }

    #[test]
    fn non_finite_rejected() {
        assert_eq!(
            ecliptic_longitude(&Fixed(f64::NAN), Planet::Moon, 2_451_545.0),
            Err(EphemerisError::NonFiniteLongitude {
                planet: Planet::Moon
            })
        );
        assert!(matches!(
            ecliptic_longitude(&Fixed(0.0), Planet::Moon, f64::INFINITY),
            Err(EphemerisError::NonFiniteEpoch(_))
        ));
    }

    #[test]
    fn references_and_boxes_are_providers() {
        let boxed: Box<dyn PositionProvider> = Box::new(Fixed(12.0));
        assert_eq!(ecliptic_longitude(&boxed, Planet::Sun, 0.0).unwrap(), 12.0);
        let by_ref = &Fixed(13.0);
        assert_eq!(ecliptic_longitude(&by_ref, Planet::Sun, 0.0).unwrap(), 13.0);
    }
}
