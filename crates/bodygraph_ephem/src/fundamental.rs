//! Delaunay fundamental arguments and a low-precision nutation in longitude.
//!
//! Polynomials from IERS Conventions 2010, Table 5.2e (arcseconds, `t` in
//! Julian centuries of TT since J2000.0).

/// Arcseconds to radians.
const AS2RAD: f64 = std::f64::consts::PI / (180.0 * 3600.0);

/// Delaunay arguments `[l, l', F, D, Ω]` in radians.
///
/// - `l`: mean anomaly of the Moon
/// - `l'`: mean anomaly of the Sun
/// - `F`: mean argument of latitude of the Moon
/// - `D`: mean elongation of the Moon from the Sun
/// - `Ω`: mean longitude of the Moon's ascending node
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let l = (485868.249036 + 1717915923.2178 * t + 31.8792 * t2 + 0.051635 * t3 - 0.00024470 * t4)
        * AS2RAD;
    let lp = (1287104.79305 + 129596581.0481 * t - 0.5532 * t2 + 0.000136 * t3 - 0.00001149 * t4)
        * AS2RAD;
    let f = (335779.526232 + 1739527262.8478 * t - 12.7512 * t2 - 0.001037 * t3 + 0.00000417 * t4)
        * AS2RAD;
    let d = (1072260.70369 + 1602961601.2090 * t - 6.3706 * t2 + 0.006593 * t3 - 0.00003169 * t4)
        * AS2RAD;
    let om =
        (450160.398036 - 6962890.5431 * t + 7.4722 * t2 + 0.007702 * t3 - 0.00005939 * t4) * AS2RAD;

    [l, lp, f, d, om]
}

/// Nutation in longitude Δψ in degrees, four-term series (Meeus ch. 22),
/// good to about 0.5″.
pub fn nutation_longitude_deg(t: f64) -> f64 {
    let om = (125.04452 - 1934.136261 * t).to_radians();
    let sun_l = (280.4665 + 36000.7698 * t).to_radians();
    let moon_l = (218.3165 + 481267.8813 * t).to_radians();
    let arcsec = -17.20 * om.sin() - 1.32 * (2.0 * sun_l).sin() - 0.23 * (2.0 * moon_l).sin()
        + 0.21 * (2.0 * om).sin();
    arcsec / 3600.0
}

/// General precession in longitude from J2000.0 to the equinox of date, degrees.
pub fn precession_longitude_deg(t: f64) -> f64 {
    (5028.796195 * t + 1.1054348 * t * t) / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omega_at_j2000() {
        let args = fundamental_arguments(0.0);
        assert!((args[4].to_degrees() - 125.044_555).abs() < 1e-5);
    }

    #[test]
    fn nutation_bounded_by_18_arcsec() {
        for i in 0..200 {
            let t = -1.0 + i as f64 * 0.01;
            assert!(nutation_longitude_deg(t).abs() < 19.0 / 3600.0);
        }
    }

    #[test]
    fn meeus_example_22a_nutation() {
        // 1987-Apr-10 0h TD: Δψ = -3.788″
        let t = -0.127_296_372_348;
        let dpsi = nutation_longitude_deg(t) * 3600.0;
        assert!((dpsi - (-3.788)).abs() < 0.5, "Δψ = {dpsi}″");
    }

    #[test]
    fn precession_about_50_arcsec_per_year() {
        let per_year = precession_longitude_deg(0.01) * 3600.0;
        assert!((per_year - 50.29).abs() < 0.05);
    }
}
