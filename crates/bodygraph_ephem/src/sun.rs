//! Apparent solar longitude, Meeus *Astronomical Algorithms* ch. 25
//! (low-accuracy theory, about 0.01°).

use crate::provider::normalize_deg;

/// Apparent geocentric longitude of the Sun in degrees [0, 360),
/// true equinox of date. `t` = Julian centuries of TT since J2000.0.
pub fn sun_apparent_longitude_deg(t: f64) -> f64 {
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let m = (357.52911 + 35999.05029 * t - 0.0001537 * t * t).to_radians();
    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();
    let omega = (125.04 - 1934.136 * t).to_radians();
    // -0.00569 is aberration; the sin(Ω) term is nutation
    normalize_deg(l0 + c - 0.00569 - 0.00478 * omega.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bodygraph_time::jd_to_centuries;

    #[test]
    fn meeus_example_25a() {
        // 1992-Oct-13.0 TD: apparent λ = 199.90895°
        let t = jd_to_centuries(2_448_908.5);
        let lon = sun_apparent_longitude_deg(t);
        assert!((lon - 199.908_95).abs() < 0.001, "λ = {lon}");
    }

    #[test]
    fn advances_about_one_degree_per_day() {
        let t0 = jd_to_centuries(2_451_545.0);
        let t1 = jd_to_centuries(2_451_546.0);
        let step = normalize_deg(sun_apparent_longitude_deg(t1) - sun_apparent_longitude_deg(t0));
        assert!((0.95..1.03).contains(&step), "daily motion = {step}");
    }
}
