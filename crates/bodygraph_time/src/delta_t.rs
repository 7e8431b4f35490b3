//! ΔT = TT − UT, in seconds.
//!
//! Piecewise polynomials of Espenak & Meeus (NASA Five Millennium Canon of
//! Solar Eclipses) for 1600–2150, with the long-term parabola
//! `−20 + 32·u²` (u in centuries since 1820) outside that span.

use crate::julian::jd_to_decimal_year;

fn long_term(year: f64) -> f64 {
    let u = (year - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// ΔT in seconds for a decimal year.
pub fn delta_t_seconds(year: f64) -> f64 {
    match year {
        y if y < 1600.0 => long_term(y),
        y if y < 1700.0 => {
            let t = y - 1600.0;
            120.0 - 0.9808 * t - 0.01532 * t * t + t.powi(3) / 7129.0
        }
        y if y < 1800.0 => {
            let t = y - 1700.0;
            8.83 + 0.1603 * t - 0.005_928_5 * t * t + 0.000_133_36 * t.powi(3)
                - t.powi(4) / 1_174_000.0
        }
        y if y < 1860.0 => {
            let t = y - 1800.0;
            13.72 - 0.332_447 * t + 0.006_861_2 * t.powi(2) + 0.004_111_6 * t.powi(3)
                - 0.000_374_36 * t.powi(4)
                + 0.000_012_127_2 * t.powi(5)
                - 0.000_000_169_9 * t.powi(6)
                + 0.000_000_000_875 * t.powi(7)
        }
        y if y < 1900.0 => {
            let t = y - 1860.0;
            7.62 + 0.5737 * t - 0.251_754 * t.powi(2) + 0.016_806_68 * t.powi(3)
                - 0.000_447_362_4 * t.powi(4)
                + t.powi(5) / 233_174.0
        }
        y if y < 1920.0 => {
            let t = y - 1900.0;
            -2.79 + 1.494_119 * t - 0.059_893_9 * t.powi(2) + 0.006_196_6 * t.powi(3)
                - 0.000_197 * t.powi(4)
        }
        y if y < 1941.0 => {
            let t = y - 1920.0;
            21.20 + 0.844_93 * t - 0.076_100 * t.powi(2) + 0.002_093_6 * t.powi(3)
        }
        y if y < 1961.0 => {
            let t = y - 1950.0;
            29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
        }
        y if y < 1986.0 => {
            let t = y - 1975.0;
            45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
        }
        y if y < 2005.0 => {
            let t = y - 2000.0;
            63.86 + 0.3345 * t - 0.060_374 * t.powi(2)
                + 0.001_727_5 * t.powi(3)
                + 0.000_651_814 * t.powi(4)
                + 0.000_023_735_99 * t.powi(5)
        }
        y if y < 2050.0 => {
            let t = y - 2000.0;
            62.92 + 0.322_17 * t + 0.005_589 * t * t
        }
        y if y < 2150.0 => long_term(y) - 0.5628 * (2150.0 - y),
        y => long_term(y),
    }
}

/// Shift a UT Julian Date to Terrestrial Time.
pub fn jd_ut_to_jd_tt(jd_ut: f64) -> f64 {
    jd_ut + delta_t_seconds(jd_to_decimal_year(jd_ut)) / 86_400.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_near_64_seconds() {
        let dt = delta_t_seconds(2000.0);
        assert!((dt - 63.86).abs() < 0.1, "ΔT(2000) = {dt}");
    }

    #[test]
    fn late_1980s_near_56_seconds() {
        let dt = delta_t_seconds(1988.77);
        assert!((dt - 55.9).abs() < 1.0, "ΔT(1988.77) = {dt}");
    }

    #[test]
    fn continuous_across_2005_boundary() {
        let before = delta_t_seconds(2004.999_9);
        let after = delta_t_seconds(2005.0);
        assert!((before - after).abs() < 0.5);
    }

    #[test]
    fn tt_is_later_than_ut_in_modern_era() {
        let jd = 2_447_444.0;
        assert!(jd_ut_to_jd_tt(jd) > jd);
    }
}
