//! Lunar longitude, Meeus *Astronomical Algorithms* ch. 47.
//!
//! The periodic series for ΣL is truncated to its 50 largest terms
//! (amplitudes ≥ 0.0005°), which keeps the error near 0.01°.

use crate::fundamental::nutation_longitude_deg;
use crate::provider::normalize_deg;

/// Table 47.A longitude terms: `[D, M, M', F, amplitude in 1e-6 deg]`.
#[rustfmt::skip]
static LONGITUDE_TERMS: [[f64; 5]; 50] = [
    // D     M     M'    F     ΣL
    [ 0.0,  0.0,  1.0,  0.0,  6288774.0],
    [ 2.0,  0.0, -1.0,  0.0,  1274027.0],
    [ 2.0,  0.0,  0.0,  0.0,   658314.0],
    [ 0.0,  0.0,  2.0,  0.0,   213618.0],
    [ 0.0,  1.0,  0.0,  0.0,  -185116.0],
    [ 0.0,  0.0,  0.0,  2.0,  -114332.0],
    [ 2.0,  0.0, -2.0,  0.0,    58793.0],
    [ 2.0, -1.0, -1.0,  0.0,    57066.0],
    [ 2.0,  0.0,  1.0,  0.0,    53322.0],
    [ 2.0, -1.0,  0.0,  0.0,    45758.0],
    [ 0.0,  1.0, -1.0,  0.0,   -40923.0],
    [ 1.0,  0.0,  0.0,  0.0,   -34720.0],
    [ 0.0,  1.0,  1.0,  0.0,   -30383.0],
    [ 2.0,  0.0,  0.0, -2.0,    15327.0],
    [ 0.0,  0.0,  1.0,  2.0,   -12528.0],
    [ 0.0,  0.0,  1.0, -2.0,    10980.0],
    [ 4.0,  0.0, -1.0,  0.0,    10675.0],
    [ 0.0,  0.0,  3.0,  0.0,    10034.0],
    [ 4.0,  0.0, -2.0,  0.0,     8548.0],
    [ 2.0,  1.0, -1.0,  0.0,    -7888.0],
    [ 2.0,  1.0,  0.0,  0.0,    -6766.0],
    [ 1.0,  0.0, -1.0,  0.0,    -5163.0],
    [ 1.0,  1.0,  0.0,  0.0,     4987.0],
    [ 2.0, -1.0,  1.0,  0.0,     4036.0],
    [ 2.0,  0.0,  2.0,  0.0,     3994.0],
    [ 4.0,  0.0,  0.0,  0.0,     3861.0],
    [ 2.0,  0.0, -3.0,  0.0,     3665.0],
    [ 0.0,  1.0, -2.0,  0.0,    -2689.0],
    [ 2.0,  0.0, -1.0,  2.0,    -2602.0],
    [ 2.0, -1.0, -2.0,  0.0,     2390.0],
    [ 1.0,  0.0,  1.0,  0.0,    -2348.0],
    [ 2.0, -2.0,  0.0,  0.0,     2236.0],
    [ 0.0,  1.0,  2.0,  0.0,    -2120.0],
    [ 0.0,  2.0,  0.0,  0.0,    -2069.0],
    [ 2.0, -2.0, -1.0,  0.0,     2048.0],
    [ 2.0,  0.0,  1.0, -2.0,    -1773.0],
    [ 2.0,  0.0,  0.0,  2.0,    -1595.0],
    [ 4.0, -1.0, -1.0,  0.0,     1215.0],
    [ 0.0,  0.0,  2.0,  2.0,    -1110.0],
    [ 3.0,  0.0, -1.0,  0.0,     -892.0],
    [ 2.0,  1.0,  1.0,  0.0,     -810.0],
    [ 4.0, -1.0, -2.0,  0.0,      759.0],
    [ 0.0,  2.0, -1.0,  0.0,     -713.0],
    [ 2.0,  2.0, -1.0,  0.0,     -700.0],
    [ 2.0,  1.0, -2.0,  0.0,      691.0],
    [ 2.0, -1.0,  0.0, -2.0,      596.0],
    [ 4.0,  0.0,  1.0,  0.0,      549.0],
    [ 0.0,  0.0,  4.0,  0.0,      537.0],
    [ 4.0, -1.0,  0.0,  0.0,      520.0],
    [ 1.0,  0.0, -2.0,  0.0,     -487.0],
];

/// Geometric geocentric longitude of the Moon in degrees [0, 360),
/// mean equinox of date. `t` = Julian centuries of TT since J2000.0.
pub fn moon_geometric_longitude_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let lp = 218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538841.0
        - t4 / 65_194_000.0;
    let d = 297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545868.0
        - t4 / 113_065_000.0;
    let m = 357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24_490_000.0;
    let mp = 134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69699.0
        - t4 / 14_712_000.0;
    let f = 93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479264.290 * t).to_radians();
    // Eccentricity of Earth's orbit scales the terms that involve M.
    let e = 1.0 - 0.002516 * t - 0.0000074 * t2;

    let (d_r, m_r, mp_r, f_r) = (
        d.to_radians(),
        m.to_radians(),
        mp.to_radians(),
        f.to_radians(),
    );

    let mut sum_l = 0.0_f64;
    for term in &LONGITUDE_TERMS {
        let arg = term[0] * d_r + term[1] * m_r + term[2] * mp_r + term[3] * f_r;
        let scale = match term[1].abs() as u8 {
            1 => e,
            2 => e * e,
            _ => 1.0,
        };
        sum_l += term[4] * scale * arg.sin();
    }
    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp - f).to_radians().sin() + 318.0 * a2.sin();

    normalize_deg(lp + sum_l / 1_000_000.0)
}

/// Apparent longitude of the Moon in degrees [0, 360): geometric plus
/// nutation in longitude.
pub fn moon_apparent_longitude_deg(t: f64) -> f64 {
    normalize_deg(moon_geometric_longitude_deg(t) + nutation_longitude_deg(t))
}
