//! Geocentric planetary longitudes from mean Keplerian elements.
//!
//! Elements and rates are E. M. Standish, "Keplerian Elements for
//! Approximate Positions of the Major Planets" (JPL), Table 1, valid
//! 1800–2050 AD, referred to the mean ecliptic and equinox of J2000.
//! Accuracy is arcminutes for the inner planets and up to ~0.2° for
//! Saturn, well inside one line (0.9375°).

use crate::fundamental::{nutation_longitude_deg, precession_longitude_deg};
use crate::planet::Planet;
use crate::provider::normalize_deg;

/// Light travel time for 1 AU, in days.
const LIGHT_DAYS_PER_AU: f64 = 0.005_775_518_3;

/// Kepler solver tolerance in radians.
const KEPLER_TOL: f64 = 1e-12;

/// Mean orbital elements at J2000 and their rates per Julian century.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Semi-major axis (AU) and rate.
    pub a: [f64; 2],
    /// Eccentricity and rate.
    pub e: [f64; 2],
    /// Inclination (deg) and rate.
    pub i: [f64; 2],
    /// Mean longitude (deg) and rate.
    pub l: [f64; 2],
    /// Longitude of perihelion (deg) and rate.
    pub peri: [f64; 2],
    /// Longitude of the ascending node (deg) and rate.
    pub node: [f64; 2],
}

#[rustfmt::skip]
const MERCURY: OrbitalElements = OrbitalElements {
    a: [0.38709927, 0.00000037], e: [0.20563593, 0.00001906], i: [7.00497902, -0.00594749],
    l: [252.25032350, 149472.67411175], peri: [77.45779628, 0.16047689], node: [48.33076593, -0.12534081],
};
#[rustfmt::skip]
const VENUS: OrbitalElements = OrbitalElements {
    a: [0.72333566, 0.00000390], e: [0.00677672, -0.00004107], i: [3.39467605, -0.00078890],
    l: [181.97909950, 58517.81538729], peri: [131.60246718, 0.00268329], node: [76.67984255, -0.27769418],
};
#[rustfmt::skip]
const EARTH_MOON_BARY: OrbitalElements = OrbitalElements {
    a: [1.00000261, 0.00000562], e: [0.01671123, -0.00004392], i: [-0.00001531, -0.01294668],
    l: [100.46457166, 35999.37244981], peri: [102.93768193, 0.32327364], node: [0.0, 0.0],
};
#[rustfmt::skip]
const MARS: OrbitalElements = OrbitalElements {
    a: [1.52371034, 0.00001847], e: [0.09339410, 0.00007882], i: [1.84969142, -0.00813131],
    l: [-4.55343205, 19140.30268499], peri: [-23.94362959, 0.44441088], node: [49.55953891, -0.29257343],
};
#[rustfmt::skip]
const JUPITER: OrbitalElements = OrbitalElements {
    a: [5.20288700, -0.00011607], e: [0.04838624, -0.00013253], i: [1.30439695, -0.00183714],
    l: [34.39644051, 3034.74612775], peri: [14.72847983, 0.21252668], node: [100.47390909, 0.20469106],
};
#[rustfmt::skip]
const SATURN: OrbitalElements = OrbitalElements {
    a: [9.53667594, -0.00125060], e: [0.05386179, -0.00050991], i: [2.48599187, 0.00193609],
    l: [49.95424423, 1222.49362201], peri: [92.59887831, -0.41897216], node: [113.66242448, -0.28867794],
};
#[rustfmt::skip]
const URANUS: OrbitalElements = OrbitalElements {
    a: [19.18916464, -0.00196176], e: [0.04725744, -0.00004397], i: [0.77263783, -0.00242939],
    l: [313.23810451, 428.48202785], peri: [170.95427630, 0.40805281], node: [74.01692503, 0.04240589],
};
#[rustfmt::skip]
const NEPTUNE: OrbitalElements = OrbitalElements {
    a: [30.06992276, 0.00026291], e: [0.00859048, 0.00005105], i: [1.77004347, 0.00035372],
    l: [-55.12002969, 218.45945325], peri: [44.96476227, -0.32241464], node: [131.78422574, -0.00508664],
};
#[rustfmt::skip]
const PLUTO: OrbitalElements = OrbitalElements {
    a: [39.48211675, -0.00031596], e: [0.24882730, 0.00005170], i: [17.14001206, 0.00004818],
    l: [238.92903833, 145.20780515], peri: [224.06891629, -0.04062942], node: [110.30393684, -0.01183482],
};

/// Elements for a planet, or `None` for the Sun, Moon, and node.
pub const fn elements_for(planet: Planet) -> Option<&'static OrbitalElements> {
    match planet {
        Planet::Mercury => Some(&MERCURY),
        Planet::Venus => Some(&VENUS),
        Planet::Mars => Some(&MARS),
        Planet::Jupiter => Some(&JUPITER),
        Planet::Saturn => Some(&SATURN),
        Planet::Uranus => Some(&URANUS),
        Planet::Neptune => Some(&NEPTUNE),
        Planet::Pluto => Some(&PLUTO),
        Planet::Sun | Planet::Moon | Planet::NorthNode => None,
    }
}

/// Solve Kepler's equation `E - e sin E = M` (radians) by Newton iteration.
pub fn solve_kepler(mean_anomaly: f64, e: f64) -> f64 {
    let mut ecc_anom = if e < 0.8 { mean_anomaly } else { std::f64::consts::PI };
    for _ in 0..30 {
        let delta =
            (ecc_anom - e * ecc_anom.sin() - mean_anomaly) / (1.0 - e * ecc_anom.cos());
        ecc_anom -= delta;
        if delta.abs() < KEPLER_TOL {
            break;
        }
    }
    ecc_anom
}

/// Heliocentric ecliptic J2000 position in AU.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn heliocentric_position(el: &OrbitalElements, t: f64) -> [f64; 3] {
    let a = el.a[0] + el.a[1] * t;
    let e = el.e[0] + el.e[1] * t;
    let inc = (el.i[0] + el.i[1] * t).to_radians();
    let l = el.l[0] + el.l[1] * t;
    let peri = el.peri[0] + el.peri[1] * t;
    let node = el.node[0] + el.node[1] * t;

    let arg_peri = (peri - node).to_radians();
    let mean_anomaly = (normalize_deg(l - peri + 180.0) - 180.0).to_radians();
    let node = node.to_radians();

    let ecc_anom = solve_kepler(mean_anomaly, e);
    let xp = a * (ecc_anom.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc_anom.sin();

    let (sw, cw) = arg_peri.sin_cos();
    let (so, co) = node.sin_cos();
    let (si, ci) = inc.sin_cos();

    [
        (cw * co - sw * so * ci) * xp + (-sw * co - cw * so * ci) * yp,
        (cw * so + sw * co * ci) * xp + (-sw * so + cw * co * ci) * yp,
        (sw * si) * xp + (cw * si) * yp,
    ]
}

/// Apparent geocentric longitude of `planet` in degrees [0, 360), equinox
/// of date. Returns `None` for bodies without Keplerian elements.
///
/// Corrects for light time (one iteration), precession from J2000, and
/// nutation in longitude. Aberration (≤ 20″) is not applied.
pub fn planet_apparent_longitude_deg(planet: Planet, t: f64) -> Option<f64> {
    let el = elements_for(planet)?;
    let earth = heliocentric_position(&EARTH_MOON_BARY, t);

    let geo = |t_emit: f64| {
        let p = heliocentric_position(el, t_emit);
        [p[0] - earth[0], p[1] - earth[1], p[2] - earth[2]]
    };

    let first = geo(t);
    let distance = (first[0] * first[0] + first[1] * first[1] + first[2] * first[2]).sqrt();
    let light_time_centuries = distance * LIGHT_DAYS_PER_AU / 36_525.0;
    let v = geo(t - light_time_centuries);

    let lon_j2000 = v[1].atan2(v[0]).to_degrees();
    Some(normalize_deg(
        lon_j2000 + precession_longitude_deg(t) + nutation_longitude_deg(t),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sun::sun_apparent_longitude_deg;
    use crate::provider::normalize_signed_deg;

    #[test]
    fn kepler_circular_orbit_is_identity() {
        assert!((solve_kepler(1.234, 0.0) - 1.234).abs() < 1e-12);
    }

    #[test]
    fn kepler_satisfies_equation() {
        for &(m, e) in &[(0.3, 0.2056), (2.9, 0.2488), (-1.0, 0.0934)] {
            let ea = solve_kepler(m, e);
            assert!((ea - e * ea.sin() - m).abs() < 1e-10);
        }
    }

    #[test]
    fn earth_orbit_radius_near_one_au() {
        let p = heliocentric_position(&EARTH_MOON_BARY, 0.0);
        let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        assert!((r - 0.983).abs() < 0.01, "r = {r}");
    }

    #[test]
    fn barycentre_opposite_matches_solar_theory() {
        // The Sun seen from the Earth-Moon barycentre is the barycentre's
        // heliocentric longitude + 180; compare against Meeus ch. 25.
        for i in 0..20 {
            let t = -0.3 + i as f64 * 0.031;
            let p = heliocentric_position(&EARTH_MOON_BARY, t);
            let sun = p[1].atan2(p[0]).to_degrees() + 180.0 + precession_longitude_deg(t);
            let diff = normalize_signed_deg(sun - sun_apparent_longitude_deg(t)).abs();
            assert!(diff < 0.03, "t={t}: diff {diff}");
        }
    }

    #[test]
    fn meeus_example_33a_venus() {
        // 1992-Dec-20.0 TD: apparent λ = 313.08102°
        let t = (2_448_976.5 - 2_451_545.0) / 36_525.0;
        let lon = planet_apparent_longitude_deg(Planet::Venus, t).unwrap();
        assert!(normalize_signed_deg(lon - 313.081_02).abs() < 0.05, "λ = {lon}");
    }

    #[test]
    fn non_keplerian_bodies_return_none() {
        assert!(planet_apparent_longitude_deg(Planet::Sun, 0.0).is_none());
        assert!(planet_apparent_longitude_deg(Planet::Moon, 0.0).is_none());
        assert!(planet_apparent_longitude_deg(Planet::NorthNode, 0.0).is_none());
    }
}
