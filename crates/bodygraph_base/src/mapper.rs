//! Longitude → gate and line.

use serde::{Deserialize, Serialize};

use crate::error::BaseError;
use crate::gate::{
    GATE_SEQUENCE, GATE_SPAN_DEG, HD_START_DEG, LINE_SPAN_DEG, gate_ordinal, is_valid_gate,
};

/// A gate (1..=64) and one of its six lines (1..=6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GateLine {
    pub gate: u8,
    pub line: u8,
}

impl GateLine {
    /// Checked constructor.
    pub fn new(gate: u8, line: u8) -> Result<Self, BaseError> {
        if !is_valid_gate(gate) {
            return Err(BaseError::InvalidGate(gate));
        }
        if !(1..=6).contains(&line) {
            return Err(BaseError::InvalidLine(line));
        }
        Ok(Self { gate, line })
    }
}

impl std::fmt::Display for GateLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.gate, self.line)
    }
}

/// Map an ecliptic longitude in degrees to its gate and line.
///
/// `adjusted = (degree - 358.25) mod 360`; the gate index is
/// `floor(adjusted / 5.625)` and the line `floor((adjusted mod 5.625) / 0.9375) + 1`.
/// Both are clamped so float edges never index past the table.
pub fn degree_to_gate_line(degree: f64) -> GateLine {
    gate_line_at_offset((degree - HD_START_DEG).rem_euclid(360.0))
}

/// Gate and line at `adjusted` degrees past the wheel start.
///
/// An offset of a full turn is the wheel start again: gate 25, line 1.
fn gate_line_at_offset(adjusted: f64) -> GateLine {
    let adjusted = if adjusted >= 360.0 { 0.0 } else { adjusted };
    let index = ((adjusted / GATE_SPAN_DEG).floor() as usize).min(63);
    let within = adjusted.rem_euclid(GATE_SPAN_DEG);
    let line = ((within / LINE_SPAN_DEG).floor() as u8).min(5) + 1;
    GateLine {
        gate: GATE_SEQUENCE[index],
        line,
    }
}

/// [`degree_to_gate_line`] for arbitrary longitudes, including NaN.
///
/// Non-finite input has no gate and yields `None`.
pub fn gate_line_from_longitude(lon_deg: f64) -> Option<GateLine> {
    lon_deg.is_finite().then(|| degree_to_gate_line(lon_deg))
}

/// Tropical longitude in [0, 360) at which `gate` begins.
pub fn gate_start_deg(gate: u8) -> Option<f64> {
    let ord = gate_ordinal(gate)?;
    Some((HD_START_DEG + ord as f64 * GATE_SPAN_DEG).rem_euclid(360.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_start() {
        assert_eq!(degree_to_gate_line(358.25), GateLine { gate: 25, line: 1 });
        assert_eq!(degree_to_gate_line(0.0), GateLine { gate: 25, line: 2 });
    }

    #[test]
    fn full_turn_offset_is_wheel_start() {
        assert_eq!(gate_line_at_offset(360.0), GateLine { gate: 25, line: 1 });
        assert_eq!(gate_line_at_offset(0.0), GateLine { gate: 25, line: 1 });
    }

    #[test]
    fn just_before_start_is_last_gate() {
        assert_eq!(degree_to_gate_line(358.2499), GateLine { gate: 36, line: 6 });
    }

    #[test]
    fn line_boundaries() {
        for k in 0..6u8 {
            let deg = HD_START_DEG + f64::from(k) * LINE_SPAN_DEG + 0.01;
            assert_eq!(degree_to_gate_line(deg).line, k + 1);
        }
    }

    #[test]
    fn negative_and_large_inputs_wrap() {
        assert_eq!(degree_to_gate_line(-1.75), degree_to_gate_line(358.25));
        assert_eq!(degree_to_gate_line(720.0 + 100.0), degree_to_gate_line(100.0));
    }

    #[test]
    fn gate_start_inverse() {
        for &g in GATE_SEQUENCE.iter() {
            let start = gate_start_deg(g).unwrap();
            let gl = degree_to_gate_line(start + LINE_SPAN_DEG * 0.5);
            assert_eq!(gl, GateLine { gate: g, line: 1 });
        }
        assert_eq!(gate_start_deg(99), None);
    }

    #[test]
    fn checked_constructor() {
        assert!(GateLine::new(64, 6).is_ok());
        assert_eq!(GateLine::new(0, 1), Err(BaseError::InvalidGate(0)));
        assert_eq!(GateLine::new(1, 7), Err(BaseError::InvalidLine(7)));
    }

    #[test]
    fn non_finite_has_no_gate() {
        assert_eq!(gate_line_from_longitude(f64::NAN), None);
        assert!(gate_line_from_longitude(12.0).is_some());
        assert_eq!(GateLine::new(41, 3).unwrap().to_string(), "41.3");
    }
}
