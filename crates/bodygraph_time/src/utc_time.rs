//! UTC calendar date/time recovered from a Julian Date.

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Convert a Julian Date (UT) to a calendar date/time.
    pub fn from_jd(jd: f64) -> Result<Self, TimeError> {
        if !jd.is_finite() {
            return Err(TimeError::NonFiniteJd);
        }
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        // Millisecond rounding keeps 12:30:00 from printing as 12:29:59.
        let total_seconds = ((day_frac.fract() * 86_400_000.0).round() / 1000.0).min(86_399.999);
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Julian Date (UT) of this calendar instant.
    pub fn to_jd(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second.floor() as u32
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_jd_reference_birth() {
        let t = UtcTime::from_jd(2_447_444.020_833_333).unwrap();
        assert_eq!((t.year, t.month, t.day), (1988, 10, 9));
        assert_eq!((t.hour, t.minute), (12, 30));
        assert!(t.second < 1e-3);
        assert_eq!(t.to_string(), "1988-10-09T12:30:00Z");
    }

    #[test]
    fn display_whole_seconds() {
        let t = UtcTime::new(2024, 1, 15, 0, 0, 0.0);
        assert_eq!(t.to_string(), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn to_jd_matches_calendar() {
        let t = UtcTime::new(2000, 1, 1, 12, 0, 0.0);
        assert_eq!(t.to_jd(), 2_451_545.0);
    }

    #[test]
    fn nan_rejected() {
        assert_eq!(UtcTime::from_jd(f64::NAN), Err(TimeError::NonFiniteJd));
    }
}
