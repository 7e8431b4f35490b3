//! Local birth time with a numeric UTC offset.

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::calendar_to_jd;

/// Largest accepted UTC offset magnitude in hours (UTC+14 is the extreme zone).
const MAX_UTC_OFFSET_HOURS: f64 = 14.0;

/// Birth date and local clock time, plus the zone offset from UTC in hours.
///
/// `utc_offset_hours` is signed the usual way: Pacific Daylight Time is `-7.0`,
/// India is `5.5`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub utc_offset_hours: f64,
}

impl BirthTime {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        utc_offset_hours: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            utc_offset_hours,
        }
    }

    /// Check every field against the calendar and clock.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidInput("month must be in 1..=12"));
        }
        if self.day == 0 || self.day > days_in_month(self.year, self.month) {
            return Err(TimeError::InvalidInput("day is outside the month"));
        }
        if self.hour > 23 {
            return Err(TimeError::InvalidInput("hour must be in 0..=23"));
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidInput("minute must be in 0..=59"));
        }
        if !self.utc_offset_hours.is_finite()
            || self.utc_offset_hours.abs() > MAX_UTC_OFFSET_HOURS
        {
            return Err(TimeError::InvalidInput(
                "utc offset must be finite and within ±14 hours",
            ));
        }
        Ok(())
    }

    /// UTC hour of day, `hour - utc_offset_hours + minute / 60`.
    ///
    /// Not wrapped into [0, 24): a negative value or one past 24 moves the
    /// Julian Date into the neighbouring day.
    pub fn utc_hour(&self) -> f64 {
        self.hour as f64 - self.utc_offset_hours + self.minute as f64 / 60.0
    }

    /// Julian Date (UT) of the birth moment.
    pub fn to_jd_ut(&self) -> Result<f64, TimeError> {
        self.validate()?;
        let day_frac = self.day as f64 + self.utc_hour() / 24.0;
        Ok(calendar_to_jd(self.year, self.month, day_frac))
    }
}

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`; 0 for an invalid month.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}
