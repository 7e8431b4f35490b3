//! Calendar and time-scale helpers for chart computation.
//!
//! This crate provides:
//! - Julian Date ↔ proleptic Gregorian calendar conversions
//! - `BirthTime`: validated local birth time with a numeric UTC offset
//! - `UtcTime`: UTC calendar display of a Julian Date
//! - ΔT (TT − UT) estimates for evaluating dynamical-time theories

pub mod birth;
pub mod delta_t;
pub mod error;
pub mod julian;
pub mod utc_time;

pub use birth::{BirthTime, days_in_month, is_leap_year};
pub use delta_t::{delta_t_seconds, jd_ut_to_jd_tt};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, calendar_to_jd, jd_to_calendar, jd_to_centuries,
    jd_to_decimal_year,
};
pub use utc_time::UtcTime;
