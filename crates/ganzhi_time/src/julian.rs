//! Julian Day conversions for the proleptic Gregorian calendar.
//!
//! Two flavours are used throughout the engine:
//! - fractional Julian Dates (`f64`) for astronomical instants, and
//! - integer Julian Day Numbers (`i64`) for civil days, where JDN `n`
//!   is the day whose noon is JD `n`.

use chrono::{Datelike, NaiveDate};

use crate::error::TimeError;

/// Julian Date of J2000.0 (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Earliest Gregorian year accepted by the engine.
pub const MIN_SUPPORTED_YEAR: i32 = 1900;

/// Latest Gregorian year accepted by the engine.
pub const MAX_SUPPORTED_YEAR: i32 = 2100;

/// JDN of 0001-01-01 minus one; chrono counts that day as 1.
const CE_JDN_OFFSET: i64 = 1_721_425;

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a Gregorian month. Returns 0 for a month outside 1..=12.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Calendar date (with fractional day) to Julian Date.
///
/// Meeus, Astronomical Algorithms, ch. 7. Gregorian calendar only.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Julian Date to `(year, month, fractional day)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();
    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day)
}

/// Julian Day Number of a civil date.
pub fn jdn_from_date(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) + CE_JDN_OFFSET
}

/// Civil date for a Julian Day Number, if representable.
pub fn date_from_jdn(jdn: i64) -> Option<NaiveDate> {
    let days = i32::try_from(jdn - CE_JDN_OFFSET).ok()?;
    NaiveDate::from_num_days_from_ce_opt(days)
}

/// Validated Julian Day Number of a Gregorian year/month/day.
pub fn jdn_from_ymd(year: i32, month: u32, day: u32) -> Result<i64, TimeError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .map(jdn_from_date)
        .ok_or(TimeError::InvalidDate { year, month, day })
}
