//! Chinese lunisolar calendar ↔ Gregorian conversion.
//!
//! Rules (reckoned in UTC+8):
//! - a month begins on the civil day containing a new moon;
//! - the month containing the winter solstice is month 11;
//! - when a sui (solstice to solstice) holds 13 months, the first month
//!   after month 11 without a principal term is the leap month and repeats
//!   the previous month number.
//!
//! Month boundaries are derived from the solar and lunar series in this
//! crate, so a new moon within minutes of local midnight can land on a
//! different day than a published almanac.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{
    MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR, calendar_to_jd, date_from_jdn, jdn_from_date,
};
use crate::lunation::{new_moon_on_or_before_ut, new_moon_ut};
use crate::solar::{ZHONGQI_PHASE_DEG, next_term_after};

/// UTC+8 as a fraction of a day.
const CHINA_OFFSET_DAYS: f64 = 8.0 / 24.0;

/// A date in the Chinese lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    /// Lunar year, numbered by the Gregorian year in which its month 1 begins.
    pub year: i32,
    /// Month number 1..=12.
    pub month: u32,
    /// Day of month 1..=30.
    pub day: u32,
    /// True for the intercalary repeat of `month`.
    pub leap: bool,
}

impl LunarDate {
    pub fn new(year: i32, month: u32, day: u32, leap: bool) -> Self {
        Self {
            year,
            month,
            day,
            leap,
        }
    }
}

/// One lunar month laid out on civil days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MonthSpan {
    pub start_jdn: i64,
    pub length: u32,
    pub number: u32,
    pub leap: bool,
    pub year: i32,
}

fn local_jdn(jd_ut: f64) -> i64 {
    (jd_ut + 0.5 + CHINA_OFFSET_DAYS).floor() as i64
}

fn local_midnight_ut(jdn: i64) -> f64 {
    jdn as f64 - 0.5 - CHINA_OFFSET_DAYS
}

/// Civil day (UTC+8) of the December solstice in a Gregorian year.
fn winter_solstice_jdn(year: i32) -> Result<i64, TimeError> {
    let (jd, _) = next_term_after(calendar_to_jd(year, 12, 10.0), ZHONGQI_PHASE_DEG)?;
    Ok(local_jdn(jd))
}

/// Lunation number of the month that contains civil day `jdn`.
fn lunation_containing(jdn: i64) -> i64 {
    new_moon_on_or_before_ut(local_midnight_ut(jdn + 1) - 1e-9).0
}

fn has_principal_term(start_jdn: i64, next_start_jdn: i64) -> Result<bool, TimeError> {
    let (jd, _) = next_term_after(local_midnight_ut(start_jdn), ZHONGQI_PHASE_DEG)?;
    Ok(local_jdn(jd) < next_start_jdn)
}

/// Months of the sui ending at the winter solstice of Gregorian `year`:
/// month 11 of `year - 1` through the month before month 11 of `year`.
pub(crate) fn sui_months(year: i32) -> Result<Vec<MonthSpan>, TimeError> {
    let k_start = lunation_containing(winter_solstice_jdn(year - 1)?);
    let k_end = lunation_containing(winter_solstice_jdn(year)?);
    let starts: Vec<i64> = (k_start..=k_end)
        .map(|k| local_jdn(new_moon_ut(k)))
        .collect();
    let count = starts.len() - 1;

    let mut leap_index = None;
    if count == 13 {
        for i in 1..count {
            if !has_principal_term(starts[i], starts[i + 1])? {
                leap_index = Some(i);
                break;
            }
        }
        if leap_index.is_none() {
            log::warn!("13-month sui ending {year} has no month without a principal term");
        }
    }

    let mut months = Vec::with_capacity(count);
    let mut number = 11;
    let mut lunar_year = year - 1;
    for i in 0..count {
        let leap = leap_index == Some(i);
        if i > 0 && !leap {
            number = number % 12 + 1;
            if number == 1 {
                lunar_year = year;
            }
        }
        months.push(MonthSpan {
            start_jdn: starts[i],
            length: (starts[i + 1] - starts[i]) as u32,
            number,
            leap,
            year: lunar_year,
        });
    }
    Ok(months)
}

fn check_year(year: i32) -> Result<(), TimeError> {
    if (MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(TimeError::YearOutOfRange(year))
    }
}

/// All months (leap included) of lunar year `year`, in order.
pub(crate) fn lunar_year_months(year: i32) -> Result<Vec<MonthSpan>, TimeError> {
    let mut months: Vec<MonthSpan> = sui_months(year)?
        .into_iter()
        .filter(|m| m.year == year)
        .collect();
    months.extend(sui_months(year + 1)?.into_iter().filter(|m| m.year == year));
    Ok(months)
}

fn find_month(year: i32, month: u32, leap: bool) -> Result<MonthSpan, TimeError> {
    check_year(year)?;
    lunar_year_months(year)?
        .into_iter()
        .find(|m| m.number == month && m.leap == leap)
        .ok_or(TimeError::NoSuchLunarMonth { year, month, leap })
}

/// Length (29 or 30) of a lunar month.
pub fn lunar_month_length(year: i32, month: u32, leap: bool) -> Result<u32, TimeError> {
    Ok(find_month(year, month, leap)?.length)
}

/// Leap month number of a lunar year, if it has one.
pub fn leap_month(year: i32) -> Result<Option<u32>, TimeError> {
    check_year(year)?;
    Ok(lunar_year_months(year)?
        .iter()
        .find(|m| m.leap)
        .map(|m| m.number))
}

/// Gregorian date of a lunar date.
pub fn lunar_to_solar(date: LunarDate) -> Result<NaiveDate, TimeError> {
    let span = find_month(date.year, date.month, date.leap)?;
    if date.day == 0 || date.day > span.length {
        return Err(TimeError::LunarDayOutOfRange {
            day: date.day,
            len: span.length,
        });
    }
    let jdn = span.start_jdn + i64::from(date.day) - 1;
    date_from_jdn(jdn).ok_or(TimeError::YearOutOfRange(date.year))
}

/// Lunar date of a Gregorian date.
pub fn solar_to_lunar(date: NaiveDate) -> Result<LunarDate, TimeError> {
    check_year(date.year())?;
    let jdn = jdn_from_date(date);
    let mut months = sui_months(date.year())?;
    months.extend(sui_months(date.year() + 1)?);
    let span = months
        .iter()
        .rev()
        .find(|m| m.start_jdn <= jdn)
        .ok_or(TimeError::YearOutOfRange(date.year()))?;
    Ok(LunarDate {
        year: span.year,
        month: span.number,
        day: (jdn - span.start_jdn) as u32 + 1,
        leap: span.leap,
    })
}
