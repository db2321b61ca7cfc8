//! Birth moment → four pillars.
//!
//! Input is validated field by field before anything is computed. The
//! sexagenary year and month either follow the twelve jie solar terms
//! (Lichun opens the year) or the older calendar-month approximation, per
//! [`MonthBoundary`].

use chrono::{Datelike, NaiveDate};
use ganzhi_time::{
    LunarDate, MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR, UtcOffset, days_in_month, jdn_from_date,
    jie_month_index, lunar_to_solar, solar_longitude_at_ut,
};
use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::error::{CalendarError, ValidationError};
use crate::pillar::{FourPillars, Pillar};
use crate::sexagenary;
use crate::stem::HeavenlyStem;

/// Which calendar the birth date fields are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarType {
    #[default]
    Solar,
    Lunar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

/// Birth date, hour and zone as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BirthMoment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Local standard-time hour, 0..=23.
    pub hour: u32,
    pub calendar: CalendarType,
    /// IANA name or numeric offset, see [`UtcOffset::parse`].
    pub timezone: String,
    /// Lunar input only: the date falls in the intercalary month.
    #[serde(default)]
    pub leap_month: bool,
    #[serde(default)]
    pub gender: Option<Gender>,
}

impl BirthMoment {
    /// Gregorian birth moment.
    pub fn solar(year: i32, month: u32, day: u32, hour: u32, timezone: impl Into<String>) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            calendar: CalendarType::Solar,
            timezone: timezone.into(),
            leap_month: false,
            gender: None,
        }
    }

    /// Chinese lunisolar birth moment.
    pub fn lunar(
        year: i32,
        month: u32,
        day: u32,
        leap_month: bool,
        hour: u32,
        timezone: impl Into<String>,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            calendar: CalendarType::Lunar,
            timezone: timezone.into(),
            leap_month,
            gender: None,
        }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }
}

/// How the sexagenary year and month boundaries are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthBoundary {
    /// Months open at the twelve jie terms; the year opens at Lichun.
    #[default]
    SolarTerm,
    /// Year opens on 1 January; Gregorian February is month 1 (Yin),
    /// January is month 12.
    CalendarMonth,
}

/// Treatment of the 23:00–23:59 Zi hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZiHourMode {
    /// The civil date decides the day pillar; 23:00 uses that day's Zi stem.
    #[default]
    SameDay,
    /// The day pillar advances at 23:00.
    Traditional,
    /// Day pillar stays, but the 23:00 hour stem comes from the next day.
    LateZi,
}

/// Calendar computation options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub month_boundary: MonthBoundary,
    pub zi_hour: ZiHourMode,
}

/// A validated birth moment expressed as a Gregorian civil date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedBirth {
    pub date: NaiveDate,
    pub hour: u32,
    pub offset: UtcOffset,
}

impl ResolvedBirth {
    /// Julian Date (UT) of the start of the birth hour.
    pub fn jd_ut(&self) -> f64 {
        jdn_from_date(self.date) as f64 - 0.5 + f64::from(self.hour) / 24.0 - self.offset.as_days()
    }
}

/// Validate every field and convert lunar input to its Gregorian date.
pub fn resolve(birth: &BirthMoment) -> Result<ResolvedBirth, ValidationError> {
    if !(MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR).contains(&birth.year) {
        return Err(ValidationError::Year(birth.year));
    }
    if !(1..=12).contains(&birth.month) {
        return Err(ValidationError::Month(birth.month));
    }
    if birth.hour > 23 {
        return Err(ValidationError::Hour(birth.hour));
    }
    let offset = UtcOffset::parse(&birth.timezone)
        .map_err(|_| ValidationError::TimeZone(birth.timezone.clone()))?;
    let date = match birth.calendar {
        CalendarType::Solar => {
            if birth.leap_month {
                return Err(ValidationError::LeapOnSolar);
            }
            let bad_day = ValidationError::Day {
                year: birth.year,
                month: birth.month,
                day: birth.day,
            };
            if birth.day == 0 || birth.day > days_in_month(birth.year, birth.month) {
                return Err(bad_day);
            }
            NaiveDate::from_ymd_opt(birth.year, birth.month, birth.day).ok_or(bad_day)?
        }
        CalendarType::Lunar => lunar_to_solar(LunarDate::new(
            birth.year,
            birth.month,
            birth.day,
            birth.leap_month,
        ))
        .map_err(ValidationError::Lunar)?,
    };
    Ok(ResolvedBirth {
        date,
        hour: birth.hour,
        offset,
    })
}

/// Sexagenary year number and month index (1 = Yin .. 12 = Chou) in effect
/// at a resolved birth moment.
pub fn sexagenary_year_month(
    birth: &ResolvedBirth,
    boundary: MonthBoundary,
) -> Result<(i32, u8), CalendarError> {
    let civil_year = birth.date.year();
    let civil_month = birth.date.month();
    match boundary {
        MonthBoundary::SolarTerm => {
            let lon = solar_longitude_at_ut(birth.jd_ut());
            let month = jie_month_index(lon);
            // Zi and Chou months straddle New Year; before Lichun the
            // previous sexagenary year still runs.
            let year = if civil_month <= 2 && month >= 11 {
                civil_year - 1
            } else {
                civil_year
            };
            log::trace!("solar longitude {lon:.4} → year {year} month {month}");
            Ok((year, month))
        }
        MonthBoundary::CalendarMonth => Ok((civil_year, ((civil_month + 10) % 12 + 1) as u8)),
    }
}

/// Year pillar of a sexagenary year number.
pub const fn year_pillar(year: i32) -> Pillar {
    Pillar::from_cycle_index(sexagenary::year_index(year))
}

/// Month pillar for month index `month` of a year with stem `year_stem`.
pub fn month_pillar(year_stem: HeavenlyStem, month: u8) -> Result<Pillar, CalendarError> {
    let stem = sexagenary::month_stem(year_stem, month);
    let branch = sexagenary::month_branch(month);
    Ok(Pillar::try_new(stem, branch)?)
}

/// Day pillar of a Gregorian date.
pub fn day_pillar(date: NaiveDate) -> Pillar {
    Pillar::from_cycle_index(sexagenary::day_index(jdn_from_date(date)))
}

/// Compute the four pillars of a birth moment.
pub fn compute(birth: &BirthMoment, config: &CalendarConfig) -> Result<FourPillars, CalendarError> {
    let resolved = resolve(birth)?;
    let (sex_year, sex_month) = sexagenary_year_month(&resolved, config.month_boundary)?;
    let year = year_pillar(sex_year);
    let month = month_pillar(year.stem(), sex_month)?;

    let jdn = jdn_from_date(resolved.date);
    let late = resolved.hour == 23;
    let day_jdn = match config.zi_hour {
        ZiHourMode::Traditional if late => jdn + 1,
        _ => jdn,
    };
    let stem_jdn = match config.zi_hour {
        ZiHourMode::SameDay => jdn,
        _ if late => jdn + 1,
        _ => jdn,
    };
    let day = Pillar::from_cycle_index(sexagenary::day_index(day_jdn));
    let hour_day_stem = sexagenary::stem_at(sexagenary::day_index(stem_jdn));
    let hour_branch = EarthlyBranch::from_hour(resolved.hour);
    let hour = Pillar::try_new(
        sexagenary::hour_stem(hour_day_stem, hour_branch),
        hour_branch,
    )?;

    log::debug!(
        "pillars for {} {:02}h ({}): {year} {month} {day} {hour}",
        resolved.date,
        resolved.hour,
        resolved.offset
    );
    Ok(FourPillars {
        year,
        month,
        day,
        hour,
    })
}
