//! Error types for pillar computation and luck projection.

use chrono::NaiveDate;
use ganzhi_time::TimeError;
use thiserror::Error;

use crate::branch::EarthlyBranch;
use crate::element::Element;
use crate::stem::HeavenlyStem;

/// A birth moment field failed validation. Nothing is computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("year {0} outside supported range 1900..=2100")]
    Year(i32),
    #[error("month {0} outside 1..=12")]
    Month(u32),
    #[error("day {day} invalid for {year:04}-{month:02}")]
    Day { year: i32, month: u32, day: u32 },
    #[error("hour {0} outside 0..=23")]
    Hour(u32),
    /// `leap_month` was set on a solar-calendar input.
    #[error("leap month flag is only meaningful for lunar input")]
    LeapOnSolar,
    /// Lunar year/month/day does not exist.
    #[error("invalid lunar date: {0}")]
    Lunar(TimeError),
    #[error("unrecognised time zone: {0}")]
    TimeZone(String),
}

/// Internal invariant broken. Signals a defect, never bad input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ComputationError {
    #[error("stem {stem} and branch {branch} differ in parity")]
    Parity {
        stem: HeavenlyStem,
        branch: EarthlyBranch,
    },
    #[error("element {found} does not match stem {stem}")]
    ElementMismatch { stem: HeavenlyStem, found: Element },
}

/// Errors from [`compute`](crate::calendar::compute).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Solar-term or lunation series failed.
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Computation(#[from] ComputationError),
}

/// Errors from luck-timeline projection and lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LuckError {
    #[error("age must be non-negative, got {0}")]
    NegativeAge(i32),
    #[error("as-of date {as_of} precedes birth date {birth}")]
    AsOfBeforeBirth { as_of: NaiveDate, birth: NaiveDate },
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

impl From<ValidationError> for LuckError {
    fn from(e: ValidationError) -> Self {
        Self::Calendar(CalendarError::Validation(e))
    }
}

impl From<TimeError> for LuckError {
    fn from(e: TimeError) -> Self {
        Self::Calendar(CalendarError::Time(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_field() {
        let e = ValidationError::Day {
            year: 2023,
            month: 2,
            day: 29,
        };
        assert_eq!(e.to_string(), "day 29 invalid for 2023-02");
        assert_eq!(
            ValidationError::Hour(24).to_string(),
            "hour 24 outside 0..=23"
        );
    }

    #[test]
    fn luck_error_wraps_validation() {
        let e: LuckError = ValidationError::Month(13).into();
        assert!(matches!(
            e,
            LuckError::Calendar(CalendarError::Validation(ValidationError::Month(13)))
        ));
        assert_eq!(e.to_string(), "month 13 outside 1..=12");
    }
}
