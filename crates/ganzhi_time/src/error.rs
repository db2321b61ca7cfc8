//! Error types for calendar conversions.

use thiserror::Error;

/// Errors from date validation, lunisolar conversion, or term search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Year/month/day does not name a real Gregorian date.
    #[error("invalid gregorian date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Year outside the range the series are fitted for.
    #[error("year {0} outside supported range")]
    YearOutOfRange(i32),
    /// The requested lunar month (or leap month) does not exist in that year.
    #[error("lunar month {month} (leap={leap}) does not exist in {year}")]
    NoSuchLunarMonth { year: i32, month: u32, leap: bool },
    /// Day number past the end of the lunar month.
    #[error("lunar day {day} exceeds month length {len}")]
    LunarDayOutOfRange { day: u32, len: u32 },
    /// Time zone string could not be resolved to an offset.
    #[error("unknown time zone: {0}")]
    UnknownTimeZone(String),
    /// Iterative search did not converge.
    #[error("no convergence: {0}")]
    NoConvergence(&'static str),
}
