//! Start age of the first decade pillar.
//!
//! Three days between birth and the month boundary count as one year of
//! age. Forward timelines measure to the next boundary, backward ones to
//! the previous boundary.

use chrono::Datelike;
use ganzhi_time::{JIE_PHASE_DEG, days_in_month, next_term_after, prev_term_at_or_before};

use super::types::LuckDirection;
use crate::calendar::{MonthBoundary, ResolvedBirth};
use crate::error::CalendarError;

const DAYS_PER_YEAR_OF_AGE: f64 = 3.0;
const MIN_START_AGE: u32 = 1;
const MAX_START_AGE: u32 = 10;

/// Days from the birth hour to the relevant month boundary.
pub fn boundary_days(
    birth: &ResolvedBirth,
    direction: LuckDirection,
    boundary: MonthBoundary,
) -> Result<f64, CalendarError> {
    let days = match boundary {
        MonthBoundary::SolarTerm => {
            let jd = birth.jd_ut();
            match direction {
                LuckDirection::Forward => next_term_after(jd, JIE_PHASE_DEG)?.0 - jd,
                LuckDirection::Backward => jd - prev_term_at_or_before(jd, JIE_PHASE_DEG)?.0,
            }
        }
        MonthBoundary::CalendarMonth => {
            let day = f64::from(birth.date.day());
            let hour = f64::from(birth.hour);
            match direction {
                LuckDirection::Forward => {
                    let dim = f64::from(days_in_month(birth.date.year(), birth.date.month()));
                    (dim - day) + (24.0 - hour) / 24.0
                }
                LuckDirection::Backward => (day - 1.0) + hour / 24.0,
            }
        }
    };
    Ok(days)
}

/// Start age in whole years, clamped to 1..=10.
pub fn start_age(
    birth: &ResolvedBirth,
    direction: LuckDirection,
    boundary: MonthBoundary,
) -> Result<u32, CalendarError> {
    let days = boundary_days(birth, direction, boundary)?;
    let age = (days / DAYS_PER_YEAR_OF_AGE).round().max(0.0) as u32;
    let age = age.clamp(MIN_START_AGE, MAX_START_AGE);
    log::debug!("{direction:?} luck: {days:.2} days to boundary, start age {age}");
    Ok(age)
}
