//! Free functions using the default configuration.
//!
//! Each call is independent; nothing is cached. Use [`Engine`](crate::Engine)
//! for custom configuration or memoization.

use chrono::NaiveDate;
use ganzhi_base::{BirthMoment, CalendarConfig, FourPillars, LuckConfig, LuckTimeline};

use crate::error::GanzhiError;

/// Four pillars with solar-term boundaries and same-day Zi hour.
pub fn compute(birth: &BirthMoment) -> Result<FourPillars, GanzhiError> {
    Ok(ganzhi_base::compute(birth, &CalendarConfig::default())?)
}

/// Luck timeline to age 100 with solar-term start ages.
pub fn project_luck_timeline(
    pillars: &FourPillars,
    birth: &BirthMoment,
    as_of: NaiveDate,
) -> Result<LuckTimeline, GanzhiError> {
    Ok(ganzhi_base::project_luck_timeline(
        pillars,
        birth,
        as_of,
        &LuckConfig::default(),
    )?)
}
