//! Calendar substrate for sexagenary computation.
//!
//! This crate provides:
//! - Julian Day and Julian Day Number conversions for Gregorian dates
//! - ΔT (TT − UT) approximation for 1900–2150
//! - Apparent solar longitude and solar-term instant search
//! - New-moon instants
//! - Chinese lunisolar ↔ Gregorian conversion (UTC+8 reckoning)
//! - Fixed UTC offsets for named and numeric time zones
//!
//! Everything here is pure math over fixed series; nothing reads files
//! or clocks.

pub mod delta_t;
pub mod error;
pub mod julian;
pub mod lunar;
pub mod lunation;
pub mod solar;
pub mod zone;

pub use delta_t::delta_t_seconds;
pub use error::TimeError;
pub use julian::{
    J2000_JD, MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR, SECONDS_PER_DAY, calendar_to_jd,
    date_from_jdn, days_in_month, is_leap_year, jd_to_calendar, jdn_from_date, jdn_from_ymd,
};
pub use lunar::{LunarDate, leap_month, lunar_month_length, lunar_to_solar, solar_to_lunar};
pub use lunation::{SYNODIC_MONTH, new_moon_jde, new_moon_on_or_before_ut, new_moon_ut};
pub use solar::{
    JIE_PHASE_DEG, LICHUN_DEG, ZHONGQI_PHASE_DEG, apparent_solar_longitude, jie_month_index,
    next_term_after, prev_term_at_or_before, solar_longitude_at_ut,
};
pub use zone::UtcOffset;
