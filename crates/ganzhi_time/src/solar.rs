//! Apparent solar longitude and solar-term instants.
//!
//! The 24 solar terms sit at multiples of 15° of apparent longitude. Two
//! interleaved families matter here:
//! - *jie* terms at 15° + 30°k (Lichun = 315°) open each sexagenary month;
//! - *zhongqi* (principal) terms at 30°k decide lunisolar leap months.
//!
//! Longitude uses the low-precision solar theory of Meeus ch. 25
//! (≈0.01°, i.e. a quarter hour in time). Instants are located with a
//! Newton iteration on the longitude residual.

use crate::delta_t::{decimal_year, delta_t_seconds};
use crate::error::TimeError;
use crate::julian::{J2000_JD, SECONDS_PER_DAY};

/// Phase of the jie family: terms at `JIE_PHASE_DEG + 30k`.
pub const JIE_PHASE_DEG: f64 = 15.0;

/// Phase of the principal-term family: terms at `30k`.
pub const ZHONGQI_PHASE_DEG: f64 = 0.0;

/// Apparent longitude of Lichun, the first jie of the sexagenary year.
pub const LICHUN_DEG: f64 = 315.0;

/// Mean solar motion, degrees per day.
const SOLAR_RATE_DEG_PER_DAY: f64 = 360.0 / 365.242_2;

const MAX_NEWTON_ITERATIONS: usize = 30;
const CONVERGENCE_DEG: f64 = 1e-7;

/// Normalize an angle to [0, 360).
pub(crate) fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Normalize an angle to (-180, 180].
pub(crate) fn normalize_to_pm180(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// Apparent geocentric solar longitude in degrees for a Julian Ephemeris Day.
pub fn apparent_solar_longitude(jde: f64) -> f64 {
    let t = (jde - J2000_JD) / 36_525.0;
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    let omega = (125.04 - 1_934.136 * t).to_radians();
    normalize_360(l0 + c - 0.005_69 - 0.004_78 * omega.sin())
}

/// Convert a UT Julian Date to a Julian Ephemeris Day.
pub(crate) fn ut_to_jde(jd_ut: f64) -> f64 {
    jd_ut + delta_t_seconds(decimal_year(jd_ut)) / SECONDS_PER_DAY
}

/// Apparent solar longitude at a UT instant.
pub fn solar_longitude_at_ut(jd_ut: f64) -> f64 {
    apparent_solar_longitude(ut_to_jde(jd_ut))
}

/// Refine `estimate_ut` to the UT instant where the longitude equals `target_deg`.
fn refine_term(target_deg: f64, estimate_ut: f64) -> Result<f64, TimeError> {
    let mut t = estimate_ut;
    for _ in 0..MAX_NEWTON_ITERATIONS {
        let residual = normalize_to_pm180(solar_longitude_at_ut(t) - target_deg);
        if residual.abs() < CONVERGENCE_DEG {
            return Ok(t);
        }
        t -= residual / SOLAR_RATE_DEG_PER_DAY;
    }
    log::trace!("solar term {target_deg} did not settle from {estimate_ut}");
    Err(TimeError::NoConvergence("solar term search"))
}

/// First term of the family `phase_deg + 30k` strictly after `jd_ut`.
///
/// Returns `(jd_ut_of_term, term_longitude_deg)`.
pub fn next_term_after(jd_ut: f64, phase_deg: f64) -> Result<(f64, f64), TimeError> {
    let lon = solar_longitude_at_ut(jd_ut);
    let steps = ((lon - phase_deg) / 30.0).floor() + 1.0;
    let target = normalize_360(phase_deg + 30.0 * steps);
    let ahead = normalize_360(target - lon);
    let found = refine_term(target, jd_ut + ahead / SOLAR_RATE_DEG_PER_DAY)?;
    if found <= jd_ut {
        // Newton landed on the term we are sitting on; take the next one.
        let target = normalize_360(target + 30.0);
        let t = refine_term(target, found + 30.0 / SOLAR_RATE_DEG_PER_DAY)?;
        return Ok((t, target));
    }
    Ok((found, target))
}

/// Last term of the family `phase_deg + 30k` at or before `jd_ut`.
pub fn prev_term_at_or_before(jd_ut: f64, phase_deg: f64) -> Result<(f64, f64), TimeError> {
    let lon = solar_longitude_at_ut(jd_ut);
    let steps = ((lon - phase_deg) / 30.0).floor();
    let target = normalize_360(phase_deg + 30.0 * steps);
    let behind = normalize_360(lon - target);
    let found = refine_term(target, jd_ut - behind / SOLAR_RATE_DEG_PER_DAY)?;
    if found > jd_ut {
        let target = normalize_360(target - 30.0);
        let t = refine_term(target, found - 30.0 / SOLAR_RATE_DEG_PER_DAY)?;
        return Ok((t, target));
    }
    Ok((found, target))
}

/// Sexagenary month index (1 = Yin month opened by Lichun .. 12 = Chou month)
/// for an apparent solar longitude.
pub fn jie_month_index(solar_lon_deg: f64) -> u8 {
    let offset = normalize_360(solar_lon_deg - LICHUN_DEG);
    ((offset / 30.0).floor() as u8).min(11) + 1
}
