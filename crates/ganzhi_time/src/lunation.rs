//! New-moon instants (Meeus ch. 49, principal periodic terms).
//!
//! Lunation number `k = 0` is the new moon of 2000-01-06. The planetary
//! correction terms are omitted; the remaining series is good to a few
//! minutes across the supported range.

use crate::delta_t::{decimal_year, delta_t_seconds};
use crate::julian::SECONDS_PER_DAY;

/// Mean synodic month in days.
pub const SYNODIC_MONTH: f64 = 29.530_588_861;

const NEW_MOON_EPOCH_JDE: f64 = 2_451_550.097_66;

/// Periodic terms: (coefficient, E power, M, M', F, Ω) multipliers.
const NEW_MOON_TERMS: [(f64, i32, f64, f64, f64, f64); 25] = [
    (-0.407_20, 0, 0.0, 1.0, 0.0, 0.0),
    (0.172_41, 1, 1.0, 0.0, 0.0, 0.0),
    (0.016_08, 0, 0.0, 2.0, 0.0, 0.0),
    (0.010_39, 0, 0.0, 0.0, 2.0, 0.0),
    (0.007_39, 1, -1.0, 1.0, 0.0, 0.0),
    (-0.005_14, 1, 1.0, 1.0, 0.0, 0.0),
    (0.002_08, 2, 2.0, 0.0, 0.0, 0.0),
    (-0.001_11, 0, 0.0, 1.0, -2.0, 0.0),
    (-0.000_57, 0, 0.0, 1.0, 2.0, 0.0),
    (0.000_56, 1, 1.0, 2.0, 0.0, 0.0),
    (-0.000_42, 0, 0.0, 3.0, 0.0, 0.0),
    (0.000_42, 1, 1.0, 0.0, 2.0, 0.0),
    (0.000_38, 1, 1.0, 0.0, -2.0, 0.0),
    (-0.000_24, 1, -1.0, 2.0, 0.0, 0.0),
    (-0.000_17, 0, 0.0, 0.0, 0.0, 1.0),
    (-0.000_07, 0, 2.0, 1.0, 0.0, 0.0),
    (0.000_04, 0, 0.0, 2.0, -2.0, 0.0),
    (0.000_04, 0, 3.0, 0.0, 0.0, 0.0),
    (0.000_03, 0, 1.0, 1.0, -2.0, 0.0),
    (0.000_03, 0, 0.0, 2.0, 2.0, 0.0),
    (-0.000_03, 0, 1.0, 1.0, 2.0, 0.0),
    (0.000_03, 0, -1.0, 1.0, 2.0, 0.0),
    (-0.000_02, 0, -1.0, 1.0, -2.0, 0.0),
    (-0.000_02, 0, 1.0, 3.0, 0.0, 0.0),
    (0.000_02, 0, 0.0, 4.0, 0.0, 0.0),
];

/// Julian Ephemeris Day of the new moon with lunation number `k`.
pub fn new_moon_jde(k: i64) -> f64 {
    let k = k as f64;
    let t = k / 1_236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let mean = NEW_MOON_EPOCH_JDE + SYNODIC_MONTH * k + 0.000_154_37 * t2 - 0.000_000_150 * t3
        + 0.000_000_000_73 * t4;

    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;
    let m = (2.553_4 + 29.105_356_70 * k - 0.000_001_4 * t2 - 0.000_000_11 * t3).to_radians();
    let mp = (201.564_3 + 385.816_935_28 * k + 0.010_758_2 * t2 + 0.000_012_38 * t3
        - 0.000_000_058 * t4)
        .to_radians();
    let f = (160.710_8 + 390.670_502_84 * k - 0.001_611_8 * t2 - 0.000_002_27 * t3
        + 0.000_000_011 * t4)
        .to_radians();
    let omega = (124.774_6 - 1.563_755_88 * k + 0.002_067_2 * t2 + 0.000_002_15 * t3).to_radians();

    let correction: f64 = NEW_MOON_TERMS
        .iter()
        .map(|&(coef, e_pow, cm, cmp, cf, co)| {
            coef * e.powi(e_pow) * (cm * m + cmp * mp + cf * f + co * omega).sin()
        })
        .sum();

    mean + correction
}

/// New moon with lunation number `k`, as a UT Julian Date.
pub fn new_moon_ut(k: i64) -> f64 {
    let jde = new_moon_jde(k);
    jde - delta_t_seconds(decimal_year(jde)) / SECONDS_PER_DAY
}

/// Latest new moon at or before `jd_ut`. Returns `(k, jd_ut)`.
pub fn new_moon_on_or_before_ut(jd_ut: f64) -> (i64, f64) {
    let mut k = ((jd_ut - NEW_MOON_EPOCH_JDE) / SYNODIC_MONTH).floor() as i64;
    while new_moon_ut(k) > jd_ut {
        k -= 1;
    }
    while new_moon_ut(k + 1) <= jd_ut {
        k += 1;
    }
    (k, new_moon_ut(k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::calendar_to_jd;

    #[test]
    fn meeus_example_49a() {
        // New moon of 1977 Feb 18: k = -283, JDE 2443192.65118
        let jde = new_moon_jde(-283);
        assert!((jde - 2_443_192.651_18).abs() < 0.002, "got {jde}");
    }

    #[test]
    fn new_moon_2000_01_06() {
        // 2000-01-06 18:14 UT
        let jd = new_moon_ut(0);
        let expected = calendar_to_jd(2000, 1, 6.0 + 18.23 / 24.0);
        assert!((jd - expected).abs() < 0.01, "got {jd}");
    }

    #[test]
    fn on_or_before_brackets() {
        let now = calendar_to_jd(2024, 2, 20.0);
        let (k, nm) = new_moon_on_or_before_ut(now);
        assert!(nm <= now);
        assert!(new_moon_ut(k + 1) > now);
        // 2024-02-09 22:59 UT
        let expected = calendar_to_jd(2024, 2, 9.0 + 22.98 / 24.0);
        assert!((nm - expected).abs() < 0.01, "got {nm}");
    }

    #[test]
    fn lunations_are_about_a_synodic_month_apart() {
        for k in -1200..1200 {
            let gap = new_moon_jde(k + 1) - new_moon_jde(k);
            assert!((29.2..29.9).contains(&gap), "k={k} gap={gap}");
        }
    }
}
