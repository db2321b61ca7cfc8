//! Sexagenary (60-cycle) arithmetic shared by every pillar.
//!
//! A cycle position `i` in `0..60` pairs stem `i % 10` with branch
//! `i % 12`; only same-parity pairs occur, giving 60 of the 120
//! combinations.

use crate::branch::EarthlyBranch;
use crate::stem::HeavenlyStem;

/// Length of the sexagenary cycle.
pub const CYCLE_LEN: u8 = 60;

/// Gregorian year whose sexagenary year is Jia-Zi (index 0).
pub const YEAR_EPOCH: i32 = 4;

/// Offset added to a Julian Day Number before reducing mod 60.
///
/// JDN 11 (in 4713 BCE) is a Jia-Zi day, so `(jdn + 49) mod 60` gives the
/// day index. 2000-01-01 (JDN 2 451 545) lands on index 54, Wu-Wu.
pub const DAY_EPOCH_OFFSET: i64 = 49;

/// Cycle index for a stem/branch pair, or `None` when parities differ.
pub const fn cycle_index(stem: HeavenlyStem, branch: EarthlyBranch) -> Option<u8> {
    let s = stem.index() as i32;
    let b = branch.index() as i32;
    if s % 2 != b % 2 {
        return None;
    }
    // The unique i with i ≡ s (mod 10) and i ≡ b (mod 12).
    Some((6 * s - 5 * b).rem_euclid(60) as u8)
}

/// Stem at a cycle index (wraps mod 60).
pub const fn stem_at(index: u8) -> HeavenlyStem {
    HeavenlyStem::from_index((index % CYCLE_LEN) % 10)
}

/// Branch at a cycle index (wraps mod 60).
pub const fn branch_at(index: u8) -> EarthlyBranch {
    EarthlyBranch::from_index((index % CYCLE_LEN) % 12)
}

/// Shift a cycle index by `n` positions, wrapping in both directions.
pub const fn shift(index: u8, n: i64) -> u8 {
    (index as i64 + n).rem_euclid(CYCLE_LEN as i64) as u8
}

/// Cycle index of a sexagenary year.
pub const fn year_index(year: i32) -> u8 {
    (year - YEAR_EPOCH).rem_euclid(CYCLE_LEN as i32) as u8
}

/// Cycle index of the day with the given Julian Day Number.
pub const fn day_index(jdn: i64) -> u8 {
    (jdn + DAY_EPOCH_OFFSET).rem_euclid(CYCLE_LEN as i64) as u8
}

/// Stem of the first (Yin) month for a year stem.
///
/// Jia/Ji → Bing, Yi/Geng → Wu, Bing/Xin → Geng, Ding/Ren → Ren,
/// Wu/Gui → Jia.
pub const fn first_month_stem(year_stem: HeavenlyStem) -> HeavenlyStem {
    HeavenlyStem::from_index((year_stem.index() % 5) * 2 + 2)
}

/// Stem of sexagenary month `month` (1 = Yin month .. 12 = Chou month).
pub const fn month_stem(year_stem: HeavenlyStem, month: u8) -> HeavenlyStem {
    first_month_stem(year_stem).offset(month as i32 - 1)
}

/// Branch of sexagenary month `month`; month 1 is always Yin.
pub const fn month_branch(month: u8) -> EarthlyBranch {
    EarthlyBranch::from_index((month + 1) % 12)
}

/// Stem of the Zi hour for a day stem.
///
/// Jia/Ji → Jia, Yi/Geng → Bing, Bing/Xin → Wu, Ding/Ren → Geng,
/// Wu/Gui → Ren.
pub const fn zi_hour_stem(day_stem: HeavenlyStem) -> HeavenlyStem {
    HeavenlyStem::from_index((day_stem.index() % 5) * 2)
}

/// Stem of the hour whose branch is `hour_branch`.
pub const fn hour_stem(day_stem: HeavenlyStem, hour_branch: EarthlyBranch) -> HeavenlyStem {
    zi_hour_stem(day_stem).offset(hour_branch.index() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_index_roundtrip() {
        for i in 0..CYCLE_LEN {
            assert_eq!(cycle_index(stem_at(i), branch_at(i)), Some(i));
        }
    }

    #[test]
    fn mismatched_parity_rejected() {
        assert_eq!(cycle_index(HeavenlyStem::Jia, EarthlyBranch::Chou), None);
        assert_eq!(cycle_index(HeavenlyStem::Yi, EarthlyBranch::Zi), None);
    }

    #[test]
    fn known_years() {
        // 1984 Jia-Zi, 1990 Geng-Wu, 2024 Jia-Chen
        assert_eq!(year_index(1984), 0);
        assert_eq!(stem_at(year_index(1990)), HeavenlyStem::Geng);
        assert_eq!(branch_at(year_index(1990)), EarthlyBranch::Wu);
        assert_eq!(branch_at(year_index(2024)), EarthlyBranch::Chen);
    }

    #[test]
    fn known_days() {
        assert_eq!(day_index(2_451_545), 54);
        // 1990-05-15 Geng-Chen
        assert_eq!(day_index(2_448_027), 16);
        assert_eq!(stem_at(16), HeavenlyStem::Geng);
        assert_eq!(branch_at(16), EarthlyBranch::Chen);
    }

    #[test]
    fn month_stem_table() {
        use HeavenlyStem::*;
        let expected = [
            (Jia, Bing),
            (Yi, Wu),
            (Bing, Geng),
            (Ding, Ren),
            (Wu, Jia),
            (Ji, Bing),
            (Geng, Wu),
            (Xin, Geng),
            (Ren, Ren),
            (Gui, Jia),
        ];
        for (year, first) in expected {
            assert_eq!(first_month_stem(year), first, "{year}");
        }
        assert_eq!(month_stem(Geng, 4), Xin);
        assert_eq!(month_branch(1), EarthlyBranch::Yin);
        assert_eq!(month_branch(11), EarthlyBranch::Zi);
        assert_eq!(month_branch(12), EarthlyBranch::Chou);
    }

    #[test]
    fn hour_stem_table() {
        use HeavenlyStem::*;
        let expected = [(Jia, Jia), (Yi, Bing), (Bing, Wu), (Ding, Geng), (Wu, Ren)];
        for (day, zi) in expected {
            assert_eq!(zi_hour_stem(day), zi);
            assert_eq!(zi_hour_stem(day.offset(5)), zi);
        }
        assert_eq!(hour_stem(Geng, EarthlyBranch::Wu), Ren);
    }

    #[test]
    fn shift_wraps() {
        assert_eq!(shift(59, 1), 0);
        assert_eq!(shift(0, -1), 59);
        assert_eq!(shift(10, -130), 0);
    }
}
