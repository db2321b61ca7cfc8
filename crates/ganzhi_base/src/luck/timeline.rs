//! Timeline projection.

use super::start::start_age;
use super::types::{LuckConfig, LuckDirection, LuckTimeline, build_window};
use crate::calendar::{BirthMoment, resolve};
use crate::error::LuckError;
use crate::pillar::FourPillars;

/// Hard cap on generated windows, whatever `max_age` asks for.
const MAX_WINDOWS: u32 = 64;

/// Build the luck timeline of a chart as seen from `as_of`.
///
/// `pillars` must be the chart of `birth`; direction comes from its year
/// stem and the birth gender, windows from its month pillar.
pub fn project_luck_timeline(
    pillars: &FourPillars,
    birth: &BirthMoment,
    as_of: chrono::NaiveDate,
    config: &LuckConfig,
) -> Result<LuckTimeline, LuckError> {
    let resolved = resolve(birth)?;
    if as_of < resolved.date {
        return Err(LuckError::AsOfBeforeBirth {
            as_of,
            birth: resolved.date,
        });
    }
    let direction = LuckDirection::from_chart(pillars.year.stem(), birth.gender);
    let start = start_age(&resolved, direction, config.calendar.month_boundary)?;

    let mut windows = Vec::new();
    for k in 0..=MAX_WINDOWS {
        let w = build_window(pillars.month, pillars.day_master(), direction, start, k);
        let done = w.age_end >= config.max_age;
        windows.push(w);
        if done {
            break;
        }
    }

    let current_age = as_of.years_since(resolved.date).unwrap_or(0);
    log::debug!(
        "luck timeline: {direction:?}, start age {start}, {} windows, age {current_age} at {as_of}",
        windows.len()
    );
    Ok(LuckTimeline {
        direction,
        start_age: start,
        birth_date: resolved.date,
        as_of,
        current_age,
        day_master: pillars.day_master(),
        month_pillar: pillars.month,
        windows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{Gender, compute};
    use crate::luck::types::LuckTheme;
    use chrono::NaiveDate;

    fn golden(gender: Gender) -> (FourPillars, BirthMoment) {
        let birth = BirthMoment::solar(1990, 5, 15, 12, "Asia/Seoul").with_gender(gender);
        let cfg = LuckConfig::default();
        (compute(&birth, &cfg.calendar).unwrap(), birth)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn male_golden_timeline() {
        let (p, b) = golden(Gender::Male);
        let t = project_luck_timeline(&p, &b, date(2024, 6, 1), &LuckConfig::default()).unwrap();
        assert_eq!(t.direction, LuckDirection::Forward);
        assert_eq!(t.start_age, 7);
        assert_eq!(t.current_age, 34);
        assert_eq!(t.windows.len(), 11);
        assert_eq!(t.windows.last().unwrap().age_end, 106);

        let cur = t.current_luck_pillar(34).unwrap();
        assert_eq!(cur.to_string(), " 27-36  Jia-Shen (wood, prosperity)");
        assert_eq!(t.current(), cur);
        let next = t.next_luck_pillar(34).unwrap();
        assert_eq!((next.age_start, next.age_end), (37, 46));
        assert_eq!(next.theme, LuckTheme::SelfReliance);
        let tr = t.transition(34).unwrap();
        assert_eq!((tr.age, tr.year), (37, 2027));
    }

    #[test]
    fn female_runs_backward() {
        let (p, b) = golden(Gender::Female);
        let t = project_luck_timeline(&p, &b, date(2000, 1, 1), &LuckConfig::default()).unwrap();
        assert_eq!(t.direction, LuckDirection::Backward);
        assert_eq!(t.start_age, 3);
        let w = t.current_luck_pillar(5).unwrap();
        assert_eq!((w.stem.name(), w.branch.name()), ("Geng", "Chen"));
        let w2 = t.next_luck_pillar(5).unwrap();
        assert_eq!((w2.stem.name(), w2.branch.name()), ("Ji", "Mao"));
    }

    #[test]
    fn errors_and_extension() {
        let (p, b) = golden(Gender::Male);
        assert!(matches!(
            project_luck_timeline(&p, &b, date(1989, 1, 1), &LuckConfig::default()),
            Err(LuckError::AsOfBeforeBirth { .. })
        ));
        let t = project_luck_timeline(&p, &b, date(2024, 6, 1), &LuckConfig::default()).unwrap();
        assert_eq!(t.current_luck_pillar(-1), Err(LuckError::NegativeAge(-1)));
        let far = t.current_luck_pillar(150).unwrap();
        assert!(far.contains(150));
        assert_eq!(far, t.current_luck_pillar(150).unwrap());
        let formative = t.current_luck_pillar(0).unwrap();
        assert_eq!(formative.theme, LuckTheme::Formative);
        assert_eq!((formative.stem, formative.branch), (p.month.stem(), p.month.branch()));
    }

    #[test]
    fn transition_at_largest_age_does_not_wrap() {
        let (p, b) = golden(Gender::Male);
        let t = project_luck_timeline(&p, &b, date(2024, 6, 1), &LuckConfig::default()).unwrap();
        assert!(t.current_luck_pillar(i32::MAX).unwrap().contains(i32::MAX as u32));
        let tr = t.transition(i32::MAX).unwrap();
        assert_eq!(tr.age, 2_147_483_657);
        assert_eq!(tr.year, 1990 + 2_147_483_657);
        assert!(tr.year > i64::from(i32::MAX));
    }

    #[test]
    fn windows_contiguous() {
        let (p, b) = golden(Gender::Male);
        let t = project_luck_timeline(&p, &b, date(2024, 6, 1), &LuckConfig::default()).unwrap();
        assert_eq!(t.windows[0].age_start, 0);
        for pair in t.windows.windows(2) {
            assert_eq!(pair[0].age_end + 1, pair[1].age_start);
        }
    }
}
