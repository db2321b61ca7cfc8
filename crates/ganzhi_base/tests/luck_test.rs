use chrono::NaiveDate;
use ganzhi_base::{
    BirthMoment, Gender, LuckConfig, LuckDirection, LuckError, LuckTheme, MonthBoundary, compute,
    project_luck_timeline,
};
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn calendar_month_timeline() {
    let mut cfg = LuckConfig::default();
    cfg.calendar.month_boundary = MonthBoundary::CalendarMonth;
    let birth = BirthMoment::solar(1990, 5, 15, 12, "Asia/Seoul").with_gender(Gender::Male);
    let p = compute(&birth, &cfg.calendar).unwrap();
    let t = project_luck_timeline(&p, &birth, date(2024, 6, 1), &cfg).unwrap();
    assert_eq!(t.start_age, 6);
    assert_eq!(t.windows[1].age_start, 6);
    assert_eq!(t.windows[1].age_end, 15);
}

#[test]
fn shorter_max_age_generates_fewer_windows() {
    let cfg = LuckConfig {
        max_age: 40,
        ..LuckConfig::default()
    };
    let birth = BirthMoment::solar(1990, 5, 15, 12, "Asia/Seoul").with_gender(Gender::Male);
    let p = compute(&birth, &cfg.calendar).unwrap();
    let t = project_luck_timeline(&p, &birth, date(1990, 5, 15), &cfg).unwrap();
    assert_eq!(t.current_age, 0);
    assert!(t.windows.last().unwrap().age_end >= 40);
    assert!(t.windows[t.windows.len() - 2].age_end < 40);
    assert_eq!(t.current().theme, LuckTheme::Formative);
}

#[test]
fn invalid_birth_surfaces_as_calendar_error() {
    let good = BirthMoment::solar(1990, 5, 15, 12, "Asia/Seoul");
    let p = compute(&good, &LuckConfig::default().calendar).unwrap();
    let bad = BirthMoment::solar(1990, 2, 30, 12, "Asia/Seoul");
    assert!(matches!(
        project_luck_timeline(&p, &bad, date(2024, 1, 1), &LuckConfig::default()),
        Err(LuckError::Calendar(_))
    ));
}

#[test]
fn timeline_serializes() {
    let birth = BirthMoment::solar(1990, 5, 15, 12, "Asia/Seoul").with_gender(Gender::Female);
    let p = compute(&birth, &LuckConfig::default().calendar).unwrap();
    let t = project_luck_timeline(&p, &birth, date(2024, 6, 1), &LuckConfig::default()).unwrap();
    let json = serde_json::to_value(&t).unwrap();
    assert_eq!(json["direction"], "backward");
    assert_eq!(json["windows"][0]["theme"], "formative");
    assert_eq!(json["as_of"], "2024-06-01");
}

fn birth_strategy() -> impl Strategy<Value = BirthMoment> {
    (1901i32..=2080, 1u32..=12, 1u32..=28, 0u32..=23, any::<bool>()).prop_map(
        |(y, m, d, h, male)| {
            let g = if male { Gender::Male } else { Gender::Female };
            BirthMoment::solar(y, m, d, h, "+08:00").with_gender(g)
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn windows_contiguous_and_cover_max_age(b in birth_strategy()) {
        let cfg = LuckConfig::default();
        let p = compute(&b, &cfg.calendar).unwrap();
        let as_of = date(b.year + 20, 1, 1);
        let t = project_luck_timeline(&p, &b, as_of, &cfg).unwrap();
        prop_assert!((1..=10).contains(&t.start_age));
        prop_assert_eq!(t.windows[0].age_start, 0);
        for pair in t.windows.windows(2) {
            prop_assert_eq!(pair[0].age_end + 1, pair[1].age_start);
        }
        prop_assert!(t.windows.last().unwrap().age_end >= cfg.max_age);
    }

    #[test]
    fn consecutive_windows_step_one_cycle(b in birth_strategy()) {
        let cfg = LuckConfig::default();
        let p = compute(&b, &cfg.calendar).unwrap();
        let t = project_luck_timeline(&p, &b, date(b.year + 1, 1, 1), &cfg).unwrap();
        let step = match t.direction {
            LuckDirection::Forward => 1,
            LuckDirection::Backward => 59,
        };
        for pair in t.windows[1..].windows(2) {
            let a = (6 * i32::from(pair[0].stem.index()) - 5 * i32::from(pair[0].branch.index())).rem_euclid(60);
            let b = (6 * i32::from(pair[1].stem.index()) - 5 * i32::from(pair[1].branch.index())).rem_euclid(60);
            prop_assert_eq!((b - a).rem_euclid(60), step);
        }
    }

    #[test]
    fn lookup_matches_window_bounds(b in birth_strategy(), age in 0i32..120) {
        let cfg = LuckConfig::default();
        let p = compute(&b, &cfg.calendar).unwrap();
        let t = project_luck_timeline(&p, &b, date(b.year + 1, 1, 1), &cfg).unwrap();
        let w = t.current_luck_pillar(age).unwrap();
        prop_assert!(w.contains(age as u32));
        let next = t.next_luck_pillar(age).unwrap();
        prop_assert_eq!(next.age_start, w.age_end + 1);
    }
}
