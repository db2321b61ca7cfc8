use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ganzhi_base::{
    BirthMoment, CalendarConfig, Gender, LuckConfig, MonthBoundary, analyze_elements,
    classify_strength, compute, project_luck_timeline, resolve_ten_gods,
    select_favorable_elements,
};

fn compute_bench(c: &mut Criterion) {
    let birth = BirthMoment::solar(1990, 5, 15, 12, "Asia/Seoul");
    let solar = CalendarConfig::default();
    let calendar = CalendarConfig {
        month_boundary: MonthBoundary::CalendarMonth,
        ..CalendarConfig::default()
    };
    let lunar = BirthMoment::lunar(1990, 4, 21, false, 12, "Asia/Seoul");

    let mut group = c.benchmark_group("compute");
    group.bench_function("solar_term", |b| {
        b.iter(|| compute(black_box(&birth), &solar))
    });
    group.bench_function("calendar_month", |b| {
        b.iter(|| compute(black_box(&birth), &calendar))
    });
    group.bench_function("lunar_input", |b| {
        b.iter(|| compute(black_box(&lunar), &solar))
    });
    group.finish();
}

fn derived_bench(c: &mut Criterion) {
    let birth = BirthMoment::solar(1990, 5, 15, 12, "Asia/Seoul").with_gender(Gender::Male);
    let Ok(pillars) = compute(&birth, &CalendarConfig::default()) else {
        return;
    };
    let balance = analyze_elements(&pillars);
    let strength = classify_strength(&balance, pillars.day_master());
    let as_of = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default();

    let mut group = c.benchmark_group("derived");
    group.bench_function("analyze_elements", |b| {
        b.iter(|| analyze_elements(black_box(&pillars)))
    });
    group.bench_function("resolve_ten_gods", |b| {
        b.iter(|| resolve_ten_gods(black_box(&pillars)))
    });
    group.bench_function("select_favorable_elements", |b| {
        b.iter(|| select_favorable_elements(black_box(&balance), black_box(&strength)))
    });
    group.bench_function("project_luck_timeline", |b| {
        b.iter(|| {
            project_luck_timeline(
                black_box(&pillars),
                &birth,
                black_box(as_of),
                &LuckConfig::default(),
            )
        })
    });
    group.finish();
}

criterion_group!(benches, compute_bench, derived_bench);
criterion_main!(benches);
