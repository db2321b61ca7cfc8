use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ganzhi_rs::{BirthMoment, Engine, EngineConfig, Gender, ReadingContext};

fn engine_bench(c: &mut Criterion) {
    let birth = BirthMoment::solar(1990, 5, 15, 12, "Asia/Seoul").with_gender(Gender::Male);
    let cached = Engine::default();
    let uncached = Engine::new(EngineConfig {
        cache_capacity: 0,
        ..EngineConfig::default()
    });
    let ctx = ReadingContext::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default());

    let mut group = c.benchmark_group("engine");
    group.bench_function("compute_cached", |b| {
        b.iter(|| cached.compute(black_box(&birth)))
    });
    group.bench_function("compute_uncached", |b| {
        b.iter(|| uncached.compute(black_box(&birth)))
    });
    group.bench_function("full_reading", |b| {
        b.iter(|| cached.reading(black_box(&birth), &ctx))
    });
    group.finish();
}

criterion_group!(benches, engine_bench);
criterion_main!(benches);
