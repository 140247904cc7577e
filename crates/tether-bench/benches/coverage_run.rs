//! Criterion benchmarks for complete coverage runs.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use tether_bench::{reference_profile, stress_profile};
use tether_engine::{CoverageSession, RoundScheduler, ScheduleParams};

fn bench_run_64(c: &mut Criterion) {
    c.bench_function("run_64x64", |b| {
        b.iter(|| {
            let mut session = CoverageSession::new(reference_profile(42).unwrap()).unwrap();
            black_box(session.run().unwrap());
        });
    });
}

fn bench_run_200(c: &mut Criterion) {
    let mut group = c.benchmark_group("stress");
    group.sample_size(10);
    group.bench_function("run_200x200", |b| {
        b.iter(|| {
            let mut session = CoverageSession::new(stress_profile(42).unwrap()).unwrap();
            black_box(session.run().unwrap());
        });
    });
    group.finish();
}

fn bench_schedule(c: &mut Criterion) {
    let scheduler = RoundScheduler::new(80_002, ScheduleParams::default()).unwrap();
    c.bench_function("schedule_all_rounds", |b| {
        b.iter(|| {
            let last = scheduler.rounds().last();
            black_box(last);
        });
    });
}

criterion_group!(benches, bench_run_64, bench_run_200, bench_schedule);
criterion_main!(benches);
