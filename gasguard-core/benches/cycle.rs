//! # Cycle Benchmarks
//!
//! Measures the per-cycle cost of each stage and of a full controller cycle.
//!
//! Run: `cargo bench --bench cycle`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gasguard_core::{
    AirQualityEngine, CycleController, EngineConfig, FixedTime, GasDiscriminator,
    MemorySource, NormalizedReading, Normalizer, SensorSample,
};

const MIXTURE: SensorSample = SensorSample::new(1.48, 1.25, 1.42);

/// Benchmark individual pipeline stages
fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");

    let normalizer = Normalizer::default();
    group.bench_function("normalize", |b| {
        b.iter(|| black_box(normalizer.normalize(black_box(&MIXTURE))))
    });

    let discriminator = GasDiscriminator::default();
    let reading = NormalizedReading::new(0.18, 0.22, 0.16).unwrap();
    group.bench_function("discriminate", |b| {
        b.iter(|| black_box(discriminator.discriminate(black_box(&reading))))
    });

    group.finish();
}

/// Benchmark full sample processing
fn bench_process(c: &mut Criterion) {
    let engine = AirQualityEngine::new(EngineConfig::default()).unwrap();

    c.bench_function("engine_process", |b| {
        b.iter(|| black_box(engine.process(black_box(&MIXTURE))))
    });

    let samples = [MIXTURE; 64];
    c.bench_function("controller_run_cycle", |b| {
        b.iter_batched(
            || {
                CycleController::new(
                    EngineConfig::default(),
                    MemorySource::new(&samples),
                    FixedTime::new(0),
                )
                .unwrap()
            },
            |mut controller| black_box(controller.run_cycle()),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_stages, bench_process);
criterion_main!(benches);
