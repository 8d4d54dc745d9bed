#![allow(missing_docs, reason = "criterion entry points")]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use drift_core::{GradientNoise2D, NoiseConfig, NoiseGenerator, ShuffleMode, Window, Xoroshiro};

// ── Point evaluation ────────────────────────────────────────────────────────

fn bench_single_point(c: &mut Criterion) {
    let noise = GradientNoise2D::from_seed(0).expect("default config is valid");

    c.bench_function("gradient_noise_single_point", |b| {
        b.iter(|| black_box(noise.get_value(black_box(12.34), black_box(-56.78))));
    });
}

fn bench_generator_evaluate(c: &mut Criterion) {
    let generator = NoiseGenerator::initialize(0).expect("default config is valid");

    c.bench_function("generator_evaluate", |b| {
        b.iter(|| black_box(generator.evaluate(black_box(12.34), black_box(-56.78))));
    });
}

// ── Window sampling ─────────────────────────────────────────────────────────

fn bench_window(c: &mut Criterion) {
    let generator = NoiseGenerator::initialize(0).expect("default config is valid");

    let mut group = c.benchmark_group("sample_window");
    for side in [64usize, 256] {
        let window = Window {
            origin_x: -100.0,
            origin_y: 40.0,
            width: side,
            height: side,
            scale: 0.05,
        };
        group.throughput(criterion::Throughput::Elements((side * side) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{side}x{side}")),
            &window,
            |b, w| {
                b.iter(|| black_box(generator.sample_window(w)));
            },
        );
    }
    group.finish();
}

// ── Table construction ──────────────────────────────────────────────────────

fn bench_table_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_construction");
    for shuffle in [ShuffleMode::FullRange, ShuffleMode::Shrinking] {
        let config = NoiseConfig {
            shuffle,
            ..NoiseConfig::default()
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{shuffle:?}")),
            &config,
            |b, &config| {
                b.iter(|| {
                    let mut rng = Xoroshiro::from_seed(black_box(0));
                    black_box(GradientNoise2D::new(&mut rng, config))
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_single_point,
    bench_generator_evaluate,
    bench_window,
    bench_table_construction,
);
criterion_main!(benches);
