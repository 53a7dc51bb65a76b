//! Benchmarks for the correlogram pipeline.

use correlogram::correlation::{compute_acf, compute_pacf_with, PacfMethod};
use correlogram::{analyze, CorrelogramConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn generate_sales(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let weekly = if i % 7 >= 5 { 30.0 } else { 0.0 };
            100.0 + weekly + 5.0 * (i as f64 * 0.37).sin()
        })
        .collect()
}

fn bench_acf(c: &mut Criterion) {
    let mut group = c.benchmark_group("acf");

    for size in [128, 365, 1024, 4096].iter() {
        let series = generate_sales(*size);
        group.bench_with_input(BenchmarkId::new("max_lag_90", size), size, |b, _| {
            b.iter(|| compute_acf(black_box(&series), 90))
        });
    }

    group.finish();
}

fn bench_pacf_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("pacf_methods");
    let series = generate_sales(1095);

    for max_lag in [14, 30, 60, 90, 180].iter() {
        group.bench_with_input(
            BenchmarkId::new("YuleWalker", max_lag),
            max_lag,
            |b, &max_lag| {
                b.iter(|| compute_pacf_with(black_box(&series), max_lag, PacfMethod::YuleWalker))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("LevinsonDurbin", max_lag),
            max_lag,
            |b, &max_lag| {
                b.iter(|| {
                    compute_pacf_with(black_box(&series), max_lag, PacfMethod::LevinsonDurbin)
                })
            },
        );
    }

    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let series = generate_sales(730);
    let config = CorrelogramConfig::default();
    c.bench_function("analyze_default", |b| {
        b.iter(|| analyze(black_box(&series), &config))
    });
}

criterion_group!(benches, bench_acf, bench_pacf_methods, bench_analyze);
criterion_main!(benches);
