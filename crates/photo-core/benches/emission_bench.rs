// -------------------------------------------------------------------------
// SCPN Photoemission Lab -- Emission Model Benchmark
// Measures the photocurrent kernel alone and the full I-V curve sweep
// at chart (41 points) and export (401 points) resolutions.
// -------------------------------------------------------------------------

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use photo_core::emission::{iv_curve, photocurrent_ua};
use photo_types::catalog::METALS;
use std::hint::black_box;

fn bench_photocurrent(c: &mut Criterion) {
    let sodium = &METALS[0];
    c.bench_function("photocurrent_single", |b| {
        b.iter(|| {
            photocurrent_ua(
                black_box(sodium),
                black_box(400.0),
                black_box(5.0),
                black_box(0.1),
                black_box(0.4),
            )
        })
    });
}

fn bench_iv_curve(c: &mut Criterion) {
    let sodium = &METALS[0];
    let mut group = c.benchmark_group("iv_curve");
    for n in [41usize, 401] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| iv_curve(black_box(sodium), 400.0, 5.0, 0.1, -3.0, 3.0, n))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_photocurrent, bench_iv_curve);
criterion_main!(benches);
