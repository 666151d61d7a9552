//! Criterion benchmarks for the Rectangular capability.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use vector2d::prelude::*;

fn random_rects(n: usize, seed: u64) -> Vec<Rect<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Rect::from_xywh(
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-50.0..50.0),
                rng.gen_range(-50.0..50.0),
            )
        })
        .collect()
}

fn bench_rect(c: &mut Criterion) {
    let mut group = c.benchmark_group("rectangular");
    for &n in &[16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("corners", n), &n, |b, &n| {
            b.iter_batched(
                || random_rects(n, 21),
                |rs| rs.iter().map(|r| r.corners()).collect::<Vec<_>>(),
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("squares", n), &n, |b, &n| {
            b.iter_batched(
                || random_rects(n, 22),
                |rs| {
                    rs.iter()
                        .map(|r| (r.bounding_square(), r.inscribed_square()))
                        .collect::<Vec<_>>()
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("sample", n), &n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(23);
            b.iter_batched(
                || random_rects(n, 24),
                |rs| rs.iter().map(|r| r.sample(&mut rng)).collect::<Vec<_>>(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rect);
criterion_main!(benches);
