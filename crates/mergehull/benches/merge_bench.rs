//! Criterion benchmarks for the merge hull driver.
//! Sizes: n in {100, 1_000, 10_000, 100_000} random points, sequential and rayon fork-join.
//! Results land under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use mergehull::gen::{random_points, GenCfg, ReplayToken};
use mergehull::io::normalize_points;
use mergehull::{compute_convex_hull, compute_convex_hull_with, HullCfg};

fn cloud(n: usize, seed: u64) -> Vec<mergehull::Point> {
    let cfg = GenCfg {
        range: 1_000_000,
        count: n,
    };
    normalize_points(random_points(cfg, ReplayToken::new(seed)))
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_hull");
    for &n in &[100usize, 1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("sequential", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, 43),
                |pts| {
                    let _hull = compute_convex_hull(&pts).unwrap();
                },
                BatchSize::LargeInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("parallel", n), &n, |b, &n| {
            let cfg = HullCfg {
                parallel: true,
                min_parallel_len: 2048,
            };
            b.iter_batched(
                || cloud(n, 44),
                |pts| {
                    let _hull = compute_convex_hull_with(&pts, cfg).unwrap();
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
