//! Criterion benchmarks for neighbor counting and confidence hulls.
//! Focus sizes: n in {100, 500, 2000} uniformly scattered points.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use macroeco::density::{count_pts_within_radius, Scale};
use macroeco::hull::{confidence_hull, HullCfg};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_points(n: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (rng.gen_range(1.0..100.0), rng.gen_range(1.0..100.0)))
        .unzip()
}

fn bench_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("density");
    for &n in &[100usize, 500, 2000] {
        let (x, y) = random_points(n, 43);
        group.bench_with_input(BenchmarkId::new("count_linear", n), &n, |b, _| {
            b.iter(|| count_pts_within_radius(&x, &y, 5.0, Scale::Linear).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("count_log", n), &n, |b, _| {
            b.iter(|| count_pts_within_radius(&x, &y, 1.2, Scale::Log).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("confidence_hull", n), &n, |b, _| {
            b.iter(|| confidence_hull(&x, &y, 5.0, HullCfg::default()).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_density);
criterion_main!(benches);
