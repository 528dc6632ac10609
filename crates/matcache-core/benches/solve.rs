//! Benchmarks for cached versus uncached inverse lookups

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use matcache_core::{solve, InverseCache};
use matcache_linalg::DenseInverter;
use ndarray::Array2;

/// Generate a diagonally dominant test matrix
fn generate_matrix(n: usize) -> Array2<f64> {
    Array2::from_shape_fn((n, n), |(i, j)| {
        if i == j {
            2.0 * n as f64
        } else {
            ((i + 2 * j) % 5) as f64 * 0.1
        }
    })
}

fn bench_hit_vs_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");

    for &n in &[8usize, 32, 128] {
        let matrix = generate_matrix(n);

        group.bench_with_input(BenchmarkId::new("miss", n), &matrix, |b, m| {
            b.iter_batched(
                || InverseCache::new(m.clone()),
                |mut cache| {
                    solve(&mut cache, &DenseInverter).unwrap();
                    cache
                },
                BatchSize::SmallInput,
            )
        });

        let mut warm = InverseCache::new(matrix.clone());
        solve(&mut warm, &DenseInverter).unwrap();
        group.bench_function(BenchmarkId::new("hit", n), |b| {
            b.iter(|| {
                let inverse = solve(black_box(&mut warm), &DenseInverter).unwrap();
                black_box(inverse[[0, 0]])
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_hit_vs_miss);
criterion_main!(benches);
