//! Benchmarks for the factorial-cost operations.
//!
//! Includes:
//! - Permanent (sequential and rayon-partitioned)
//! - Adjoint
//! - Cramer's-rule solve

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use supertropical::prelude::*;

/// Deterministic pseudo-random square matrix with small integer entries.
fn test_matrix(n: usize) -> Matrix {
    let rows: Vec<Vec<i32>> = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| i32::try_from((i * 7 + j * 13) % 17).unwrap_or(0))
                .collect()
        })
        .collect();
    Matrix::from_rows(rows).unwrap()
}

fn bench_permanent(c: &mut Criterion) {
    let mut group = c.benchmark_group("permanent");
    group.sample_size(20);

    let sequential = PermanentConfig::sequential();
    let parallel = PermanentConfig {
        parallel_threshold: 1,
        ..PermanentConfig::default()
    };

    for n in [4, 6, 8] {
        let a = test_matrix(n);

        group.bench_with_input(BenchmarkId::new("sequential", n), &n, |b, _| {
            b.iter(|| black_box(a.permanent_with(&sequential).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("parallel", n), &n, |b, _| {
            b.iter(|| black_box(a.permanent_with(&parallel).unwrap()))
        });
    }

    group.finish();
}

fn bench_adjoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("adjoint");
    group.sample_size(20);

    for n in [3, 5, 7] {
        let a = test_matrix(n);

        group.bench_with_input(BenchmarkId::new("default", n), &n, |b, _| {
            b.iter(|| black_box(a.adjoint().unwrap()))
        });
    }

    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");

    for n in [3, 5, 7] {
        let a = test_matrix(n);
        let rhs = Matrix::column((0..n).map(|i| i32::try_from(i).unwrap_or(0))).unwrap();

        group.bench_with_input(BenchmarkId::new("cramer", n), &n, |b, _| {
            // singular inputs are a valid outcome here, the cost is the same
            b.iter(|| black_box(a.solve(&rhs).ok()))
        });
    }

    group.finish();
}

criterion_group!(permanent_benches, bench_permanent, bench_adjoint, bench_solve);

criterion_main!(permanent_benches);
