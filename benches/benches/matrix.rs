// Copyright 2025 the Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `affinity_matrix` and `affinity_stack`.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use affinity_matrix::{Matrix, PolarMatrix};
use affinity_stack::{Transform, TransformStack};

fn sample_matrices(n: usize) -> Vec<Matrix> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            Matrix::compose_all([
                Matrix::translate(t * 3.0, -t),
                Matrix::rotate(t * 0.37),
                Matrix::scale(1.0 + t * 0.01, 0.5 + t * 0.02),
                Matrix::skew(0.1, -0.05),
            ])
        })
        .collect()
}

fn sample_stack(n: usize) -> TransformStack {
    let mut stack = TransformStack::new();
    for i in 0..n {
        let t = i as f64;
        let transform = match i % 4 {
            0 => Transform::Translate { x: t, y: -t },
            1 => Transform::Rotate { angle: t * 0.1 },
            2 => Transform::Scale { x: 1.01, y: 0.99 },
            _ => Transform::Skew { x: 0.02, y: 0.0 },
        };
        stack.push(transform);
    }
    stack
}

fn bench_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("affinity_matrix");
    let matrices = sample_matrices(256);

    group.bench_function("compose_pairs", |b| {
        b.iter(|| {
            let mut acc = Matrix::IDENTITY;
            for &m in &matrices {
                acc = Matrix::compose(acc, black_box(m));
            }
            black_box(acc)
        });
    });

    group.bench_function("invert", |b| {
        b.iter(|| {
            for &m in &matrices {
                black_box(black_box(m).invert());
            }
        });
    });

    group.bench_function("polar_round_trip", |b| {
        b.iter(|| {
            for &m in &matrices {
                black_box(PolarMatrix::decompose(black_box(m)).compose());
            }
        });
    });

    group.bench_function("transform_points", |b| {
        let m = matrices[17];
        b.iter(|| {
            let mut sum = kurbo::Vec2::ZERO;
            for i in 0..1024 {
                let p = kurbo::Point::new(i as f64, (i * 7 % 13) as f64);
                sum += black_box(m).transform_point(p).to_vec2();
            }
            black_box(sum)
        });
    });

    group.finish();
}

fn bench_stack(c: &mut Criterion) {
    let mut group = c.benchmark_group("affinity_stack");

    for &n in &[4_usize, 16, 64] {
        let stack = sample_stack(n);
        group.bench_with_input(BenchmarkId::new("composed", n), &stack, |b, stack| {
            b.iter(|| black_box(stack.composed()));
        });
        group.bench_with_input(BenchmarkId::new("intermediates", n), &stack, |b, stack| {
            b.iter(|| {
                for m in stack.intermediates() {
                    black_box(m);
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_matrix, bench_stack);
criterion_main!(benches);
