// Copyright 2025 the Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `affinity_spring`.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

use affinity_matrix::Matrix;
use affinity_spring::{MatrixSpring, Spring};

const FRAME_MS: f64 = 16.0;

fn bench_spring(c: &mut Criterion) {
    let mut group = c.benchmark_group("affinity_spring");

    group.bench_function("scalar_update", |b| {
        b.iter_batched(
            || {
                let mut spring = Spring::new(0.0_f64);
                spring.set_target(100.0);
                spring
            },
            |mut spring| {
                for _ in 0..32 {
                    black_box(spring.update(FRAME_MS));
                }
                spring
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("matrix_update", |b| {
        b.iter_batched(
            || {
                let mut spring = MatrixSpring::matrix(Matrix::IDENTITY);
                spring.set(&Matrix::compose(
                    Matrix::translate(120.0, -40.0),
                    Matrix::rotate(2.8),
                ));
                spring
            },
            |mut spring| {
                for _ in 0..32 {
                    spring.update(FRAME_MS);
                    black_box(spring.value());
                }
                spring
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("matrix_settle", |b| {
        b.iter_batched(
            || {
                let mut spring = MatrixSpring::matrix(Matrix::IDENTITY);
                spring.set(&Matrix::scale(3.0, 0.5));
                spring
            },
            |mut spring| {
                while spring.update(FRAME_MS) {}
                spring
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_spring);
criterion_main!(benches);
