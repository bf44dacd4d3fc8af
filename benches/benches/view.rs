// Copyright 2025 the Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `affinity_view` and a full `affinity_render` frame.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

use affinity_matrix::Matrix;
use affinity_render::{MonospaceGlyphs, RecordingBackend, Renderer};
use affinity_view::{OriginScale, Viewport, canvas_space_viewport_rect, grid_lines};
use kurbo::{Point, Size};

fn bench_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("affinity_view");
    let camera = OriginScale::new(Point::new(12.0, -30.0), 1.7);
    let content = Matrix::compose(Matrix::rotate(0.4), Matrix::skew(0.3, 0.0));

    group.bench_function("viewport_rect", |b| {
        b.iter(|| {
            black_box(canvas_space_viewport_rect(
                black_box(camera),
                black_box(content),
                1280.0,
                720.0,
            ))
        });
    });

    group.bench_function("viewport_geometry_recompute", |b| {
        let mut viewport = Viewport::new(Size::new(1280.0, 720.0));
        viewport.set_camera(camera);
        let mut angle = 0.0;
        b.iter(|| {
            angle += 0.001;
            viewport.set_content(Matrix::rotate(angle));
            black_box(viewport.geometry().copied())
        });
    });

    group.bench_function("grid_lines", |b| {
        b.iter(|| black_box(grid_lines(-640.0, 640.0, black_box(12.5)).sum::<f64>()));
    });

    group.finish();
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("affinity_render");

    group.bench_function("draw_frame", |b| {
        b.iter_batched(
            || {
                let mut renderer = Renderer::new(Size::new(1280.0, 720.0));
                renderer.snap_matrix(Matrix::compose(Matrix::rotate(0.3), Matrix::scale(2.0, 1.5)));
                (renderer, RecordingBackend::new(), MonospaceGlyphs::new(7.0))
            },
            |(mut renderer, mut backend, mut glyphs)| {
                black_box(renderer.tick(0.0, &mut backend, &mut glyphs));
                backend
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_view, bench_frame);
criterion_main!(benches);
