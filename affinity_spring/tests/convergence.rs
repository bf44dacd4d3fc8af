// Copyright 2025 the Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Convergence behavior of springs at typical frame rates.

use core::f64::consts::PI;

use affinity_matrix::{Matrix, PolarMatrix};
use affinity_spring::{IndirectSpring, MatrixSpring, Spring, SpringConfig};
use kurbo::{Point, Vec2};

const FRAME_MS: f64 = 16.0;

#[test]
fn scalar_step_response_overshoots_at_most_slightly() {
    let mut spring = Spring::new(0.0_f64);
    spring.set_target(100.0);

    let mut elapsed = 0.0;
    let mut max = f64::MIN;
    while spring.update(FRAME_MS) {
        elapsed += FRAME_MS;
        max = max.max(spring.value());
        assert!(elapsed < 2000.0, "not settled after {elapsed} ms");
    }
    assert!(max < 110.0, "overshoot too large: {max}");
    assert_eq!(spring.value(), 100.0);
}

#[test]
fn every_record_shape_settles_within_three_hundred_frames() {
    fn run<T: affinity_spring::Fields + PartialEq + core::fmt::Debug>(from: T, to: T) {
        let mut spring = Spring::new(from);
        spring.set_target(to);
        let mut frames = 0;
        while spring.update(FRAME_MS) {
            frames += 1;
            assert!(frames <= 300, "{to:?} did not settle");
        }
        assert_eq!(spring.value(), to);
    }

    run(-40.0_f64, 1234.5);
    run(Point::new(0.0, 0.0), Point::new(-300.0, 80.0));
    run(Vec2::new(1.0, 1.0), Vec2::new(0.0, 0.0));
    run([0.0; 4], [1.0, -2.0, 3.0, -4.0]);
}

#[test]
fn retargeting_mid_flight_keeps_momentum() {
    let mut spring = Spring::new(0.0_f64);
    spring.set_target(100.0);
    for _ in 0..5 {
        spring.update(FRAME_MS);
    }
    let before = spring.value();
    spring.set_target(0.0);
    spring.update(FRAME_MS);
    // Still moving up on the first frame after reversing the target.
    assert!(spring.value() > before, "{} <= {before}", spring.value());
}

#[test]
fn stiffer_springs_settle_faster() {
    let frames = |config: SpringConfig| {
        let mut spring = Spring::with_config(0.0_f64, config);
        spring.set_target(50.0);
        let mut n = 0;
        while spring.update(FRAME_MS) {
            n += 1;
        }
        n
    };
    let soft = frames(SpringConfig::new(60.0, 16.0, 1.0));
    let stiff = frames(SpringConfig::new(400.0, 40.0, 1.0));
    assert!(stiff < soft, "stiff = {stiff}, soft = {soft}");
}

#[test]
fn matrix_spring_keeps_radius_during_a_half_turn() {
    let mut spring = MatrixSpring::matrix(Matrix::compose(
        Matrix::translate(20.0, 20.0),
        Matrix::scale_uniform(2.0),
    ));
    spring.set(&Matrix::compose_all([
        Matrix::translate(20.0, 20.0),
        Matrix::rotate(PI * 0.9),
        Matrix::scale_uniform(2.0),
    ]));

    let mut frames = 0;
    while spring.update(FRAME_MS) {
        frames += 1;
        let (sx, sy) = spring.value().axis_scales();
        assert!((sx - 2.0).abs() < 1e-9 && (sy - 2.0).abs() < 1e-9, "({sx}, {sy})");
        assert!(frames <= 300);
    }
}

#[test]
fn custom_indirect_spring_round_trips_through_its_representation() {
    // Animate a point in polar coordinates around the origin.
    fn to_polar(p: &Point) -> PolarMatrix {
        PolarMatrix {
            x_angle: p.y.atan2(p.x),
            x_radius: p.to_vec2().hypot(),
            ..PolarMatrix::default()
        }
    }
    fn from_polar(d: &PolarMatrix) -> Point {
        let (s, c) = d.x_angle.sin_cos();
        Point::new(d.x_radius * c, d.x_radius * s)
    }

    let mut spring = IndirectSpring::new(&Point::new(10.0, 0.0), to_polar, from_polar);
    spring.set(&Point::new(0.0, 10.0));
    while spring.update(FRAME_MS) {
        let r = spring.value().to_vec2().hypot();
        assert!((r - 10.0).abs() < 1e-9, "left the circle: {r}");
    }
    let end = spring.value();
    assert!((end - Point::new(0.0, 10.0)).hypot() < 1e-9, "{end:?}");
}

#[test]
fn snapping_a_matrix_spring_stops_it() {
    let mut spring = MatrixSpring::matrix(Matrix::IDENTITY);
    spring.set(&Matrix::translate(100.0, 0.0));
    spring.update(FRAME_MS);
    spring.snap(&Matrix::scale(3.0, 3.0));
    assert!(spring.is_settled());
    assert!(spring.value().approx_eq(Matrix::scale(3.0, 3.0), 1e-12));
    assert!(!spring.update(FRAME_MS));
}
