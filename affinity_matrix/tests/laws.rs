// Copyright 2025 the Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Algebraic laws for `affinity_matrix`.
//!
//! Each law is checked over a deterministic sample of matrices built from a
//! small linear congruential generator, so failures are reproducible.

use core::f64::consts::{FRAC_PI_2, PI, TAU};

use affinity_matrix::{Matrix, PolarMatrix, correct_angle};
use kurbo::Point;

struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        // Top 53 bits as a fraction in [0, 1).
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

fn sample_matrices(n: usize) -> Vec<Matrix> {
    let mut rng = Lcg(0x5eed);
    (0..n)
        .map(|_| {
            Matrix::compose_all([
                Matrix::translate(rng.range(-500.0, 500.0), rng.range(-500.0, 500.0)),
                Matrix::rotate(rng.range(-PI, PI)),
                Matrix::scale(rng.range(0.1, 5.0), rng.range(0.1, 5.0)),
                Matrix::skew(rng.range(-0.6, 0.6), rng.range(-0.6, 0.6)),
            ])
        })
        .collect()
}

#[test]
fn identity_is_neutral_on_both_sides() {
    for m in sample_matrices(64) {
        assert!(Matrix::compose(Matrix::IDENTITY, m).approx_eq(m, 1e-9), "{m:?}");
        assert!(Matrix::compose(m, Matrix::IDENTITY).approx_eq(m, 1e-9), "{m:?}");
    }
}

#[test]
fn composing_with_inverse_gives_identity() {
    for m in sample_matrices(64) {
        let inv = m.invert().expect("sampled matrices are invertible");
        let product = Matrix::compose(m, inv);
        assert!(product.approx_eq(Matrix::IDENTITY, 1e-7), "{m:?} * {inv:?} = {product:?}");
    }
}

#[test]
fn invert_is_absent_exactly_for_zero_determinant() {
    let singular = [
        Matrix::from_components(0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
        Matrix::from_components(1.0, 2.0, 2.0, 4.0, 3.0, 3.0),
        Matrix::scale(0.0, 1.0),
    ];
    for m in singular {
        assert_eq!(m.determinant(), 0.0);
        assert!(m.invert().is_none(), "{m:?} should not invert");
    }
    // Tiny but nonzero determinants still invert.
    assert!(Matrix::scale(1e-150, 1e-150).invert().is_some());
}

#[test]
fn composition_is_associative() {
    let ms = sample_matrices(30);
    for w in ms.windows(3) {
        let left = Matrix::compose(Matrix::compose(w[0], w[1]), w[2]);
        let right = Matrix::compose(w[0], Matrix::compose(w[1], w[2]));
        assert!(left.approx_eq(right, 1e-6), "{left:?} != {right:?}");
    }
}

#[test]
fn compose_applies_the_right_operand_first() {
    let ms = sample_matrices(16);
    let p = Point::new(3.0, -2.0);
    for w in ms.windows(2) {
        let composed = Matrix::compose(w[0], w[1]).transform_point(p);
        let nested = w[0].transform_point(w[1].transform_point(p));
        assert!((composed - nested).hypot() < 1e-6, "{composed:?} != {nested:?}");
    }
}

#[test]
fn polar_round_trip_for_non_degenerate_matrices() {
    for m in sample_matrices(64) {
        let back = PolarMatrix::decompose(m).compose();
        assert!(back.approx_eq(m, 1e-9), "{back:?} != {m:?}");
    }
}

#[test]
fn corrected_angles_stay_within_a_turn_and_half_a_turn_of_target() {
    let mut rng = Lcg(42);
    for _ in 0..1000 {
        let stored = rng.range(-TAU, TAU);
        let target = rng.range(-PI, PI);
        let corrected = correct_angle(stored, target);
        assert!((corrected - stored).abs() <= TAU + 1e-12, "{stored} -> {corrected}");
        assert!((corrected - target).abs() <= PI + 1e-12, "{corrected} vs {target}");
    }
}

#[test]
fn worked_examples() {
    let m = Matrix::compose(Matrix::translate(10.0, 0.0), Matrix::rotate(FRAC_PI_2));
    let p = m.transform_point(Point::ORIGIN);
    assert!((p.x - 10.0).abs() < 1e-9 && p.y.abs() < 1e-9, "{p:?}");

    let inv = Matrix::scale(2.0, 2.0).invert().unwrap();
    assert!(inv.approx_eq(Matrix::scale(0.5, 0.5), 1e-12), "{inv:?}");
}
