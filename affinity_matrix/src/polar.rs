// Copyright 2025 the Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::{PI, TAU};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::Matrix;

/// A [`Matrix`] expressed as an angle and a radius per basis vector.
///
/// Interpolating the raw coefficients of two rotations produces a visibly
/// sheared and shrunken shape halfway through. Interpolating angles and radii
/// instead keeps intermediate frames rigid: a rotation stays a rotation and a
/// uniform scale stays uniform.
///
/// Angles are in radians as returned by `atan2`, so freshly decomposed values
/// lie in `[-π, π]`. A zero-length basis vector decomposes to angle `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolarMatrix {
    /// Angle of the X basis vector.
    pub x_angle: f64,
    /// Length of the X basis vector.
    pub x_radius: f64,
    /// Angle of the Y basis vector.
    pub y_angle: f64,
    /// Length of the Y basis vector.
    pub y_radius: f64,
    /// X translation, copied through unchanged.
    pub tx: f64,
    /// Y translation, copied through unchanged.
    pub ty: f64,
}

impl PolarMatrix {
    /// Splits each basis vector of `m` into angle and radius.
    #[must_use]
    pub fn decompose(m: Matrix) -> Self {
        let x = m.basis_x();
        let y = m.basis_y();
        let t = m.translation();
        Self {
            x_angle: x.y.atan2(x.x),
            x_radius: x.x.hypot(x.y),
            y_angle: y.y.atan2(y.x),
            y_radius: y.x.hypot(y.y),
            tx: t.x,
            ty: t.y,
        }
    }

    /// Rebuilds the matrix from angles and radii.
    #[must_use]
    pub fn compose(&self) -> Matrix {
        let (xs, xc) = self.x_angle.sin_cos();
        let (ys, yc) = self.y_angle.sin_cos();
        Matrix::from_components(
            self.x_radius * xc,
            self.x_radius * xs,
            self.y_radius * yc,
            self.y_radius * ys,
            self.tx,
            self.ty,
        )
    }
}

impl From<Matrix> for PolarMatrix {
    fn from(m: Matrix) -> Self {
        Self::decompose(m)
    }
}

impl From<PolarMatrix> for Matrix {
    fn from(p: PolarMatrix) -> Self {
        p.compose()
    }
}

/// Moves `angle` by a full turn toward `target` when they are more than `π` apart.
///
/// Returns `angle` unchanged when `|target − angle| <= π`, otherwise `angle`
/// shifted by `±2π` in the direction of `target`. The shift is never larger
/// than one turn, and whenever the inputs are within `3π` of each other the
/// result is within `π` of `target`, so an interpolation from the result to
/// `target` takes the short way round.
#[must_use]
pub fn correct_angle(angle: f64, target: f64) -> f64 {
    let diff = (target - angle).abs();
    if diff <= PI {
        angle
    } else if angle > target {
        angle - TAU
    } else {
        angle + TAU
    }
}
