// Copyright 2025 the Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use affinity_matrix::Matrix;

/// One editable entry of a transform stack.
///
/// The parametric variants keep the values a user typed; [`Transform::Matrix`]
/// holds raw coefficients. Angles are in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    /// Translation by `(x, y)`.
    Translate {
        /// Horizontal offset.
        x: f64,
        /// Vertical offset.
        y: f64,
    },
    /// Rotation about the origin.
    Rotate {
        /// Angle in radians.
        angle: f64,
    },
    /// Scale about the origin.
    Scale {
        /// Horizontal factor.
        x: f64,
        /// Vertical factor.
        y: f64,
    },
    /// Skew, see [`Matrix::skew`].
    Skew {
        /// Horizontal skew angle in radians.
        x: f64,
        /// Vertical skew angle in radians.
        y: f64,
    },
    /// Raw matrix coefficients.
    Matrix(Matrix),
}

impl Transform {
    /// The identity entry.
    pub const IDENTITY: Self = Self::Matrix(Matrix::IDENTITY);

    /// The matrix this entry stands for.
    #[must_use]
    pub fn to_matrix(&self) -> Matrix {
        match *self {
            Self::Translate { x, y } => Matrix::translate(x, y),
            Self::Rotate { angle } => Matrix::rotate(angle),
            Self::Scale { x, y } => Matrix::scale(x, y),
            Self::Skew { x, y } => Matrix::skew(x, y),
            Self::Matrix(m) => m,
        }
    }

    /// Snaps raw matrix coefficients to remove float noise, see
    /// [`Matrix::rounded`]. Parametric variants are returned unchanged.
    #[must_use]
    pub fn rounded(self) -> Self {
        match self {
            Self::Matrix(m) => Self::Matrix(m.rounded()),
            other => other,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Matrix> for Transform {
    fn from(m: Matrix) -> Self {
        Self::Matrix(m)
    }
}

impl From<Transform> for Matrix {
    fn from(t: Transform) -> Self {
        t.to_matrix()
    }
}

/// CSS transform-function syntax, e.g. `translate(10, 0)` or `rotate(1.5rad)`.
impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Translate { x, y } => write!(f, "translate({x}, {y})"),
            Self::Rotate { angle } => write!(f, "rotate({angle}rad)"),
            Self::Scale { x, y } => write!(f, "scale({x}, {y})"),
            Self::Skew { x, y } => write!(f, "skew({x}rad, {y}rad)"),
            Self::Matrix(m) => write!(f, "{}", m.css()),
        }
    }
}
