// Copyright 2025 the Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Affinity Matrix: immutable 2D affine matrices.
//!
//! This crate provides the numeric foundation for visualizing stacks of 2D
//! transforms:
//! - [`Matrix`]: a six‑coefficient affine map with composition, inversion,
//!   determinant, and point/vector transformation.
//! - [`PolarMatrix`]: a per‑axis angle + radius representation of the same
//!   map, used to animate rotations and scales without shearing artifacts.
//! - [`correct_angle`]: keeps an animated angle on the short rotational path
//!   when its target wraps around `±π`.
//!
//! It does **not** own any animation state or rendering backend. Matrices are
//! plain `Copy` values built only through named constructors.
//!
//! ## Composition order
//!
//! [`Matrix::compose`] (and `a * b`) produces the map `p ↦ a(b(p))`: the
//! rightmost matrix is applied first, exactly like a CSS transform list or
//! [`kurbo::Affine`] multiplication.
//!
//! ```rust
//! use core::f64::consts::FRAC_PI_2;
//! use kurbo::Point;
//! use affinity_matrix::Matrix;
//!
//! let m = Matrix::compose(Matrix::translate(10.0, 0.0), Matrix::rotate(FRAC_PI_2));
//! let p = m.transform_point(Point::ORIGIN);
//! assert!((p.x - 10.0).abs() < 1e-9 && p.y.abs() < 1e-9);
//!
//! // Rotating about a point sandwiches the rotation between two translations.
//! let about = Matrix::rotate_about(FRAC_PI_2, Point::new(5.0, 5.0));
//! let q = about.transform_point(Point::new(5.0, 5.0));
//! assert!((q.x - 5.0).abs() < 1e-9 && (q.y - 5.0).abs() < 1e-9);
//! ```
//!
//! ## Inversion
//!
//! [`Matrix::invert`] returns `None` when the determinant is exactly zero.
//! Callers that animate toward degenerate matrices must guard separately.
//!
//! ```rust
//! use affinity_matrix::Matrix;
//!
//! assert!(Matrix::from_components(0.0, 0.0, 0.0, 0.0, 0.0, 0.0).invert().is_none());
//! let inv = Matrix::scale(2.0, 2.0).invert().unwrap();
//! assert!(inv.approx_eq(Matrix::scale(0.5, 0.5), 1e-12));
//! ```
//!
//! This crate is `no_std` when the `std` feature is disabled; enable `libm`
//! in that case.

#![cfg_attr(not(feature = "std"), no_std)]

mod format;
mod matrix;
mod polar;

pub use format::{CssTransform, SvgTransform};
pub use matrix::{DEFAULT_EPSILON, Matrix};
pub use polar::{PolarMatrix, correct_angle};
