// Copyright 2025 the Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Affinity Spring: damped-spring interpolation for fixed-shape values.
//!
//! - [`Spring`] drives every channel of a [`Fields`] record toward a target
//!   with a damped harmonic oscillator, one semi-implicit Euler step per
//!   [`Spring::update`] call.
//! - [`IndirectSpring`] animates a value through a decomposed representation,
//!   correcting angular channels so rotations take the short way round.
//! - [`MatrixSpring`] is the indirect spring for
//!   [`Matrix`](affinity_matrix::Matrix) via
//!   [`PolarMatrix`](affinity_matrix::PolarMatrix).
//!
//! Springs never look at a clock. The caller supplies elapsed milliseconds,
//! and each `update` reports whether anything is still moving so a frame
//! loop knows when it can go idle.
//!
//! ```rust
//! use affinity_spring::Spring;
//!
//! let mut spring = Spring::new(0.0_f64);
//! spring.set_target(100.0);
//! let mut frames = 0;
//! while spring.update(16.0) {
//!     frames += 1;
//! }
//! assert_eq!(spring.value(), 100.0);
//! assert!(frames < 300);
//! ```
//!
//! Matrices animate rigidly:
//!
//! ```rust
//! use core::f64::consts::FRAC_PI_2;
//! use affinity_matrix::Matrix;
//! use affinity_spring::MatrixSpring;
//!
//! let mut spring = MatrixSpring::matrix(Matrix::IDENTITY);
//! spring.set(&Matrix::rotate(FRAC_PI_2));
//! spring.update(16.0);
//! let (sx, sy) = spring.value().axis_scales();
//! assert!((sx - 1.0).abs() < 1e-9 && (sy - 1.0).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std` when the `std` feature is disabled; enable `libm`
//! in that case.

#![cfg_attr(not(feature = "std"), no_std)]

mod config;
mod fields;
mod indirect;
mod spring;

pub use config::SpringConfig;
pub use fields::Fields;
pub use indirect::{IndirectSpring, MatrixSpring};
pub use spring::Spring;
