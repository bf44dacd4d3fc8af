// Copyright 2025 the Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Affinity Stack: an editable list of 2D transforms.
//!
//! A [`TransformStack`] holds an ordered, never-empty list of [`Transform`]s,
//! each tagged with a [`TransformId`] handed out by that stack. It offers the
//! edits a transform editor needs (append, insert before an entry, replace,
//! remove, swap) and derives both the fully composed matrix and every
//! intermediate composition, for drawing how each step contributes.
//!
//! ```rust
//! use core::f64::consts::FRAC_PI_2;
//! use kurbo::Point;
//! use affinity_stack::{Transform, TransformStack};
//!
//! let mut stack = TransformStack::new();
//! stack.update(0, Transform::Translate { x: 10.0, y: 0.0 }).unwrap();
//! stack.push(Transform::Rotate { angle: FRAC_PI_2 });
//!
//! // The last entry applies first, so the origin only sees the translation.
//! let p = stack.composed().transform_point(Point::ORIGIN);
//! assert!((p.x - 10.0).abs() < 1e-9 && p.y.abs() < 1e-9);
//! assert_eq!(stack.intermediates().count(), 2);
//! ```
//!
//! Index and id errors are reported as [`StackError`].
//!
//! This crate is `no_std`.

#![cfg_attr(not(feature = "std"), no_std)]

mod error;
mod stack;
mod transform;

pub use error::StackError;
pub use stack::{StackEntry, TransformId, TransformStack};
pub use transform::Transform;
