// Copyright 2025 the Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Affinity View: camera, visible region, and adaptive grid.
//!
//! This crate turns a camera ([`OriginScale`]), an arbitrary affine content
//! [`Matrix`](affinity_matrix::Matrix), and a pixel surface size into:
//! - The model‑space rectangle that is visible on the surface
//!   ([`canvas_space_viewport_rect`]).
//! - A grid spacing per axis that adapts to the current zoom in powers of two
//!   ([`grid_step`], [`GridSteps`]), plus helpers to enumerate grid lines.
//! - A [`Viewport`] that caches both behind a single dirty flag.
//!
//! It does **not** draw anything or decode input events. The model origin is
//! placed at the center of the surface, then the camera applies, then the
//! content matrix:
//!
//! `screen_from_model = translate(w/2, h/2) ∘ camera ∘ content`
//!
//! ## Minimal example
//!
//! ```rust
//! use affinity_matrix::Matrix;
//! use affinity_view::{GRID_BASE_SPACING, OriginScale, canvas_space_viewport_rect, grid_step};
//!
//! let rect = canvas_space_viewport_rect(OriginScale::IDENTITY, Matrix::IDENTITY, 200.0, 100.0)
//!     .unwrap();
//! assert_eq!((rect.left, rect.right, rect.top, rect.bottom), (-100.0, 100.0, -50.0, 50.0));
//!
//! // Zoomed in 4x, grid lines are a quarter as far apart in model units.
//! assert_eq!(grid_step(4.0, GRID_BASE_SPACING), Some(25.0));
//! ```
//!
//! ## Wheel input
//!
//! Translating wheel events is left to the caller, but [`wheel_zoom_factor`]
//! and [`OriginScale::zoom_about`] capture the usual pinch/ctrl‑wheel
//! behavior:
//!
//! ```rust
//! use kurbo::Point;
//! use affinity_view::{OriginScale, wheel_zoom_factor};
//!
//! let camera = OriginScale::IDENTITY
//!     .zoom_about(Point::new(40.0, 30.0), wheel_zoom_factor(-20.0))
//!     .clamp_scale(0.1, 10.0);
//! assert!((camera.scale - 1.2).abs() < 1e-12);
//! ```
//!
//! This crate is `no_std` when the `std` feature is disabled; enable `libm`
//! in that case.

#![cfg_attr(not(feature = "std"), no_std)]

mod camera;
mod grid;
mod rect;
mod viewport;

pub use camera::{OriginScale, wheel_zoom_factor};
pub use grid::{
    GRID_BASE_SPACING, GridLines, GridSteps, grid_lines, grid_step, snap, snap_down, snap_up,
    step_decimals,
};
pub use rect::{ViewportRect, canvas_space_viewport_rect, screen_from_model};
pub use viewport::{ViewGeometry, Viewport, ViewportDebugInfo};
