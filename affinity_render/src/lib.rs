// Copyright 2025 the Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Affinity Render: frame loop and drawing for an animated content matrix.
//!
//! A [`Renderer`] owns a spring-animated content matrix, a camera, and a
//! cached viewport. The host feeds it input through a few mutators and calls
//! [`Renderer::tick`] once per display refresh with a [`RenderBackend`] and a
//! [`GlyphRenderer`]. The renderer draws only when something changed or the
//! animation is still moving.
//!
//! The backend interface is deliberately small:
//! - [`StateOp`]: set the transform, fill, or stroke, and save/restore.
//! - [`DrawOp`]: clear, fill or stroke a rectangle, stroke a line, fill a
//!   circle.
//!
//! [`RenderBackendExt`] adds a few shorthands on top. Rasterizing is left to
//! implementors; [`RecordingBackend`] records operations instead, which is
//! what tests and debugging tools want.
//!
//! ## Minimal example
//!
//! ```rust
//! use affinity_matrix::Matrix;
//! use affinity_render::{FrameOutcome, MonospaceGlyphs, RecordingBackend, Renderer};
//! use kurbo::Size;
//!
//! let mut renderer = Renderer::new(Size::new(640.0, 480.0));
//! let mut backend = RecordingBackend::new();
//! let mut glyphs = MonospaceGlyphs::new(7.0);
//!
//! renderer.set_target_matrix(Matrix::rotate(1.0));
//! let mut now = 0.0;
//! while let FrameOutcome::Drawn { animating: true } =
//!     renderer.tick(now, &mut backend, &mut glyphs)
//! {
//!     now += 16.0;
//! }
//! assert!(renderer.current_matrix().approx_eq(Matrix::rotate(1.0), 1e-9));
//! ```
//!
//! This crate is `no_std` when the `std` feature is disabled; enable `libm`
//! in that case.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod backend;
mod config;
mod recording;
mod renderer;

pub use backend::{DrawOp, GlyphRenderer, RenderBackend, RenderBackendExt, StateOp};
pub use config::{Layers, RenderConfig, Theme};
pub use recording::{Event, MonospaceGlyphs, RecordingBackend, StateSnapshot};
pub use renderer::{FrameOutcome, FrameState, MAX_GRID_LINES, REFERENCE_SHAPE, Renderer};
