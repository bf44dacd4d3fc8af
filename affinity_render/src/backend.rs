// Copyright 2025 the Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use affinity_matrix::Matrix;
use kurbo::{Circle, Line, Rect};
use peniko::Color;

/// State operations that mutate the current drawing state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StateOp {
    /// Set the current transform, replacing the previous one.
    SetTransform(Matrix),
    /// Set the color used by fill operations.
    SetFill(Color),
    /// Set the color and width used by stroke operations.
    ///
    /// The width is in the units of the transform in effect when the stroke
    /// is drawn.
    SetStroke {
        /// Stroke color.
        color: Color,
        /// Stroke width.
        width: f64,
    },
    /// Push a copy of the current state.
    ///
    /// Must be balanced by a later [`StateOp::Restore`].
    Save,
    /// Pop the most recently saved state and make it current.
    Restore,
}

/// Draw operations that produce pixels given the current state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill the whole surface with a color, ignoring the transform.
    Clear(Color),
    /// Fill a rectangle with the fill color.
    FillRect(Rect),
    /// Outline a rectangle with the stroke.
    StrokeRect(Rect),
    /// Draw a line segment with the stroke.
    StrokeLine(Line),
    /// Fill a circle with the fill color.
    FillCircle(Circle),
}

/// A rasterizer that accepts drawing operations.
///
/// Implementations draw each operation under the state established by the
/// state operations that preceded it.
pub trait RenderBackend {
    /// Apply a state operation.
    fn state(&mut self, op: StateOp);

    /// Apply a draw operation.
    fn draw(&mut self, op: DrawOp);
}

/// Convenience helpers for [`RenderBackend`] callers.
///
/// This is separate from [`RenderBackend`] so that methods can accept closures
/// without complicating trait object usage (`&mut dyn RenderBackend`).
pub trait RenderBackendExt: RenderBackend {
    /// Run `f` between a [`StateOp::Save`] and a [`StateOp::Restore`].
    ///
    /// Note: if `f` panics, the state will not be restored.
    #[inline]
    fn with_saved<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.state(StateOp::Save);
        let out = f(self);
        self.state(StateOp::Restore);
        out
    }

    /// Shorthand for `state(StateOp::SetTransform(m))`.
    #[inline]
    fn set_transform(&mut self, m: Matrix) {
        self.state(StateOp::SetTransform(m));
    }

    /// Shorthand for `state(StateOp::SetFill(color))`.
    #[inline]
    fn set_fill(&mut self, color: Color) {
        self.state(StateOp::SetFill(color));
    }

    /// Shorthand for `state(StateOp::SetStroke { color, width })`.
    #[inline]
    fn set_stroke(&mut self, color: Color, width: f64) {
        self.state(StateOp::SetStroke { color, width });
    }

    /// Shorthand for `draw(DrawOp::StrokeLine(line))`.
    #[inline]
    fn stroke_line(&mut self, line: Line) {
        self.draw(DrawOp::StrokeLine(line));
    }
}

impl<B: RenderBackend + ?Sized> RenderBackendExt for B {}

/// A text service that can draw a string with the backend.
///
/// Text is drawn starting at the origin of the current transform. The return
/// value is the advance width in the same units, so callers can lay out
/// consecutive strings.
pub trait GlyphRenderer<B: ?Sized> {
    /// Draws `text` and returns its advance width.
    fn render_str(&mut self, backend: &mut B, text: &str) -> f64;
}
