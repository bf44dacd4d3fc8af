// Copyright 2025 the Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A backend that records instead of rasterizing.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use affinity_matrix::Matrix;
use peniko::Color;

use crate::{DrawOp, GlyphRenderer, RenderBackend, StateOp};

/// Snapshot of the drawing state inside a [`RecordingBackend`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StateSnapshot {
    /// Current transform.
    pub transform: Matrix,
    /// Current fill color, if set.
    pub fill: Option<Color>,
    /// Current stroke color, if set.
    pub stroke: Option<Color>,
    /// Current stroke width.
    pub stroke_width: f64,
    /// Number of saves not yet restored.
    pub save_depth: u32,
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self {
            transform: Matrix::IDENTITY,
            fill: None,
            stroke: None,
            stroke_width: 1.0,
            save_depth: 0,
        }
    }
}

/// Event recorded by [`RecordingBackend`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// State operation and the resulting state snapshot.
    State {
        /// State operation that was applied.
        op: StateOp,
        /// Snapshot after applying the state operation.
        state: StateSnapshot,
    },
    /// Draw operation and the state snapshot used for drawing.
    Draw {
        /// Draw operation that was applied.
        op: DrawOp,
        /// Snapshot at the time of drawing.
        state: StateSnapshot,
    },
}

/// Non-rasterizing [`RenderBackend`] for tests and debugging.
///
/// Tracks the current state, including a save/restore stack, and records an
/// [`Event`] with a state snapshot for every operation it receives. An
/// unbalanced [`StateOp::Restore`] is recorded but otherwise ignored.
#[derive(Clone, Debug, Default)]
pub struct RecordingBackend {
    events: Vec<Event>,
    state: StateSnapshot,
    saved: Vec<StateSnapshot>,
}

impl RecordingBackend {
    /// Creates an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events in the order they were applied.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Draw operations with their snapshots, in order.
    pub fn draws(&self) -> impl Iterator<Item = (&DrawOp, &StateSnapshot)> + '_ {
        self.events.iter().filter_map(|e| match e {
            Event::Draw { op, state } => Some((op, state)),
            Event::State { .. } => None,
        })
    }

    /// The current state.
    #[must_use]
    pub fn current_state(&self) -> &StateSnapshot {
        &self.state
    }

    /// Clears recorded events but keeps the current state.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

impl RenderBackend for RecordingBackend {
    fn state(&mut self, op: StateOp) {
        match op {
            StateOp::SetTransform(m) => self.state.transform = m,
            StateOp::SetFill(color) => self.state.fill = Some(color),
            StateOp::SetStroke { color, width } => {
                self.state.stroke = Some(color);
                self.state.stroke_width = width;
            }
            StateOp::Save => {
                self.saved.push(self.state);
                self.state.save_depth += 1;
            }
            StateOp::Restore => {
                if let Some(saved) = self.saved.pop() {
                    self.state = saved;
                }
            }
        }
        self.events.push(Event::State {
            op,
            state: self.state,
        });
    }

    fn draw(&mut self, op: DrawOp) {
        self.events.push(Event::Draw {
            op,
            state: self.state,
        });
    }
}

/// A [`GlyphRenderer`] that draws nothing and gives every character the same
/// advance.
///
/// Rendered strings are kept, with the transform they were drawn under when
/// used with a [`RecordingBackend`].
#[derive(Clone, Debug)]
pub struct MonospaceGlyphs {
    advance: f64,
    rendered: Vec<(String, Matrix)>,
}

impl MonospaceGlyphs {
    /// Creates a glyph service with `advance` units per character.
    #[must_use]
    pub fn new(advance: f64) -> Self {
        Self {
            advance,
            rendered: Vec::new(),
        }
    }

    /// Strings rendered so far with their transforms.
    #[must_use]
    pub fn rendered(&self) -> &[(String, Matrix)] {
        &self.rendered
    }

    /// Forgets rendered strings.
    pub fn clear(&mut self) {
        self.rendered.clear();
    }
}

impl GlyphRenderer<RecordingBackend> for MonospaceGlyphs {
    fn render_str(&mut self, backend: &mut RecordingBackend, text: &str) -> f64 {
        self.rendered.push((text.to_string(), backend.current_state().transform));
        self.advance * text.chars().count() as f64
    }
}

#[cfg(test)]
mod tests {
    use affinity_matrix::Matrix;
    use kurbo::{Line, Rect};
    use peniko::Color;

    use super::{Event, MonospaceGlyphs, RecordingBackend};
    use crate::{DrawOp, GlyphRenderer, RenderBackend, RenderBackendExt, StateOp};

    #[test]
    fn draws_carry_the_state_in_effect() {
        let mut backend = RecordingBackend::new();
        backend.set_transform(Matrix::scale(2.0, 2.0));
        backend.set_fill(Color::WHITE);
        backend.draw(DrawOp::FillRect(Rect::new(0.0, 0.0, 1.0, 1.0)));

        let (op, state) = backend.draws().next().unwrap();
        assert_eq!(*op, DrawOp::FillRect(Rect::new(0.0, 0.0, 1.0, 1.0)));
        assert_eq!(state.transform, Matrix::scale(2.0, 2.0));
        assert_eq!(state.fill, Some(Color::WHITE));
        assert_eq!(backend.events().len(), 3);
    }

    #[test]
    fn save_and_restore_nest() {
        let mut backend = RecordingBackend::new();
        backend.set_stroke(Color::BLACK, 2.0);
        backend.with_saved(|b| {
            b.set_stroke(Color::WHITE, 0.5);
            assert_eq!(b.current_state().save_depth, 1);
            b.stroke_line(Line::new((0.0, 0.0), (1.0, 1.0)));
        });
        assert_eq!(backend.current_state().stroke, Some(Color::BLACK));
        assert_eq!(backend.current_state().stroke_width, 2.0);
        assert_eq!(backend.current_state().save_depth, 0);

        let (_, state) = backend.draws().next().unwrap();
        assert_eq!(state.stroke_width, 0.5);
    }

    #[test]
    fn unbalanced_restore_is_recorded_and_ignored() {
        let mut backend = RecordingBackend::new();
        backend.set_fill(Color::BLACK);
        backend.state(StateOp::Restore);
        assert_eq!(backend.current_state().fill, Some(Color::BLACK));
        assert!(matches!(
            backend.events().last(),
            Some(Event::State {
                op: StateOp::Restore,
                ..
            })
        ));
        backend.clear_events();
        assert!(backend.events().is_empty());
        assert_eq!(backend.current_state().fill, Some(Color::BLACK));
    }

    #[test]
    fn monospace_glyphs_record_text_and_transform() {
        let mut backend = RecordingBackend::new();
        let mut glyphs = MonospaceGlyphs::new(6.0);
        backend.set_transform(Matrix::translate(10.0, 20.0));
        let advance = glyphs.render_str(&mut backend, "-12.5");
        assert_eq!(advance, 30.0);
        assert_eq!(glyphs.rendered()[0].0, "-12.5");
        assert_eq!(glyphs.rendered()[0].1, Matrix::translate(10.0, 20.0));
    }
}
