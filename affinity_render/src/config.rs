// Copyright 2025 the Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use affinity_spring::SpringConfig;
use affinity_view::GRID_BASE_SPACING;
use kurbo::Vec2;
use peniko::Color;

bitflags::bitflags! {
    /// Which parts of the scene a [`Renderer`](crate::Renderer) draws.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct Layers: u8 {
        /// Grid lines at the adaptive step.
        const GRID   = 0b0000_0001;
        /// The two model axes.
        const AXES   = 0b0000_0010;
        /// Coordinate labels along the axes.
        const LABELS = 0b0000_0100;
        /// The reference square.
        const SHAPE  = 0b0000_1000;
        /// The model origin marker.
        const ORIGIN = 0b0001_0000;
    }
}

impl Default for Layers {
    fn default() -> Self {
        Self::all()
    }
}

/// Colors and line widths.
///
/// Widths are in pixels except `shape_stroke_width`, which is in model units
/// and so scales with the content.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Theme {
    /// Surface clear color.
    pub background: Color,
    /// Grid line color.
    pub grid: Color,
    /// Grid line width.
    pub grid_width: f64,
    /// Axis line color.
    pub axis: Color,
    /// Axis line width.
    pub axis_width: f64,
    /// Label text color.
    pub label: Color,
    /// Reference shape fill.
    pub shape_fill: Color,
    /// Reference shape outline.
    pub shape_stroke: Color,
    /// Reference shape outline width.
    pub shape_stroke_width: f64,
    /// Origin marker color.
    pub origin: Color,
    /// Origin marker radius.
    pub origin_radius: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::TRANSPARENT,
            grid: Color::from_rgb8(0x44, 0x44, 0x44),
            grid_width: 0.5,
            axis: Color::from_rgb8(0x44, 0x44, 0x44),
            axis_width: 2.0,
            label: Color::from_rgb8(0x88, 0x88, 0x88),
            shape_fill: Color::from_rgb8(0xff, 0x00, 0x00),
            shape_stroke: Color::from_rgb8(0x00, 0x00, 0xff),
            shape_stroke_width: 1.0,
            origin: Color::from_rgb8(69, 133, 136),
            origin_radius: 5.0,
        }
    }
}

/// Configuration of a [`Renderer`](crate::Renderer).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderConfig {
    /// Tuning of the matrix spring.
    pub spring: SpringConfig,
    /// Frames arriving more than this many milliseconds after the previous
    /// tick are discarded, so a backgrounded surface does not jump.
    pub max_frame_delta_ms: f64,
    /// Grid spacing in model units at a scale of 1.
    pub grid_base_spacing: f64,
    /// Camera zoom is kept within `[min_scale, max_scale]`.
    pub min_scale: f64,
    /// See `min_scale`.
    pub max_scale: f64,
    /// Parts of the scene to draw.
    pub layers: Layers,
    /// Colors and widths.
    pub theme: Theme,
    /// Offset in pixels from a grid line's axis crossing to its label.
    pub label_offset: Vec2,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            spring: SpringConfig::DEFAULT,
            max_frame_delta_ms: 2000.0,
            grid_base_spacing: GRID_BASE_SPACING,
            min_scale: 0.01,
            max_scale: 100.0,
            layers: Layers::default(),
            theme: Theme::default(),
            label_offset: Vec2::new(4.0, 4.0),
        }
    }
}
