// Copyright 2025 the Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use affinity_matrix::Matrix;

/// Grid spacing, in model units, at a scale of 1.
pub const GRID_BASE_SPACING: f64 = 100.0;

/// Grid spacing for an axis drawn at `axis_scale` pixels per model unit.
///
/// Returns `base · 2^(−⌈log₂ axis_scale⌉)`: each time the axis is zoomed past
/// another power of two the spacing halves, so lines stay between `base / 2`
/// and `base` pixels apart on screen.
///
/// Returns `None` when either input is not a positive finite number, or when
/// the result would underflow to zero.
#[must_use]
pub fn grid_step(axis_scale: f64, base: f64) -> Option<f64> {
    if !(axis_scale > 0.0 && axis_scale.is_finite() && base > 0.0 && base.is_finite()) {
        return None;
    }
    // Smallest power of two >= axis_scale, found exactly by doubling/halving.
    let mut pow = 1.0_f64;
    while pow < axis_scale {
        pow *= 2.0;
    }
    while pow / 2.0 >= axis_scale {
        pow /= 2.0;
    }
    let step = base / pow;
    (step > 0.0 && step.is_finite()).then_some(step)
}

/// Model-space grid spacing along each axis.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSteps {
    /// Spacing between vertical lines (along model X).
    pub x: f64,
    /// Spacing between horizontal lines (along model Y).
    pub y: f64,
}

impl GridSteps {
    /// Steps for content drawn through `screen_from_model`.
    ///
    /// Each axis uses the on-screen length of its basis vector, so a
    /// non-uniform scale gets a different step per axis. Returns `None` if
    /// either basis vector is degenerate.
    #[must_use]
    pub fn for_matrix(screen_from_model: Matrix, base: f64) -> Option<Self> {
        let (sx, sy) = screen_from_model.axis_scales();
        Some(Self {
            x: grid_step(sx, base)?,
            y: grid_step(sy, base)?,
        })
    }
}

/// Rounds `value` down to a multiple of `step`.
#[must_use]
pub fn snap_down(value: f64, step: f64) -> f64 {
    (value / step).floor() * step
}

/// Rounds `value` up to a multiple of `step`.
#[must_use]
pub fn snap_up(value: f64, step: f64) -> f64 {
    (value / step).ceil() * step
}

/// Rounds `value` to the nearest multiple of `step`.
#[must_use]
pub fn snap(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

/// Number of decimal places needed to print every multiple of `step` exactly.
///
/// Power-of-two fractions of a round base terminate, so this is small in
/// practice; it is capped at 10.
#[must_use]
pub fn step_decimals(step: f64) -> usize {
    let mut scaled = step.abs();
    let mut decimals = 0;
    while decimals < 10 && (scaled - scaled.round()).abs() > 1e-9 * scaled.max(1.0) {
        scaled *= 10.0;
        decimals += 1;
    }
    decimals
}

/// Grid line positions covering `[min, max]`.
///
/// Yields every multiple of `step` from `snap_down(min, step)` up to and
/// including `snap_up(max, step)`. Positions are computed as `index · step`
/// from an integer index, so errors do not accumulate and the iterator ends
/// even where adjacent positions round to the same float. Empty if `step` is
/// not a positive finite number or `min > max`.
#[must_use]
pub fn grid_lines(min: f64, max: f64, step: f64) -> GridLines {
    if !(step > 0.0 && step.is_finite() && min <= max) {
        return GridLines {
            next: 0,
            remaining: 0,
            step: 1.0,
        };
    }
    #[expect(clippy::cast_possible_truncation, reason = "float to int casts saturate")]
    let (first, last) = ((min / step).floor() as i64, (max / step).ceil() as i64);
    GridLines {
        next: first,
        remaining: last.abs_diff(first).saturating_add(1),
        step,
    }
}

/// Iterator returned by [`grid_lines`].
#[derive(Clone, Debug)]
pub struct GridLines {
    next: i64,
    remaining: u64,
    step: f64,
}

impl GridLines {
    /// Spacing between consecutive positions.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Iterator for GridLines {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        // `+ 0.0` turns `-0.0` into `0.0`.
        let value = self.next as f64 * self.step + 0.0;
        self.next = self.next.wrapping_add(1);
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = usize::try_from(self.remaining).ok();
        (exact.unwrap_or(usize::MAX), exact)
    }
}
