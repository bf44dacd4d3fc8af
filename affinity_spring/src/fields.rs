// Copyright 2025 the Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use affinity_matrix::PolarMatrix;
use kurbo::{Point, Vec2};

/// A fixed-shape record of scalar channels that a [`Spring`](crate::Spring)
/// can drive.
///
/// Every value of the type has exactly [`Fields::COUNT`] channels, addressed
/// by index `0..COUNT`. Indices outside that range are a logic error and may
/// panic.
pub trait Fields: Copy {
    /// Number of channels.
    const COUNT: usize;

    /// A record with every channel set to zero.
    fn zeroed() -> Self;

    /// Reads channel `index`.
    fn channel(&self, index: usize) -> f64;

    /// Mutable access to channel `index`.
    fn channel_mut(&mut self, index: usize) -> &mut f64;

    /// Whether channel `index` holds an angle in radians.
    ///
    /// Angular channels get a continuity correction whenever an indirect
    /// spring receives a new target, see
    /// [`correct_angle`](affinity_matrix::correct_angle).
    fn is_angular(index: usize) -> bool {
        let _ = index;
        false
    }
}

impl Fields for f64 {
    const COUNT: usize = 1;

    fn zeroed() -> Self {
        0.0
    }

    fn channel(&self, index: usize) -> f64 {
        debug_assert_eq!(index, 0, "f64 has a single channel");
        *self
    }

    fn channel_mut(&mut self, index: usize) -> &mut f64 {
        debug_assert_eq!(index, 0, "f64 has a single channel");
        self
    }
}

impl<const N: usize> Fields for [f64; N] {
    const COUNT: usize = N;

    fn zeroed() -> Self {
        [0.0; N]
    }

    fn channel(&self, index: usize) -> f64 {
        self[index]
    }

    fn channel_mut(&mut self, index: usize) -> &mut f64 {
        &mut self[index]
    }
}

impl Fields for Point {
    const COUNT: usize = 2;

    fn zeroed() -> Self {
        Self::ORIGIN
    }

    fn channel(&self, index: usize) -> f64 {
        if index == 0 { self.x } else { self.y }
    }

    fn channel_mut(&mut self, index: usize) -> &mut f64 {
        if index == 0 { &mut self.x } else { &mut self.y }
    }
}

impl Fields for Vec2 {
    const COUNT: usize = 2;

    fn zeroed() -> Self {
        Self::ZERO
    }

    fn channel(&self, index: usize) -> f64 {
        if index == 0 { self.x } else { self.y }
    }

    fn channel_mut(&mut self, index: usize) -> &mut f64 {
        if index == 0 { &mut self.x } else { &mut self.y }
    }
}

/// Channels, in order: `x_angle`, `x_radius`, `y_angle`, `y_radius`, `tx`, `ty`.
impl Fields for PolarMatrix {
    const COUNT: usize = 6;

    fn zeroed() -> Self {
        Self::default()
    }

    fn channel(&self, index: usize) -> f64 {
        match index {
            0 => self.x_angle,
            1 => self.x_radius,
            2 => self.y_angle,
            3 => self.y_radius,
            4 => self.tx,
            _ => self.ty,
        }
    }

    fn channel_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x_angle,
            1 => &mut self.x_radius,
            2 => &mut self.y_angle,
            3 => &mut self.y_radius,
            4 => &mut self.tx,
            _ => &mut self.ty,
        }
    }

    fn is_angular(index: usize) -> bool {
        matches!(index, 0 | 2)
    }
}
