// Copyright 2025 the Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use affinity_matrix::Matrix;
use kurbo::{Point, Vec2};

/// Pan + uniform zoom camera.
///
/// The camera maps model space into view space as `p ↦ origin + scale·p` and
/// is applied outside (after) the content matrix. It never rotates or shears.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OriginScale {
    /// Where the model origin lands, relative to the center of the view.
    pub origin: Point,
    /// Uniform zoom factor.
    pub scale: f64,
}

impl OriginScale {
    /// No pan, no zoom.
    pub const IDENTITY: Self = Self {
        origin: Point::ORIGIN,
        scale: 1.0,
    };

    /// Creates a camera.
    #[must_use]
    pub const fn new(origin: Point, scale: f64) -> Self {
        Self { origin, scale }
    }

    /// The camera as a matrix, `(s, 0, 0, s, ox, oy)`.
    #[must_use]
    pub const fn to_matrix(self) -> Matrix {
        Matrix::from_components(self.scale, 0.0, 0.0, self.scale, self.origin.x, self.origin.y)
    }

    /// Returns a camera panned by `delta` in view space.
    #[must_use]
    pub fn pan_by(self, delta: Vec2) -> Self {
        Self {
            origin: self.origin + delta,
            ..self
        }
    }

    /// Returns a camera zoomed by `factor` around `anchor`.
    ///
    /// `anchor` is in the same space as `origin`, and stays fixed: the model
    /// point under it before the zoom is still under it afterwards. A
    /// non-positive or non-finite factor leaves the camera unchanged.
    #[must_use]
    pub fn zoom_about(self, anchor: Point, factor: f64) -> Self {
        if !(factor > 0.0 && factor.is_finite()) {
            return self;
        }
        Self {
            origin: anchor - (anchor - self.origin) * factor,
            scale: self.scale * factor,
        }
    }

    /// Returns a camera whose scale is clamped into `[min, max]`.
    ///
    /// The origin is left alone, so clamping after [`OriginScale::zoom_about`]
    /// may shift the anchor slightly.
    #[must_use]
    pub fn clamp_scale(self, min: f64, max: f64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            scale: self.scale.clamp(min, max),
            ..self
        }
    }
}

impl Default for OriginScale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<OriginScale> for Matrix {
    fn from(camera: OriginScale) -> Self {
        camera.to_matrix()
    }
}

/// Zoom factor for a wheel gesture with vertical delta `delta_y` (pixels).
///
/// Scrolling up (negative delta) zooms in; 100 pixels of downward scroll
/// would collapse the view entirely, so callers should clamp the resulting
/// scale.
#[must_use]
pub fn wheel_zoom_factor(delta_y: f64) -> f64 {
    1.0 - delta_y / 100.0
}
