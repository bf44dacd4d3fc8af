// Copyright 2025 the Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use affinity_matrix::Matrix;
use kurbo::{Point, Rect};

use crate::OriginScale;

/// Axis-aligned model-space bounds of the visible pixel area.
///
/// Y grows downward, as on screen, so `top <= bottom` and `left <= right`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportRect {
    /// Smallest visible model Y.
    pub top: f64,
    /// Largest visible model X.
    pub right: f64,
    /// Largest visible model Y.
    pub bottom: f64,
    /// Smallest visible model X.
    pub left: f64,
}

impl ViewportRect {
    /// Horizontal extent in model units.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Vertical extent in model units.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Whether `p` lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}

impl From<ViewportRect> for Rect {
    fn from(r: ViewportRect) -> Self {
        Self::new(r.left, r.top, r.right, r.bottom)
    }
}

impl From<Rect> for ViewportRect {
    fn from(r: Rect) -> Self {
        let r = r.abs();
        Self {
            top: r.y0,
            right: r.x1,
            bottom: r.y1,
            left: r.x0,
        }
    }
}

/// The full model → pixel matrix for a `width × height` surface.
///
/// The model origin is placed at the surface center before the camera applies:
/// `translate(w/2, h/2) ∘ camera ∘ content`.
#[must_use]
pub fn screen_from_model(camera: OriginScale, content: Matrix, width: f64, height: f64) -> Matrix {
    Matrix::compose_all([
        Matrix::translate(width / 2.0, height / 2.0),
        camera.to_matrix(),
        content,
    ])
}

/// Model-space bounds of a `width × height` pixel surface.
///
/// Maps the four pixel corners back through the inverse of
/// [`screen_from_model`] and returns their bounding box. Returns `None` if
/// the combined matrix is not invertible.
#[must_use]
pub fn canvas_space_viewport_rect(
    camera: OriginScale,
    content: Matrix,
    width: f64,
    height: f64,
) -> Option<ViewportRect> {
    let model_from_screen = screen_from_model(camera, content, width, height).invert()?;
    Some(surface_bounds(model_from_screen, width, height))
}

/// Bounding box of the four surface corners mapped through `model_from_screen`.
pub(crate) fn surface_bounds(model_from_screen: Matrix, width: f64, height: f64) -> ViewportRect {
    let [a, b, c, d] = [
        Point::new(0.0, 0.0),
        Point::new(width, 0.0),
        Point::new(0.0, height),
        Point::new(width, height),
    ]
    .map(|corner| model_from_screen.transform_point(corner));
    ViewportRect {
        top: a.y.min(b.y).min(c.y).min(d.y),
        right: a.x.max(b.x).max(c.x).max(d.x),
        bottom: a.y.max(b.y).max(c.y).max(d.y),
        left: a.x.min(b.x).min(c.x).min(d.x),
    }
}
