// Copyright 2025 the Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use affinity_matrix::Matrix;
use kurbo::{Point, Size};

use crate::{GRID_BASE_SPACING, GridSteps, OriginScale, ViewportRect, rect};

/// Derived geometry for one camera + content + surface size combination.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewGeometry {
    /// Model → pixel matrix, see [`screen_from_model`](crate::screen_from_model).
    pub screen_from_model: Matrix,
    /// Pixel → model matrix.
    pub model_from_screen: Matrix,
    /// Model-space bounds of the visible surface.
    pub rect: ViewportRect,
    /// Grid spacing per axis, if both axes are usable.
    pub steps: Option<GridSteps>,
}

/// Cached visible-region and grid derivation.
///
/// `Viewport` owns the inputs (camera, content matrix, surface size and grid
/// base spacing) behind a single dirty flag. Setters that change a value mark
/// the cache dirty; [`Viewport::geometry`] recomputes only when dirty.
///
/// A content matrix that cannot be inverted has no geometry. That is logged
/// once at `warn` level each time the viewport becomes singular.
#[derive(Clone, Debug)]
pub struct Viewport {
    camera: OriginScale,
    content: Matrix,
    size: Size,
    base_spacing: f64,
    dirty: bool,
    geometry: Option<ViewGeometry>,
    singular: bool,
}

impl Viewport {
    /// Creates a viewport for a surface of `size` pixels with an identity
    /// camera and content matrix.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            camera: OriginScale::IDENTITY,
            content: Matrix::IDENTITY,
            size,
            base_spacing: GRID_BASE_SPACING,
            dirty: true,
            geometry: None,
            singular: false,
        }
    }

    /// Returns the camera.
    #[must_use]
    pub fn camera(&self) -> OriginScale {
        self.camera
    }

    /// Sets the camera.
    pub fn set_camera(&mut self, camera: OriginScale) {
        if self.camera != camera {
            self.camera = camera;
            self.dirty = true;
        }
    }

    /// Returns the content matrix.
    #[must_use]
    pub fn content(&self) -> Matrix {
        self.content
    }

    /// Sets the content matrix.
    pub fn set_content(&mut self, content: Matrix) {
        if self.content != content {
            self.content = content;
            self.dirty = true;
        }
    }

    /// Returns the surface size in pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Sets the surface size in pixels.
    pub fn set_size(&mut self, size: Size) {
        if self.size != size {
            self.size = size;
            self.dirty = true;
        }
    }

    /// Returns the grid base spacing.
    #[must_use]
    pub fn base_spacing(&self) -> f64 {
        self.base_spacing
    }

    /// Sets the grid spacing used at a scale of 1.
    pub fn set_base_spacing(&mut self, base_spacing: f64) {
        if self.base_spacing != base_spacing {
            self.base_spacing = base_spacing;
            self.dirty = true;
        }
    }

    /// Forces the next [`Viewport::geometry`] call to recompute.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Whether the cached geometry is stale.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The current geometry, recomputed first if any input changed.
    ///
    /// Returns `None` when the combined matrix is not invertible.
    pub fn geometry(&mut self) -> Option<&ViewGeometry> {
        if self.dirty {
            self.geometry = self.compute();
            self.dirty = false;
            match (self.geometry.is_some(), self.singular) {
                (false, false) => {
                    log::warn!(
                        "content matrix {:?} is not invertible; grid and axes disabled",
                        self.content
                    );
                    self.singular = true;
                }
                (true, true) => {
                    log::debug!("viewport is invertible again");
                    self.singular = false;
                }
                _ => {}
            }
        }
        self.geometry.as_ref()
    }

    /// The current model-space viewport rectangle.
    pub fn viewport_rect(&mut self) -> Option<ViewportRect> {
        self.geometry().map(|g| g.rect)
    }

    /// The geometry from the last recompute, without recomputing.
    ///
    /// May be stale; see [`Viewport::is_dirty`].
    #[must_use]
    pub fn cached_geometry(&self) -> Option<&ViewGeometry> {
        self.geometry.as_ref()
    }

    /// Model → pixel matrix for the current inputs. Never cached.
    #[must_use]
    pub fn screen_from_model(&self) -> Matrix {
        rect::screen_from_model(self.camera, self.content, self.size.width, self.size.height)
    }

    /// Maps a model-space point to pixels.
    #[must_use]
    pub fn model_to_view_point(&self, p: Point) -> Point {
        self.screen_from_model().transform_point(p)
    }

    /// Maps a pixel to model space, or `None` if the view is singular.
    #[must_use]
    pub fn view_to_model_point(&self, p: Point) -> Option<Point> {
        self.screen_from_model().inverse_transform_point(p)
    }

    /// Snapshot of the inputs and cached outputs, without recomputing.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            camera: self.camera,
            content: self.content,
            size: self.size,
            base_spacing: self.base_spacing,
            dirty: self.dirty,
            rect: self.geometry.map(|g| g.rect),
            steps: self.geometry.and_then(|g| g.steps),
        }
    }

    fn compute(&self) -> Option<ViewGeometry> {
        let screen_from_model = self.screen_from_model();
        let model_from_screen = screen_from_model.invert()?;
        let rect = rect::surface_bounds(model_from_screen, self.size.width, self.size.height);
        log::trace!("viewport recomputed: {rect:?}");
        Some(ViewGeometry {
            screen_from_model,
            model_from_screen,
            rect,
            steps: GridSteps::for_matrix(screen_from_model, self.base_spacing),
        })
    }
}

/// Debug snapshot of a [`Viewport`].
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Camera in use.
    pub camera: OriginScale,
    /// Content matrix in use.
    pub content: Matrix,
    /// Surface size in pixels.
    pub size: Size,
    /// Grid spacing at a scale of 1.
    pub base_spacing: f64,
    /// Whether the cached values are stale.
    pub dirty: bool,
    /// Last computed rectangle, if any.
    pub rect: Option<ViewportRect>,
    /// Last computed grid steps, if any.
    pub steps: Option<GridSteps>,
}

#[cfg(test)]
mod tests {
    use affinity_matrix::Matrix;
    use kurbo::{Point, Size};

    use super::Viewport;
    use crate::{GridSteps, OriginScale, ViewportRect};

    #[test]
    fn geometry_is_cached_until_an_input_changes() {
        let mut vp = Viewport::new(Size::new(200.0, 100.0));
        assert!(vp.is_dirty());
        let rect = vp.viewport_rect().unwrap();
        assert_eq!(
            rect,
            ViewportRect {
                top: -50.0,
                right: 100.0,
                bottom: 50.0,
                left: -100.0
            }
        );
        assert!(!vp.is_dirty());

        // Setting an equal value does not invalidate.
        vp.set_content(Matrix::IDENTITY);
        vp.set_size(Size::new(200.0, 100.0));
        assert!(!vp.is_dirty());

        vp.set_camera(OriginScale::new(Point::ORIGIN, 4.0));
        assert!(vp.is_dirty());
        let g = vp.geometry().unwrap();
        assert_eq!(g.steps, Some(GridSteps { x: 25.0, y: 25.0 }));
    }

    #[test]
    fn cached_geometry_does_not_recompute() {
        let mut vp = Viewport::new(Size::new(200.0, 100.0));
        assert!(vp.cached_geometry().is_none());
        let _ = vp.geometry();
        vp.set_size(Size::new(400.0, 100.0));
        let stale = vp.cached_geometry().map(|g| g.rect.width());
        assert_eq!(stale, Some(200.0));
        assert!(vp.is_dirty());
        assert_eq!(vp.viewport_rect().map(|r| r.width()), Some(400.0));
    }

    #[test]
    fn singular_content_disables_geometry_and_recovers() {
        let mut vp = Viewport::new(Size::new(100.0, 100.0));
        vp.set_content(Matrix::scale(0.0, 0.0));
        assert!(vp.geometry().is_none());
        assert!(vp.debug_info().rect.is_none());

        vp.set_content(Matrix::scale(2.0, 2.0));
        let g = vp.geometry().unwrap();
        assert_eq!(g.rect.width(), 50.0);
    }

    #[test]
    fn point_mapping_round_trips() {
        let mut vp = Viewport::new(Size::new(640.0, 480.0));
        vp.set_camera(OriginScale::new(Point::new(-30.0, 12.0), 1.5));
        vp.set_content(Matrix::compose(Matrix::rotate(0.7), Matrix::scale(2.0, 0.5)));
        let model = Point::new(12.0, -7.0);
        let view = vp.model_to_view_point(model);
        let back = vp.view_to_model_point(view).unwrap();
        assert!((back - model).hypot() < 1e-9, "{back:?}");
    }

    #[test]
    fn debug_info_reports_inputs() {
        let mut vp = Viewport::new(Size::new(10.0, 10.0));
        vp.set_base_spacing(50.0);
        let info = vp.debug_info();
        assert!(info.dirty);
        assert_eq!(info.base_spacing, 50.0);
        assert!(info.steps.is_none());
        let _ = vp.geometry();
        assert_eq!(vp.debug_info().steps, Some(GridSteps { x: 50.0, y: 50.0 }));
    }
}
