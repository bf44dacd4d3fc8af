// Copyright 2025 the Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;

use affinity_matrix::Matrix;
use affinity_spring::MatrixSpring;
use affinity_view::{
    GridLines, GridSteps, OriginScale, ViewGeometry, Viewport, ViewportRect, grid_lines,
    step_decimals,
};
use kurbo::{Circle, Line, Point, Rect, Size, Vec2};

use crate::{DrawOp, GlyphRenderer, Layers, RenderBackend, RenderBackendExt, RenderConfig};

/// The reference shape, in model units.
pub const REFERENCE_SHAPE: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

/// Upper bound on grid lines drawn per axis in one frame.
///
/// Past this the step is doubled until the lines fit, which thins the grid
/// evenly across the whole region. Only reachable with heavily skewed
/// content, where the visible region is a long sliver of a very large
/// bounding box.
pub const MAX_GRID_LINES: usize = 512;

/// Whether a [`Renderer`] has work to do on the next tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FrameState {
    /// Nothing changed since the last drawn frame.
    #[default]
    Idle,
    /// An input changed or the animation is still running.
    Dirty,
}

/// What a call to [`Renderer::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrameOutcome {
    /// Nothing to draw.
    Idle,
    /// The frame arrived too long after the previous one and was skipped.
    ///
    /// The renderer stays dirty, so the next tick draws.
    Discarded,
    /// A frame was drawn.
    Drawn {
        /// Whether the matrix is still moving toward its target.
        animating: bool,
    },
}

/// Frame-driven orchestrator that animates a content matrix and draws it.
///
/// A `Renderer` owns a [`MatrixSpring`], a camera, and a cached [`Viewport`].
/// Mutators record the new inputs and mark the renderer [`FrameState::Dirty`];
/// nothing is drawn until the host calls [`Renderer::tick`], typically once
/// per display refresh.
///
/// Each drawn frame is emitted, in order, as: a clear; grid lines; the two
/// axes; coordinate labels; the reference square under the content
/// transform; and the origin marker. Grid lines, axes, and labels are mapped
/// to pixels and drawn under the identity transform so their widths stay
/// constant. When the combined matrix is singular they are skipped, while the
/// square and the marker still draw.
#[derive(Clone, Debug)]
pub struct Renderer {
    config: RenderConfig,
    spring: MatrixSpring,
    viewport: Viewport,
    state: FrameState,
    last_tick: Option<f64>,
}

impl Renderer {
    /// Creates a renderer for a surface of `size` pixels with the default
    /// configuration.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self::with_config(size, RenderConfig::default())
    }

    /// Creates a renderer for a surface of `size` pixels.
    ///
    /// The content starts at rest on the identity matrix and the first tick
    /// draws.
    #[must_use]
    pub fn with_config(size: Size, config: RenderConfig) -> Self {
        let mut viewport = Viewport::new(size);
        viewport.set_base_spacing(config.grid_base_spacing);
        Self {
            spring: MatrixSpring::matrix_with_config(Matrix::IDENTITY, config.spring),
            config,
            viewport,
            state: FrameState::Dirty,
            last_tick: None,
        }
    }

    /// Sets the matrix the content animates toward.
    pub fn set_target_matrix(&mut self, matrix: Matrix) {
        debug_assert!(matrix.is_finite(), "target matrix must be finite: {matrix:?}");
        self.spring.set(&matrix);
        self.mark_dirty();
    }

    /// Jumps the content to `matrix` without animating.
    pub fn snap_matrix(&mut self, matrix: Matrix) {
        debug_assert!(matrix.is_finite(), "snapped matrix must be finite: {matrix:?}");
        self.spring.snap(&matrix);
        self.mark_dirty();
    }

    /// Replaces the camera.
    pub fn set_camera(&mut self, camera: OriginScale) {
        self.viewport.set_camera(camera);
        self.viewport.invalidate();
        self.mark_dirty();
    }

    /// Records a new surface size in pixels.
    pub fn notify_resize(&mut self, size: Size) {
        self.viewport.set_size(size);
        self.viewport.invalidate();
        self.mark_dirty();
    }

    /// Pans the camera by `delta` pixels.
    pub fn pan_by(&mut self, delta: Vec2) {
        let camera = self.viewport.camera().pan_by(delta);
        self.set_camera(camera);
    }

    /// Zooms the camera by `factor` around `anchor`, a pixel position on the
    /// surface.
    ///
    /// The resulting scale is kept within the configured
    /// `[min_scale, max_scale]` by shrinking the factor, so the anchor stays
    /// fixed even when clamped. Non-positive or non-finite factors are
    /// ignored.
    pub fn zoom_about(&mut self, anchor: Point, factor: f64) {
        if !(factor > 0.0 && factor.is_finite()) {
            return;
        }
        let camera = self.viewport.camera();
        let (min, max) = if self.config.min_scale <= self.config.max_scale {
            (self.config.min_scale, self.config.max_scale)
        } else {
            (self.config.max_scale, self.config.min_scale)
        };
        let scale = (camera.scale * factor).max(min).min(max);
        let factor = scale / camera.scale;
        // The camera sits after the half-surface offset.
        let size = self.viewport.size();
        let anchor = anchor - Vec2::new(size.width / 2.0, size.height / 2.0);
        self.set_camera(camera.zoom_about(anchor, factor));
    }

    /// Replaces the configuration and redraws on the next tick.
    ///
    /// The spring keeps its position and velocity under the new tuning.
    pub fn set_config(&mut self, config: RenderConfig) {
        self.spring.set_config(config.spring);
        self.viewport.set_base_spacing(config.grid_base_spacing);
        self.config = config;
        self.mark_dirty();
    }

    /// Advances the animation to `now_ms` and draws if anything changed.
    ///
    /// `now_ms` is a monotonic timestamp in milliseconds. The first tick
    /// integrates over zero time. A tick more than
    /// [`RenderConfig::max_frame_delta_ms`] after the previous one is
    /// discarded without integrating or drawing.
    pub fn tick<B, G>(&mut self, now_ms: f64, backend: &mut B, glyphs: &mut G) -> FrameOutcome
    where
        B: RenderBackend + ?Sized,
        G: GlyphRenderer<B> + ?Sized,
    {
        let elapsed = self.last_tick.map_or(0.0, |last| (now_ms - last).max(0.0));
        self.last_tick = Some(now_ms);

        if self.state == FrameState::Idle {
            return FrameOutcome::Idle;
        }
        if elapsed > self.config.max_frame_delta_ms {
            log::debug!(
                "discarding frame: {elapsed} ms since the previous tick exceeds {} ms",
                self.config.max_frame_delta_ms
            );
            return FrameOutcome::Discarded;
        }

        let animating = self.spring.update(elapsed);
        self.viewport.set_content(self.spring.value());
        self.draw(backend, glyphs);
        log::trace!("drew frame at {now_ms} ms (animating: {animating})");

        if !animating {
            log::debug!("frame state: dirty -> idle");
            self.state = FrameState::Idle;
        }
        FrameOutcome::Drawn { animating }
    }

    /// The interpolated content matrix.
    #[must_use]
    pub fn current_matrix(&self) -> Matrix {
        self.spring.value()
    }

    /// The matrix the content is animating toward.
    #[must_use]
    pub fn target_matrix(&self) -> Matrix {
        self.spring.target()
    }

    /// The visible model-space rectangle for the current inputs, or `None` if
    /// the view is singular.
    ///
    /// Recomputes the cached viewport if an input changed since the last
    /// frame; [`Renderer::cached_viewport_rect`] reads without recomputing.
    pub fn viewport_rect(&mut self) -> Option<ViewportRect> {
        self.viewport.viewport_rect()
    }

    /// The visible rectangle as last computed, usually by the last drawn
    /// frame. `None` if nothing has been computed yet or the view was
    /// singular.
    #[must_use]
    pub fn cached_viewport_rect(&self) -> Option<ViewportRect> {
        self.viewport.cached_geometry().map(|g| g.rect)
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> OriginScale {
        self.viewport.camera()
    }

    /// Whether the next tick has work to do.
    #[must_use]
    pub fn state(&self) -> FrameState {
        self.state
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// The cached viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    fn mark_dirty(&mut self) {
        if self.state == FrameState::Idle {
            log::debug!("frame state: idle -> dirty");
            self.state = FrameState::Dirty;
        }
    }

    fn draw<B, G>(&mut self, backend: &mut B, glyphs: &mut G)
    where
        B: RenderBackend + ?Sized,
        G: GlyphRenderer<B> + ?Sized,
    {
        let layers = self.config.layers;
        let theme = self.config.theme;
        let screen_from_model = self.viewport.screen_from_model();

        backend.set_transform(Matrix::IDENTITY);
        backend.draw(DrawOp::Clear(theme.background));

        if let Some(geometry) = self.viewport.geometry().copied() {
            if layers.contains(Layers::GRID)
                && let Some(steps) = geometry.steps
            {
                self.draw_grid(backend, &geometry, steps);
            }
            if layers.contains(Layers::AXES) {
                self.draw_axes(backend, &geometry);
            }
            if layers.contains(Layers::LABELS)
                && let Some(steps) = geometry.steps
            {
                self.draw_labels(backend, glyphs, &geometry, steps);
            }
        }

        if layers.contains(Layers::SHAPE) {
            backend.with_saved(|b| {
                b.set_transform(screen_from_model);
                b.set_fill(theme.shape_fill);
                b.set_stroke(theme.shape_stroke, theme.shape_stroke_width);
                b.draw(DrawOp::FillRect(REFERENCE_SHAPE));
                b.draw(DrawOp::StrokeRect(REFERENCE_SHAPE));
            });
        }

        if layers.contains(Layers::ORIGIN) {
            // Drawn in pixels so the marker stays round under any content.
            let center = screen_from_model.transform_point(Point::ORIGIN);
            backend.with_saved(|b| {
                b.set_transform(Matrix::IDENTITY);
                b.set_fill(theme.origin);
                b.draw(DrawOp::FillCircle(Circle::new(center, theme.origin_radius)));
            });
        }
    }

    fn draw_grid<B>(&self, backend: &mut B, geometry: &ViewGeometry, steps: GridSteps)
    where
        B: RenderBackend + ?Sized,
    {
        let theme = &self.config.theme;
        let m = geometry.screen_from_model;
        let r = geometry.rect;
        backend.with_saved(|b| {
            b.set_transform(Matrix::IDENTITY);
            b.set_stroke(theme.grid, theme.grid_width);
            for x in capped_lines(r.left, r.right, steps.x) {
                b.stroke_line(model_line(m, (x, r.top), (x, r.bottom)));
            }
            for y in capped_lines(r.top, r.bottom, steps.y) {
                b.stroke_line(model_line(m, (r.left, y), (r.right, y)));
            }
        });
    }

    fn draw_axes<B>(&self, backend: &mut B, geometry: &ViewGeometry)
    where
        B: RenderBackend + ?Sized,
    {
        let theme = &self.config.theme;
        let m = geometry.screen_from_model;
        let r = geometry.rect;
        backend.with_saved(|b| {
            b.set_transform(Matrix::IDENTITY);
            b.set_stroke(theme.axis, theme.axis_width);
            b.stroke_line(model_line(m, (r.left, 0.0), (r.right, 0.0)));
            b.stroke_line(model_line(m, (0.0, r.top), (0.0, r.bottom)));
        });
    }

    /// Labels each grid line where it crosses the opposite axis.
    ///
    /// The origin is labeled once, by the X axis. An X label that would start
    /// inside the previous one, measured along the axis on screen, is
    /// skipped.
    fn draw_labels<B, G>(
        &self,
        backend: &mut B,
        glyphs: &mut G,
        geometry: &ViewGeometry,
        steps: GridSteps,
    ) where
        B: RenderBackend + ?Sized,
        G: GlyphRenderer<B> + ?Sized,
    {
        let theme = &self.config.theme;
        let offset = self.config.label_offset;
        let m = geometry.screen_from_model;
        let r = geometry.rect;
        backend.with_saved(|b| {
            b.set_fill(theme.label);

            let xs = capped_lines(r.left, r.right, steps.x);
            let decimals = step_decimals(xs.step());
            let mut previous: Option<(Point, f64)> = None;
            for x in xs {
                let at = m.transform_point(Point::new(x, 0.0)) + offset;
                if previous.is_some_and(|(p, advance)| (at - p).hypot() < advance) {
                    continue;
                }
                b.set_transform(Matrix::translate(at.x, at.y));
                let advance = glyphs.render_str(b, &format!("{x:.decimals$}"));
                previous = Some((at, advance));
            }

            let ys = capped_lines(r.top, r.bottom, steps.y);
            let decimals = step_decimals(ys.step());
            for y in ys {
                if y == 0.0 {
                    continue;
                }
                let at = m.transform_point(Point::new(0.0, y)) + offset;
                b.set_transform(Matrix::translate(at.x, at.y));
                glyphs.render_str(b, &format!("{y:.decimals$}"));
            }
        });
    }
}

/// Grid lines over `[min, max]`, with `step` doubled until there are at most
/// [`MAX_GRID_LINES`] of them.
fn capped_lines(min: f64, max: f64, step: f64) -> GridLines {
    let mut step = step;
    loop {
        let lines = grid_lines(min, max, step);
        // An overflowing step yields no lines, so this ends.
        if lines.size_hint().0 <= MAX_GRID_LINES {
            return lines;
        }
        step *= 2.0;
    }
}

/// Maps a model-space segment to pixels.
fn model_line(m: Matrix, from: (f64, f64), to: (f64, f64)) -> Line {
    Line::new(m.transform_point(from.into()), m.transform_point(to.into()))
}
