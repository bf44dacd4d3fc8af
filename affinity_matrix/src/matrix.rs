// Copyright 2025 the Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::iter::Product;
use core::ops::Mul;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Vec2};

use crate::format::{CssTransform, SvgTransform};

/// Tolerance used by [`Matrix::is_identity`] and other tolerant comparisons
/// that do not take an explicit epsilon.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// [`Matrix::rounded`] keeps this many steps per unit, so ten decimal places.
const ROUND_SCALE: f64 = 1e10;

/// A 2D affine map.
///
/// The map is stored as two basis vectors, `(xx, xy)` and `(yx, yy)`, plus a
/// translation `(dx, dy)`. A point `(x, y)` maps to
///
/// ```text
/// (xx·x + yx·y + dx, xy·x + yy·y + dy)
/// ```
///
/// This is the same coefficient order as [`kurbo::Affine`] and as the CSS
/// `matrix(a, b, c, d, e, f)` function.
///
/// `PartialEq` compares coefficients exactly. Animated values rarely land on
/// exact values, so prefer [`Matrix::approx_eq`] when comparing results of
/// arithmetic.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix {
    xx: f64,
    xy: f64,
    yx: f64,
    yy: f64,
    dx: f64,
    dy: f64,
}

impl Matrix {
    /// The identity map.
    pub const IDENTITY: Self = Self::from_components(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    /// Creates a matrix from its six coefficients.
    #[must_use]
    pub const fn from_components(xx: f64, xy: f64, yx: f64, yy: f64, dx: f64, dy: f64) -> Self {
        Self {
            xx,
            xy,
            yx,
            yy,
            dx,
            dy,
        }
    }

    /// Creates a matrix from coefficients in `[xx, xy, yx, yy, dx, dy]` order.
    #[must_use]
    pub const fn from_coeffs(c: [f64; 6]) -> Self {
        Self::from_components(c[0], c[1], c[2], c[3], c[4], c[5])
    }

    /// Returns the coefficients in `[xx, xy, yx, yy, dx, dy]` order.
    #[must_use]
    pub const fn as_coeffs(self) -> [f64; 6] {
        [self.xx, self.xy, self.yx, self.yy, self.dx, self.dy]
    }

    /// Returns the identity map.
    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// A pure translation.
    #[must_use]
    pub const fn translate(x: f64, y: f64) -> Self {
        Self::from_components(1.0, 0.0, 0.0, 1.0, x, y)
    }

    /// A rotation about the origin.
    ///
    /// A positive angle rotates the positive X direction into positive Y. The
    /// angle is expressed in radians.
    #[must_use]
    pub fn rotate(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_components(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// A non-uniform scale about the origin.
    #[must_use]
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self::from_components(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// A uniform scale about the origin.
    #[must_use]
    pub const fn scale_uniform(s: f64) -> Self {
        Self::scale(s, s)
    }

    /// A skew (shear) by the angles `kx` along X and `ky` along Y, in radians.
    #[must_use]
    pub fn skew(kx: f64, ky: f64) -> Self {
        Self::from_components(1.0, ky.tan(), kx.tan(), 1.0, 0.0, 0.0)
    }

    /// A rotation about `center`.
    #[must_use]
    pub fn rotate_about(angle: f64, center: Point) -> Self {
        Self::rotate(angle).about(center)
    }

    /// A scale about `center`.
    #[must_use]
    pub fn scale_about(sx: f64, sy: f64, center: Point) -> Self {
        Self::scale(sx, sy).about(center)
    }

    /// Re-centers `self` so that it acts about `center` instead of the origin.
    fn about(self, center: Point) -> Self {
        Self::compose_all([
            Self::translate(center.x, center.y),
            self,
            Self::translate(-center.x, -center.y),
        ])
    }

    /// Composes two matrices: the result maps `p` to `a(b(p))`.
    ///
    /// `b` is applied first, then `a`. Callers that need "rotate about P"
    /// must sandwich explicitly, see [`Matrix::rotate_about`].
    #[must_use]
    pub fn compose(a: Self, b: Self) -> Self {
        Self::from_components(
            a.xx * b.xx + a.yx * b.xy,
            a.xy * b.xx + a.yy * b.xy,
            a.xx * b.yx + a.yx * b.yy,
            a.xy * b.yx + a.yy * b.yy,
            a.xx * b.dx + a.yx * b.dy + a.dx,
            a.xy * b.dx + a.yy * b.dy + a.dy,
        )
    }

    /// Composes any number of matrices, left to right.
    ///
    /// `compose_all([a, b, c])` equals `compose(compose(a, b), c)`. An empty
    /// sequence yields the identity and a single matrix is returned unchanged.
    #[must_use]
    pub fn compose_all<I: IntoIterator<Item = Self>>(matrices: I) -> Self {
        let mut iter = matrices.into_iter();
        let Some(first) = iter.next() else {
            return Self::IDENTITY;
        };
        iter.fold(first, Self::compose)
    }

    /// Returns `self` followed by `next`, i.e. `compose(next, self)`.
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        Self::compose(next, self)
    }

    /// The determinant of the linear part, `xx·yy − xy·yx`.
    #[must_use]
    pub fn determinant(self) -> f64 {
        self.xx * self.yy - self.xy * self.yx
    }

    /// Whether [`Matrix::invert`] would succeed.
    #[must_use]
    pub fn is_invertible(self) -> bool {
        self.determinant() != 0.0
    }

    /// Returns the inverse map, or `None` when the determinant is exactly zero.
    ///
    /// No epsilon is applied: nearly singular matrices invert to very large
    /// coefficients.
    #[must_use]
    pub fn invert(self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 {
            return None;
        }
        Some(Self::from_components(
            self.yy / det,
            -self.xy / det,
            -self.yx / det,
            self.xx / det,
            (self.yx * self.dy - self.yy * self.dx) / det,
            (self.xy * self.dx - self.xx * self.dy) / det,
        ))
    }

    /// Applies the map to a point.
    #[must_use]
    pub fn transform_point(self, p: Point) -> Point {
        Point::new(
            self.xx * p.x + self.yx * p.y + self.dx,
            self.xy * p.x + self.yy * p.y + self.dy,
        )
    }

    /// Applies only the linear part of the map to a vector.
    #[must_use]
    pub fn transform_vector(self, v: Vec2) -> Vec2 {
        Vec2::new(self.xx * v.x + self.yx * v.y, self.xy * v.x + self.yy * v.y)
    }

    /// Applies the inverse map to a point, if the matrix is invertible.
    #[must_use]
    pub fn inverse_transform_point(self, p: Point) -> Option<Point> {
        self.invert().map(|inv| inv.transform_point(p))
    }

    /// Component-wise comparison: every coefficient differs by less than `epsilon`.
    #[must_use]
    pub fn approx_eq(self, other: Self, epsilon: f64) -> bool {
        self.as_coeffs()
            .iter()
            .zip(other.as_coeffs().iter())
            .all(|(a, b)| (a - b).abs() < epsilon)
    }

    /// Whether the matrix is the identity within [`DEFAULT_EPSILON`].
    #[must_use]
    pub fn is_identity(self) -> bool {
        self.approx_eq(Self::IDENTITY, DEFAULT_EPSILON)
    }

    /// Whether every coefficient is finite.
    ///
    /// The rest of the workspace assumes finite inputs; use this to filter
    /// values coming from user input.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.as_coeffs().iter().all(|c| c.is_finite())
    }

    /// The image of the unit X vector.
    #[must_use]
    pub const fn basis_x(self) -> Vec2 {
        Vec2::new(self.xx, self.xy)
    }

    /// The image of the unit Y vector.
    #[must_use]
    pub const fn basis_y(self) -> Vec2 {
        Vec2::new(self.yx, self.yy)
    }

    /// The translation part.
    #[must_use]
    pub const fn translation(self) -> Vec2 {
        Vec2::new(self.dx, self.dy)
    }

    /// The angle of the X basis vector, in radians.
    #[must_use]
    pub fn rotation(self) -> f64 {
        self.xy.atan2(self.xx)
    }

    /// The lengths of the X and Y basis vectors.
    ///
    /// These are the per-axis magnifications used to pick a grid density.
    #[must_use]
    pub fn axis_scales(self) -> (f64, f64) {
        (self.xx.hypot(self.xy), self.yx.hypot(self.yy))
    }

    /// Snaps float noise out of the coefficients (to 1e-10) and turns `-0.0`
    /// into `0.0`.
    #[must_use]
    pub fn rounded(self) -> Self {
        let round = |c: f64| {
            let r = (c * ROUND_SCALE).round() / ROUND_SCALE;
            if r == 0.0 { 0.0 } else { r }
        };
        let [xx, xy, yx, yy, dx, dy] = self.as_coeffs().map(round);
        Self::from_components(xx, xy, yx, yy, dx, dy)
    }

    /// Returns a `Display` adaptor producing `matrix(a, b, c, d, e, f)`.
    #[must_use]
    pub fn css(self) -> CssTransform {
        CssTransform(self)
    }

    /// Returns a `Display` adaptor producing `matrix(a b c d e f)`.
    #[must_use]
    pub fn svg(self) -> SvgTransform {
        SvgTransform(self)
    }

    /// The `xx` coefficient (X basis, X component).
    #[must_use]
    pub const fn xx(self) -> f64 {
        self.xx
    }

    /// The `xy` coefficient (X basis, Y component).
    #[must_use]
    pub const fn xy(self) -> f64 {
        self.xy
    }

    /// The `yx` coefficient (Y basis, X component).
    #[must_use]
    pub const fn yx(self) -> f64 {
        self.yx
    }

    /// The `yy` coefficient (Y basis, Y component).
    #[must_use]
    pub const fn yy(self) -> f64 {
        self.yy
    }

    /// The X translation.
    #[must_use]
    pub const fn dx(self) -> f64 {
        self.dx
    }

    /// The Y translation.
    #[must_use]
    pub const fn dy(self) -> f64 {
        self.dy
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Matrix {
    type Output = Self;

    #[inline]
    fn mul(self, other: Self) -> Self {
        Self::compose(self, other)
    }
}

impl Mul<Point> for Matrix {
    type Output = Point;

    #[inline]
    fn mul(self, p: Point) -> Point {
        self.transform_point(p)
    }
}

impl Product for Matrix {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::compose_all(iter)
    }
}

impl<'a> Product<&'a Self> for Matrix {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        Self::compose_all(iter.copied())
    }
}

impl From<Matrix> for Affine {
    fn from(m: Matrix) -> Self {
        Self::new(m.as_coeffs())
    }
}

impl From<Affine> for Matrix {
    fn from(a: Affine) -> Self {
        Self::from_coeffs(a.as_coeffs())
    }
}
