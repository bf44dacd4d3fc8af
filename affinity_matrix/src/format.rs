// Copyright 2025 the Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transform-syntax formatting for handing matrices to drawing backends.

use core::fmt;

use crate::Matrix;

/// Formats a [`Matrix`] as a CSS `transform` value, `matrix(a, b, c, d, e, f)`.
///
/// Created by [`Matrix::css`].
#[derive(Clone, Copy, Debug)]
pub struct CssTransform(pub(crate) Matrix);

/// Formats a [`Matrix`] as an SVG `transform` attribute, `matrix(a b c d e f)`.
///
/// Created by [`Matrix::svg`].
#[derive(Clone, Copy, Debug)]
pub struct SvgTransform(pub(crate) Matrix);

fn write_coeffs(f: &mut fmt::Formatter<'_>, m: Matrix, sep: &str) -> fmt::Result {
    f.write_str("matrix(")?;
    for (i, c) in m.as_coeffs().iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{c}")?;
    }
    f.write_str(")")
}

impl fmt::Display for CssTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_coeffs(f, self.0, ", ")
    }
}

impl fmt::Display for SvgTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_coeffs(f, self.0, " ")
    }
}
