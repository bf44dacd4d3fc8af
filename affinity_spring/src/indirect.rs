// Copyright 2025 the Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use affinity_matrix::{Matrix, PolarMatrix, correct_angle};

use crate::{Fields, Spring, SpringConfig};

/// A spring that animates a decomposed representation of a structured value.
///
/// `T` is the value callers see; `D` is the fixed-shape record the spring
/// actually integrates. The two are bridged by a pair of plain functions,
/// `decompose: T → D` and `compose: D → T`, supplied at construction.
///
/// Every new target is decomposed, and each angular channel of the stored
/// current value is then moved by a full turn if needed (see
/// [`correct_angle`]) so the animation takes the short way round.
///
/// While moving, reads recompose the internal value. Once at rest the spring
/// hands back the target exactly as it was given, so a resting value carries
/// no decompose/compose round-off.
#[derive(Clone, Debug)]
pub struct IndirectSpring<T, D> {
    inner: Spring<D>,
    target: T,
    decompose: fn(&T) -> D,
    compose: fn(&D) -> T,
}

impl<T: Clone, D: Fields> IndirectSpring<T, D> {
    /// Creates a spring at rest on `initial` with the default tuning.
    #[must_use]
    pub fn new(initial: &T, decompose: fn(&T) -> D, compose: fn(&D) -> T) -> Self {
        Self::with_config(initial, SpringConfig::DEFAULT, decompose, compose)
    }

    /// Creates a spring at rest on `initial`.
    #[must_use]
    pub fn with_config(
        initial: &T,
        config: SpringConfig,
        decompose: fn(&T) -> D,
        compose: fn(&D) -> T,
    ) -> Self {
        Self {
            inner: Spring::with_config(decompose(initial), config),
            target: initial.clone(),
            decompose,
            compose,
        }
    }

    /// The current value.
    ///
    /// Recomposed from the internal representation while moving; the target
    /// itself once at rest.
    #[must_use]
    pub fn value(&self) -> T {
        if self.inner.is_settled() {
            self.target.clone()
        } else {
            (self.compose)(&self.inner.value())
        }
    }

    /// The target, as last given to [`IndirectSpring::set`] or
    /// [`IndirectSpring::snap`].
    #[must_use]
    pub fn target(&self) -> T {
        self.target.clone()
    }

    /// The current internal (decomposed) value.
    #[must_use]
    pub fn internal_value(&self) -> D {
        self.inner.value()
    }

    /// The internal (decomposed) target.
    #[must_use]
    pub fn internal_target(&self) -> D {
        self.inner.target()
    }

    /// The tuning in use.
    #[must_use]
    pub fn config(&self) -> SpringConfig {
        self.inner.config()
    }

    /// Replaces the tuning; takes effect on the next update.
    pub fn set_config(&mut self, config: SpringConfig) {
        self.inner.set_config(config);
    }

    /// Sets a new target and corrects angular channels for continuity.
    pub fn set(&mut self, value: &T) {
        let target = (self.decompose)(value);
        self.target = value.clone();
        self.inner.set_target(target);
        let current = self.inner.current_mut();
        for i in 0..D::COUNT {
            if D::is_angular(i) {
                let angle = current.channel_mut(i);
                *angle = correct_angle(*angle, target.channel(i));
            }
        }
    }

    /// Jumps to `value` and stops.
    pub fn snap(&mut self, value: &T) {
        self.inner.snap((self.decompose)(value));
        self.target = value.clone();
    }

    /// Advances the simulation by `dt_ms` milliseconds; see [`Spring::update`].
    pub fn update(&mut self, dt_ms: f64) -> bool {
        self.inner.update(dt_ms)
    }

    /// Whether every internal channel is at rest.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.inner.is_settled()
    }
}

/// A spring that animates a [`Matrix`] through its [`PolarMatrix`] form.
///
/// Rotations interpolate as rotations and uniform scales stay uniform, so a
/// shape never shears mid-transition unless one of its endpoints is sheared.
pub type MatrixSpring = IndirectSpring<Matrix, PolarMatrix>;

fn decompose_matrix(m: &Matrix) -> PolarMatrix {
    PolarMatrix::decompose(*m)
}

fn compose_matrix(p: &PolarMatrix) -> Matrix {
    p.compose()
}

impl IndirectSpring<Matrix, PolarMatrix> {
    /// Creates a matrix spring at rest on `initial` with the default tuning.
    #[must_use]
    pub fn matrix(initial: Matrix) -> Self {
        Self::matrix_with_config(initial, SpringConfig::DEFAULT)
    }

    /// Creates a matrix spring at rest on `initial`.
    #[must_use]
    pub fn matrix_with_config(initial: Matrix, config: SpringConfig) -> Self {
        Self::with_config(&initial, config, decompose_matrix, compose_matrix)
    }
}
