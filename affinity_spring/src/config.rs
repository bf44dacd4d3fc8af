// Copyright 2025 the Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Physical tuning of a damped harmonic oscillator.
///
/// The defaults (`stiffness = 170`, `damping = 26`, `mass = 1`) give a damping
/// ratio just under 1: values approach their target quickly with at most a
/// barely visible overshoot and no sustained oscillation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpringConfig {
    /// Spring constant, in kg / s².
    pub stiffness: f64,
    /// Damping constant, in kg / s.
    pub damping: f64,
    /// Mass, in kg.
    pub mass: f64,
    /// A channel whose displacement and velocity are both below this value is
    /// snapped onto its target and considered at rest.
    pub rest_epsilon: f64,
}

impl SpringConfig {
    /// Default tuning.
    pub const DEFAULT: Self = Self {
        stiffness: 170.0,
        damping: 26.0,
        mass: 1.0,
        rest_epsilon: 0.01,
    };

    /// Creates a configuration with the default rest epsilon.
    #[must_use]
    pub const fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            rest_epsilon: Self::DEFAULT.rest_epsilon,
        }
    }

    /// Returns a copy with a different rest epsilon.
    #[must_use]
    pub const fn with_rest_epsilon(mut self, rest_epsilon: f64) -> Self {
        self.rest_epsilon = rest_epsilon;
        self
    }

    /// The damping ratio `ζ = c / (2·√(k·m))`.
    ///
    /// `ζ < 1` oscillates around the target, `ζ = 1` is critically damped.
    #[must_use]
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::SpringConfig;

    #[test]
    fn default_tuning_is_nearly_critical() {
        let ratio = SpringConfig::default().damping_ratio();
        assert!(ratio > 0.99 && ratio < 1.0, "ratio = {ratio}");
    }

    #[test]
    fn builder_keeps_other_fields() {
        let c = SpringConfig::new(300.0, 30.0, 2.0).with_rest_epsilon(0.5);
        assert_eq!(c.stiffness, 300.0);
        assert_eq!(c.mass, 2.0);
        assert_eq!(c.rest_epsilon, 0.5);
    }
}
