// Copyright 2025 the Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Fields, SpringConfig};

/// A damped spring pulling every channel of a [`Fields`] record toward a target.
///
/// The spring is created at rest on its initial value. Setting a new target
/// keeps the current value and velocity, so an animation already in flight
/// bends smoothly toward the new goal instead of restarting.
///
/// Integration is one semi-implicit Euler step per [`Spring::update`] call;
/// time deltas are given in milliseconds.
#[derive(Clone, Debug)]
pub struct Spring<T> {
    config: SpringConfig,
    current: T,
    target: T,
    velocity: T,
}

impl<T: Fields> Spring<T> {
    /// Creates a spring at rest on `initial` with the default tuning.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self::with_config(initial, SpringConfig::DEFAULT)
    }

    /// Creates a spring at rest on `initial`.
    #[must_use]
    pub fn with_config(initial: T, config: SpringConfig) -> Self {
        Self {
            config,
            current: initial,
            target: initial,
            velocity: T::zeroed(),
        }
    }

    /// The current (interpolated) value.
    #[must_use]
    pub fn value(&self) -> T {
        self.current
    }

    /// The value the spring is moving toward.
    #[must_use]
    pub fn target(&self) -> T {
        self.target
    }

    /// Per-channel velocity, in units per second.
    #[must_use]
    pub fn velocity(&self) -> T {
        self.velocity
    }

    /// The tuning in use.
    #[must_use]
    pub fn config(&self) -> SpringConfig {
        self.config
    }

    /// Replaces the tuning; takes effect on the next update.
    pub fn set_config(&mut self, config: SpringConfig) {
        self.config = config;
    }

    /// Sets a new target without touching the current value or velocity.
    pub fn set_target(&mut self, target: T) {
        debug_assert!(
            (0..T::COUNT).all(|i| target.channel(i).is_finite()),
            "spring targets must be finite"
        );
        self.target = target;
    }

    /// Jumps to `value` and stops: current and target become `value`,
    /// velocity becomes zero.
    pub fn snap(&mut self, value: T) {
        self.current = value;
        self.target = value;
        self.velocity = T::zeroed();
    }

    /// Whether every channel is within the rest epsilon of its target and
    /// nearly still.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        let eps = self.config.rest_epsilon;
        (0..T::COUNT).all(|i| {
            (self.current.channel(i) - self.target.channel(i)).abs() < eps
                && self.velocity.channel(i).abs() < eps
        })
    }

    /// Advances the simulation by `dt_ms` milliseconds.
    ///
    /// Channels that are already at rest snap exactly onto their target.
    /// Returns `true` if at least one channel is still moving.
    pub fn update(&mut self, dt_ms: f64) -> bool {
        let eps = self.config.rest_epsilon;
        let dt = dt_ms / 1000.0;
        let mut moving = false;

        for i in 0..T::COUNT {
            let target = self.target.channel(i);
            let displacement = self.current.channel(i) - target;
            let velocity = self.velocity.channel(i);

            if displacement.abs() < eps && velocity.abs() < eps {
                *self.current.channel_mut(i) = target;
                *self.velocity.channel_mut(i) = 0.0;
                continue;
            }

            moving = true;
            let (displacement, velocity) = step(dt, displacement, velocity, &self.config);
            *self.current.channel_mut(i) = target + displacement;
            *self.velocity.channel_mut(i) = velocity;
        }

        moving
    }

    pub(crate) fn current_mut(&mut self) -> &mut T {
        &mut self.current
    }
}

/// One semi-implicit Euler step of `m·x'' = −k·x − c·x'`.
fn step(dt: f64, displacement: f64, velocity: f64, config: &SpringConfig) -> (f64, f64) {
    let spring_force = -config.stiffness * displacement;
    let damping_force = -config.damping * velocity;
    let acceleration = (spring_force + damping_force) / config.mass;
    let velocity = velocity + acceleration * dt;
    let displacement = displacement + velocity * dt;
    (displacement, velocity)
}
