// SPDX-License-Identifier: MPL-2.0
//! Damped spring interpolation for animated UI values.
//!
//! A [`Spring`] approaches its target asymptotically following a damped
//! physical motion profile instead of jumping instantly. Re-targeting is the
//! only mutation: a new target redirects the in-flight motion without any
//! discontinuity, because position and velocity are carried over. There is
//! no animation queue and no completion callback; callers step springs from
//! a periodic tick and read the current value when rendering.

use iced::Color;
use std::time::Duration;

/// Spring stiffness shared by every animated property, so independently
/// animated elements visually settle together.
pub const DEFAULT_TENSION: f32 = 280.0;
/// Spring damping coefficient paired with [`DEFAULT_TENSION`].
pub const DEFAULT_FRICTION: f32 = 60.0;

/// Distance from the target below which the spring counts as settled.
const REST_DELTA: f32 = 0.01;
/// Velocity magnitude below which the spring counts as settled.
const REST_VELOCITY: f32 = 0.01;

/// Largest dt a single Euler step may integrate. The shared profile is only
/// stable up to roughly 33 ms per step; larger deltas are split into slices
/// of this size.
const MAX_STEP_SECS: f32 = 0.016;

/// A scalar value animating toward a target with damped spring motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    position: f32,
    velocity: f32,
    target: f32,
    tension: f32,
    friction: f32,
}

impl Spring {
    /// Creates a spring resting at `initial` with the shared motion profile.
    #[must_use]
    pub fn new(initial: f32) -> Self {
        Self {
            position: initial,
            velocity: 0.0,
            target: initial,
            tension: DEFAULT_TENSION,
            friction: DEFAULT_FRICTION,
        }
    }

    /// Redirects the spring toward a new target, preserving position and
    /// velocity so an in-flight animation bends rather than jumps.
    pub fn retarget(&mut self, target: f32) {
        self.target = target;
    }

    /// Jumps straight to `value` with no animation. Used for initial
    /// placement, never for user-visible transitions.
    pub fn snap_to(&mut self, value: f32) {
        self.position = value;
        self.velocity = 0.0;
        self.target = value;
    }

    /// Advances the simulation by `dt` using semi-implicit Euler integration.
    ///
    /// Deltas larger than [`MAX_STEP_SECS`] are integrated in sub-steps, so
    /// a stalled event loop (window drag, suspend) hands the integrator the
    /// same stable step sizes as a healthy frame cadence.
    pub fn tick(&mut self, dt: Duration) {
        let mut remaining = dt.as_secs_f32();
        while remaining > 0.0 {
            if self.is_settled() {
                // Snap exactly onto the target so equality checks hold at
                // rest.
                self.position = self.target;
                self.velocity = 0.0;
                return;
            }

            let step = remaining.min(MAX_STEP_SECS);
            let displacement = self.position - self.target;
            let acceleration = -self.tension * displacement - self.friction * self.velocity;
            self.velocity += acceleration * step;
            self.position += self.velocity * step;
            remaining -= step;
        }
    }

    /// Current interpolated value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.position
    }

    /// The value the spring is heading toward.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Whether the spring has effectively reached its target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        (self.position - self.target).abs() < REST_DELTA
            && self.velocity.abs() < REST_VELOCITY
    }
}

/// A color animating toward a target, one spring per channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSpring {
    r: Spring,
    g: Spring,
    b: Spring,
    a: Spring,
}

impl ColorSpring {
    /// Creates a color spring resting at `initial`.
    #[must_use]
    pub fn new(initial: Color) -> Self {
        Self {
            r: Spring::new(initial.r),
            g: Spring::new(initial.g),
            b: Spring::new(initial.b),
            a: Spring::new(initial.a),
        }
    }

    /// Redirects all four channels toward the new color.
    pub fn retarget(&mut self, target: Color) {
        self.r.retarget(target.r);
        self.g.retarget(target.g);
        self.b.retarget(target.b);
        self.a.retarget(target.a);
    }

    /// Jumps straight to `color` with no animation.
    pub fn snap_to(&mut self, color: Color) {
        self.r.snap_to(color.r);
        self.g.snap_to(color.g);
        self.b.snap_to(color.b);
        self.a.snap_to(color.a);
    }

    /// Advances all channels by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.r.tick(dt);
        self.g.tick(dt);
        self.b.tick(dt);
        self.a.tick(dt);
    }

    /// Current interpolated color. Channels are clamped to the valid range
    /// since spring motion may briefly overshoot.
    #[must_use]
    pub fn value(&self) -> Color {
        Color {
            r: self.r.value().clamp(0.0, 1.0),
            g: self.g.value().clamp(0.0, 1.0),
            b: self.b.value().clamp(0.0, 1.0),
            a: self.a.value().clamp(0.0, 1.0),
        }
    }

    /// Whether every channel has reached its target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.r.is_settled() && self.g.is_settled() && self.b.is_settled() && self.a.is_settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    const FRAME: Duration = Duration::from_millis(16);

    fn run_to_rest(spring: &mut Spring) {
        // Generous upper bound; the shared profile settles well within this.
        for _ in 0..1000 {
            spring.tick(FRAME);
            if spring.is_settled() {
                return;
            }
        }
        panic!("spring did not settle");
    }

    #[test]
    fn new_spring_is_at_rest() {
        let spring = Spring::new(5.0);
        assert!(spring.is_settled());
        assert_abs_diff_eq!(spring.value(), 5.0);
        assert_abs_diff_eq!(spring.target(), 5.0);
    }

    #[test]
    fn spring_converges_to_target() {
        let mut spring = Spring::new(0.0);
        spring.retarget(100.0);
        run_to_rest(&mut spring);
        assert!((spring.value() - 100.0).abs() < 0.1);
    }

    #[test]
    fn spring_approaches_monotonically_toward_target() {
        // The shared profile is overdamped; the value must never run away
        // from the target.
        let mut spring = Spring::new(0.0);
        spring.retarget(100.0);

        let mut previous = spring.value();
        for _ in 0..200 {
            spring.tick(FRAME);
            assert!(spring.value() + 1e-3 >= previous);
            previous = spring.value();
        }
    }

    #[test]
    fn retarget_preserves_position_and_velocity() {
        let mut spring = Spring::new(0.0);
        spring.retarget(100.0);
        for _ in 0..10 {
            spring.tick(FRAME);
        }
        let mid_position = spring.value();
        assert!(mid_position > 0.0 && mid_position < 100.0);

        // Reverse mid-flight: no discontinuity in the current value.
        spring.retarget(0.0);
        assert_abs_diff_eq!(spring.value(), mid_position);

        run_to_rest(&mut spring);
        assert!(spring.value().abs() < 0.1);
    }

    #[test]
    fn snap_to_jumps_without_animating() {
        let mut spring = Spring::new(0.0);
        spring.snap_to(42.0);
        assert!(spring.is_settled());
        assert_abs_diff_eq!(spring.value(), 42.0);
    }

    #[test]
    fn long_ticks_are_integrated_stably() {
        // A stalled event loop delivers deltas far beyond one frame; the
        // integrator must stay bounded and still converge.
        let mut spring = Spring::new(0.0);
        spring.retarget(1.0);

        for _ in 0..60 {
            spring.tick(Duration::from_millis(100));
            assert!(spring.value().is_finite());
            assert!(spring.value() >= -0.5 && spring.value() <= 1.5);
        }

        assert!(spring.is_settled());
        assert_abs_diff_eq!(spring.value(), 1.0);
    }

    #[test]
    fn settled_spring_locks_exactly_onto_target() {
        let mut spring = Spring::new(0.0);
        spring.retarget(100.0);
        run_to_rest(&mut spring);
        spring.tick(FRAME);
        assert_abs_diff_eq!(spring.value(), 100.0);
    }

    #[test]
    fn color_spring_converges_per_channel() {
        let mut color = ColorSpring::new(Color::WHITE);
        color.retarget(Color::BLACK);
        for _ in 0..1000 {
            color.tick(FRAME);
            if color.is_settled() {
                break;
            }
        }
        let value = color.value();
        assert!(value.r < 0.05 && value.g < 0.05 && value.b < 0.05);
        assert!((value.a - 1.0).abs() < 0.05);
    }

    #[test]
    fn color_spring_value_is_clamped() {
        let color = ColorSpring::new(Color::from_rgb(0.5, 0.5, 0.5));
        let value = color.value();
        assert!(value.r >= 0.0 && value.r <= 1.0);
    }
}
