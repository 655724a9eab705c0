// SPDX-License-Identifier: MPL-2.0
//! Mount/unmount transition for modal overlays.
//!
//! Overlays cross-fade (and slightly scale) in and out over a fixed timed
//! curve rather than a spring: the explicit phase machine below replaces the
//! enter/leave choreography of the original lightbox. Interaction is
//! disabled while the overlay is in an invisible phase.

use std::time::Duration;

/// How long the enter transition runs (ease-out).
pub const ENTER_DURATION: Duration = Duration::from_millis(500);
/// How long the leave transition runs (ease-in).
pub const LEAVE_DURATION: Duration = Duration::from_millis(200);

/// Scale the overlay starts from when entering and shrinks back to when
/// leaving.
const ENTER_SCALE_FROM: f32 = 0.95;

/// Lifecycle phase of an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Not rendered at all.
    #[default]
    Hidden,
    /// Fading in.
    Entering,
    /// Fully shown.
    Visible,
    /// Fading out.
    Leaving,
}

/// Timed enter/leave state for a modal overlay.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverlayTransition {
    phase: Phase,
    /// Time spent in the current transitional phase.
    elapsed: Duration,
}

impl OverlayTransition {
    /// Creates a hidden overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Starts (or redirects) the enter transition.
    ///
    /// Calling `show` while leaving resumes from the equivalent enter
    /// progress, so the cross-fade reverses from where it currently is.
    pub fn show(&mut self) {
        match self.phase {
            Phase::Hidden => {
                self.phase = Phase::Entering;
                self.elapsed = Duration::ZERO;
            }
            Phase::Leaving => {
                let progress = 1.0 - phase_progress(self.elapsed, LEAVE_DURATION);
                self.phase = Phase::Entering;
                self.elapsed = ENTER_DURATION.mul_f32(progress);
            }
            Phase::Entering | Phase::Visible => {}
        }
    }

    /// Starts (or redirects) the leave transition.
    pub fn hide(&mut self) {
        match self.phase {
            Phase::Visible => {
                self.phase = Phase::Leaving;
                self.elapsed = Duration::ZERO;
            }
            Phase::Entering => {
                let progress = phase_progress(self.elapsed, ENTER_DURATION);
                self.phase = Phase::Leaving;
                self.elapsed = LEAVE_DURATION.mul_f32(1.0 - progress);
            }
            Phase::Hidden | Phase::Leaving => {}
        }
    }

    /// Advances the transition timer, completing a phase when its duration
    /// has elapsed.
    pub fn advance(&mut self, dt: Duration) {
        match self.phase {
            Phase::Entering => {
                self.elapsed += dt;
                if self.elapsed >= ENTER_DURATION {
                    self.phase = Phase::Visible;
                    self.elapsed = Duration::ZERO;
                }
            }
            Phase::Leaving => {
                self.elapsed += dt;
                if self.elapsed >= LEAVE_DURATION {
                    self.phase = Phase::Hidden;
                    self.elapsed = Duration::ZERO;
                }
            }
            Phase::Hidden | Phase::Visible => {}
        }
    }

    /// Opacity for the current frame: eased 0→1 while entering, 1→0 while
    /// leaving.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        match self.phase {
            Phase::Hidden => 0.0,
            Phase::Visible => 1.0,
            Phase::Entering => ease_out(phase_progress(self.elapsed, ENTER_DURATION)),
            Phase::Leaving => 1.0 - ease_in(phase_progress(self.elapsed, LEAVE_DURATION)),
        }
    }

    /// Scale for the current frame (0.95→1 entering, 1→0.95 leaving).
    #[must_use]
    pub fn scale(&self) -> f32 {
        ENTER_SCALE_FROM + (1.0 - ENTER_SCALE_FROM) * self.opacity()
    }

    /// Whether the overlay should be rendered at all.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.phase != Phase::Hidden
    }

    /// Whether the overlay accepts pointer input. Input is accepted as soon
    /// as the enter transition starts and refused once leaving begins.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        matches!(self.phase, Phase::Entering | Phase::Visible)
    }

    /// Whether the transition still needs periodic ticks.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Entering | Phase::Leaving)
    }
}

fn phase_progress(elapsed: Duration, duration: Duration) -> f32 {
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

fn ease_in(t: f32) -> f32 {
    t * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden_and_non_interactive() {
        let overlay = OverlayTransition::new();
        assert_eq!(overlay.phase(), Phase::Hidden);
        assert!(!overlay.is_mounted());
        assert!(!overlay.is_interactive());
        assert_eq!(overlay.opacity(), 0.0);
    }

    #[test]
    fn show_enters_then_becomes_visible() {
        let mut overlay = OverlayTransition::new();
        overlay.show();
        assert_eq!(overlay.phase(), Phase::Entering);
        assert!(overlay.is_mounted());
        assert!(overlay.is_interactive());

        overlay.advance(ENTER_DURATION);
        assert_eq!(overlay.phase(), Phase::Visible);
        assert_eq!(overlay.opacity(), 1.0);
        assert!(!overlay.is_animating());
    }

    #[test]
    fn hide_leaves_then_becomes_hidden() {
        let mut overlay = OverlayTransition::new();
        overlay.show();
        overlay.advance(ENTER_DURATION);

        overlay.hide();
        assert_eq!(overlay.phase(), Phase::Leaving);
        assert!(overlay.is_mounted());
        assert!(!overlay.is_interactive());

        overlay.advance(LEAVE_DURATION);
        assert_eq!(overlay.phase(), Phase::Hidden);
        assert_eq!(overlay.opacity(), 0.0);
    }

    #[test]
    fn opacity_rises_during_enter() {
        let mut overlay = OverlayTransition::new();
        overlay.show();

        overlay.advance(Duration::from_millis(100));
        let early = overlay.opacity();
        overlay.advance(Duration::from_millis(200));
        let late = overlay.opacity();

        assert!(early > 0.0 && early < 1.0);
        assert!(late > early);
    }

    #[test]
    fn hide_mid_enter_resumes_from_current_progress() {
        let mut overlay = OverlayTransition::new();
        overlay.show();
        overlay.advance(Duration::from_millis(250));
        let opacity_before = overlay.opacity();

        overlay.hide();
        assert_eq!(overlay.phase(), Phase::Leaving);
        // The leave timer is seeded so no visible jump occurs at redirect.
        assert!(overlay.opacity() > 0.0);

        overlay.advance(LEAVE_DURATION);
        assert_eq!(overlay.phase(), Phase::Hidden);
        assert!(opacity_before > 0.0);
    }

    #[test]
    fn show_mid_leave_redirects_to_entering() {
        let mut overlay = OverlayTransition::new();
        overlay.show();
        overlay.advance(ENTER_DURATION);
        overlay.hide();
        overlay.advance(Duration::from_millis(50));

        overlay.show();
        assert_eq!(overlay.phase(), Phase::Entering);
        overlay.advance(ENTER_DURATION);
        assert_eq!(overlay.phase(), Phase::Visible);
    }

    #[test]
    fn show_while_visible_is_a_no_op() {
        let mut overlay = OverlayTransition::new();
        overlay.show();
        overlay.advance(ENTER_DURATION);

        overlay.show();
        assert_eq!(overlay.phase(), Phase::Visible);
        assert_eq!(overlay.opacity(), 1.0);
    }

    #[test]
    fn scale_tracks_opacity_between_bounds() {
        let mut overlay = OverlayTransition::new();
        assert_eq!(overlay.scale(), ENTER_SCALE_FROM);
        overlay.show();
        overlay.advance(ENTER_DURATION);
        assert_eq!(overlay.scale(), 1.0);
    }
}
