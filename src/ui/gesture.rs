// SPDX-License-Identifier: MPL-2.0
//! Swipe gesture detection
//!
//! Resolves raw pointer press/release positions into horizontal swipe
//! directions for the lightbox. Only the two directional outcomes matter;
//! anything ambiguous (short drags, mostly-vertical movement) is ignored.

use iced::Point;

/// Minimum horizontal travel, in logical pixels, for a drag to count as a
/// swipe.
pub const SWIPE_THRESHOLD: f32 = 40.0;

/// Direction of a resolved swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Content pushed leftward (advance to the next image).
    Left,
    /// Content pushed rightward (return to the previous image).
    Right,
}

/// Tracks one pointer interaction and resolves it into a swipe on release.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeDetector {
    start: Option<Point>,
}

impl SwipeDetector {
    /// Begins tracking at the press position.
    pub fn press(&mut self, position: Point) {
        self.start = Some(position);
    }

    /// Ends tracking and resolves the gesture.
    ///
    /// Returns a direction only when the horizontal displacement exceeds
    /// [`SWIPE_THRESHOLD`] and dominates the vertical displacement.
    pub fn release(&mut self, position: Point) -> Option<Swipe> {
        let start = self.start.take()?;
        let dx = position.x - start.x;
        let dy = position.y - start.y;

        if dx.abs() < SWIPE_THRESHOLD || dx.abs() <= dy.abs() {
            return None;
        }

        if dx < 0.0 {
            Some(Swipe::Left)
        } else {
            Some(Swipe::Right)
        }
    }

    /// Abandons the in-flight gesture (e.g. the cursor left the window).
    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// Whether a press is currently being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}
