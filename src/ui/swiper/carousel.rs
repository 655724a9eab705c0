// SPDX-License-Identifier: MPL-2.0
//! Carousel navigation state for the lightbox.
//!
//! The carousel owns the "currently open image index" over an ordered,
//! externally-owned image list, and translates index changes into a
//! horizontal offset animation. All input channels (buttons, swipe,
//! keyboard) funnel into [`Carousel::next`] and [`Carousel::previous`], so
//! wrap-around behavior is identical regardless of modality.

use crate::animation::Spring;
use std::time::Duration;

/// Navigation state over an ordered image list.
///
/// The image list itself is owned by the embedding page; the carousel only
/// tracks its length. When open, the index invariant `0 <= i < len` holds by
/// construction — violations are caller bugs and fail loudly.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    open_index: Option<usize>,
    len: usize,
    viewport_width: f32,
    /// Horizontal strip offset in logical pixels; target is always
    /// `-(viewport_width * index)`.
    offset: Spring,
}

impl Carousel {
    /// Creates a closed carousel over a list of `len` images.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            open_index: None,
            len,
            viewport_width: 0.0,
            offset: Spring::new(0.0),
        }
    }

    /// Replaces the backing list length, closing the carousel if the current
    /// index no longer exists.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if matches!(self.open_index, Some(index) if index >= len) {
            self.open_index = None;
        }
    }

    /// Number of images in the backing list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Currently open image index, if any.
    #[must_use]
    pub fn open_index(&self) -> Option<usize> {
        self.open_index
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open_index.is_some()
    }

    /// Opens the carousel at `index`.
    ///
    /// Opening from the closed state positions the strip directly (the
    /// overlay fade covers the placement); re-opening or navigating while
    /// open animates. `index` must be within bounds.
    pub fn open_at(&mut self, index: usize) {
        assert!(
            index < self.len,
            "carousel index {} out of range ({} images)",
            index,
            self.len
        );

        let was_closed = self.open_index.is_none();
        self.open_index = Some(index);

        let target = self.offset_for(index);
        if was_closed {
            self.offset.snap_to(target);
        } else {
            self.offset.retarget(target);
        }
    }

    /// Closes the carousel. The strip keeps its position so the leave
    /// transition fades out the image that was on screen.
    pub fn close(&mut self) {
        self.open_index = None;
    }

    /// Advances to the next image, wrapping past the end. No-op when closed.
    pub fn next(&mut self) {
        if let Some(index) = self.open_index {
            self.open_at((index + 1) % self.len);
        }
    }

    /// Returns to the previous image, wrapping before the start. No-op when
    /// closed.
    pub fn previous(&mut self) {
        if let Some(index) = self.open_index {
            self.open_at((index + self.len - 1) % self.len);
        }
    }

    /// Updates the viewport width, re-targeting the offset for the unchanged
    /// index when open.
    pub fn set_viewport_width(&mut self, width: f32) {
        if (width - self.viewport_width).abs() < f32::EPSILON {
            return;
        }
        self.viewport_width = width;

        if let Some(index) = self.open_index {
            // Resize is not a navigation: jump so the open image stays put.
            self.offset.snap_to(self.offset_for(index));
        }
    }

    #[must_use]
    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// Current animated strip offset in logical pixels.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset.value()
    }

    /// The offset the strip is heading toward.
    #[must_use]
    pub fn offset_target(&self) -> f32 {
        self.offset.target()
    }

    /// Advances the offset animation.
    pub fn tick(&mut self, dt: Duration) {
        self.offset.tick(dt);
    }

    /// Whether the offset animation still needs ticks.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.offset.is_settled()
    }

    #[allow(clippy::cast_precision_loss)] // indexes are tiny
    fn offset_for(&self, index: usize) -> f32 {
        -(self.viewport_width * index as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn open_carousel(len: usize, index: usize, viewport_width: f32) -> Carousel {
        let mut carousel = Carousel::new(len);
        carousel.set_viewport_width(viewport_width);
        carousel.open_at(index);
        carousel
    }

    #[test]
    fn new_carousel_is_closed() {
        let carousel = Carousel::new(4);
        assert_eq!(carousel.open_index(), None);
        assert!(!carousel.is_open());
        assert_abs_diff_eq!(carousel.offset(), 0.0);
    }

    #[test]
    fn open_at_targets_the_indexed_offset() {
        let carousel = open_carousel(4, 2, 1000.0);
        assert_eq!(carousel.open_index(), Some(2));
        assert_abs_diff_eq!(carousel.offset_target(), -2000.0);
        // Opening from closed positions the strip without animating.
        assert_abs_diff_eq!(carousel.offset(), -2000.0);
    }

    #[test]
    fn open_at_is_idempotent() {
        let mut carousel = open_carousel(4, 2, 1000.0);
        carousel.open_at(2);
        assert_eq!(carousel.open_index(), Some(2));
        assert_abs_diff_eq!(carousel.offset_target(), -2000.0);
        assert!(!carousel.is_animating());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn open_at_past_the_end_panics() {
        let mut carousel = Carousel::new(3);
        carousel.open_at(3);
    }

    #[test]
    fn next_and_previous_wrap_for_every_index() {
        for len in 1..=6 {
            for start in 0..len {
                let mut carousel = open_carousel(len, start, 500.0);
                carousel.next();
                assert_eq!(carousel.open_index(), Some((start + 1) % len));

                let mut carousel = open_carousel(len, start, 500.0);
                carousel.previous();
                assert_eq!(carousel.open_index(), Some((start + len - 1) % len));
            }
        }
    }

    #[test]
    fn wrap_around_boundaries_with_three_images() {
        let mut carousel = open_carousel(3, 2, 500.0);
        carousel.next();
        assert_eq!(carousel.open_index(), Some(0));

        let mut carousel = open_carousel(3, 0, 500.0);
        carousel.previous();
        assert_eq!(carousel.open_index(), Some(2));
    }

    #[test]
    fn navigation_while_closed_is_a_no_op() {
        let mut carousel = Carousel::new(3);
        carousel.next();
        carousel.previous();
        assert_eq!(carousel.open_index(), None);
    }

    #[test]
    fn navigation_animates_toward_the_new_offset() {
        let mut carousel = open_carousel(3, 0, 800.0);
        carousel.next();
        assert_abs_diff_eq!(carousel.offset_target(), -800.0);
        assert!(carousel.is_animating());

        for _ in 0..1000 {
            carousel.tick(Duration::from_millis(16));
            if !carousel.is_animating() {
                break;
            }
        }
        assert!((carousel.offset() + 800.0).abs() < 0.1);
    }

    #[test]
    fn resize_keeps_the_open_index_and_retargets_the_offset() {
        let mut carousel = open_carousel(5, 3, 1000.0);
        carousel.set_viewport_width(640.0);
        assert_eq!(carousel.open_index(), Some(3));
        assert_abs_diff_eq!(carousel.offset_target(), -(640.0 * 3.0));
        assert_abs_diff_eq!(carousel.offset(), -(640.0 * 3.0));
    }

    #[test]
    fn close_clears_the_index() {
        let mut carousel = open_carousel(3, 1, 500.0);
        carousel.close();
        assert_eq!(carousel.open_index(), None);
    }

    #[test]
    fn shrinking_the_list_below_the_open_index_closes() {
        let mut carousel = open_carousel(5, 4, 500.0);
        carousel.set_len(3);
        assert_eq!(carousel.open_index(), None);
        assert_eq!(carousel.len(), 3);
    }

    #[test]
    fn five_image_album_swipe_scenario() {
        // Open image 2, swipe left twice, then once more: 2 → 3 → 4 → 0.
        let mut carousel = open_carousel(5, 2, 900.0);
        carousel.next();
        carousel.next();
        assert_eq!(carousel.open_index(), Some(4));
        carousel.next();
        assert_eq!(carousel.open_index(), Some(0));
        assert_abs_diff_eq!(carousel.offset_target(), 0.0);
    }
}
