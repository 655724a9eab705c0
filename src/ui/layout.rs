// SPDX-License-Identifier: MPL-2.0
//! Responsive image layout helpers.
//!
//! Grid cells are sized before the image bytes arrive so nothing reflows
//! when an asset finishes loading.

/// Computes the display height that preserves an image's aspect ratio at the
/// given container width.
///
/// Callers re-invoke this whenever the container width changes; nothing is
/// cached. A zero `natural_width` is a caller contract violation — the
/// catalog guarantees positive dimensions at load time.
#[must_use]
// Allow cast_precision_loss: image dimensions are typically < 16M pixels;
// f32 is exact up to 2^24 (~16.7M), sufficient for any reasonable image.
#[allow(clippy::cast_precision_loss)]
pub fn fit_height(container_width: f32, natural_width: u32, natural_height: u32) -> f32 {
    assert!(
        natural_width > 0,
        "fit_height requires a positive natural width"
    );
    container_width * natural_height as f32 / natural_width as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn landscape_image_scales_down() {
        assert_abs_diff_eq!(fit_height(1000.0, 500, 250), 500.0);
    }

    #[test]
    fn portrait_image_scales_up() {
        assert_abs_diff_eq!(fit_height(300.0, 200, 400), 600.0);
    }

    #[test]
    fn zero_container_width_yields_zero_height() {
        assert_abs_diff_eq!(fit_height(0.0, 500, 250), 0.0);
    }

    #[test]
    fn square_image_keeps_container_width() {
        assert_abs_diff_eq!(fit_height(640.0, 1200, 1200), 640.0);
    }

    #[test]
    #[should_panic(expected = "positive natural width")]
    fn zero_natural_width_panics() {
        let _ = fit_height(1000.0, 0, 250);
    }
}
