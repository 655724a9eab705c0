// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the portfolio's visual language.
//!
//! The palette is deliberately monochrome: photography carries the color,
//! the chrome stays out of the way.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.6, 0.6, 0.6);
    pub const GRAY_200: Color = Color::from_rgb(0.8, 0.8, 0.8);
    pub const GRAY_100: Color = Color::from_rgb(0.93, 0.93, 0.93);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Fully transparent.
    pub const NONE: f32 = 0.0;
    /// Muted secondary text.
    pub const MUTED: f32 = 0.55;
    /// Fully opaque.
    pub const FULL: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const CAPTION: f32 = 13.0;
    pub const BODY: f32 = 16.0;
    pub const SUBTITLE: f32 = 24.0;
    pub const MENU_LINK: f32 = 30.0;
    pub const TITLE: f32 = 56.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Hamburger bar width.
    pub const MENU_BAR_WIDTH: f32 = 26.0;
    /// Hamburger bar thickness.
    pub const MENU_BAR_HEIGHT: f32 = 2.0;
    /// Vertical gap between hamburger bars.
    pub const MENU_BAR_GAP: f32 = 6.0;
    /// Caret button hit area in the lightbox.
    pub const CARET_BUTTON: f32 = 44.0;
}

/// Returns `color` with its alpha multiplied by `opacity`.
#[must_use]
pub fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faded_multiplies_alpha() {
        let color = faded(palette::BLACK, 0.5);
        assert_eq!(color.a, 0.5);
    }

    #[test]
    fn faded_clamps_opacity() {
        let color = faded(palette::WHITE, 4.0);
        assert_eq!(color.a, 1.0);
    }
}
