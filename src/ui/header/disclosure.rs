// SPDX-License-Identifier: MPL-2.0
//! Disclosure state for the site menu.
//!
//! A single boolean — the menu is open or it is not — drives four
//! independently animated property groups: the slide-in panel, the logo,
//! the user menu, and the hamburger bars. Targets are always recomputed
//! from `is_open` plus the ambient page baseline on every transition
//! request, so the groups can never drift apart. All groups share one
//! spring profile and settle together.

use crate::animation::{ColorSpring, Spring};
use crate::ui::design_tokens::{opacity, palette};
use iced::Color;
use std::time::Duration;

/// Rotation, in degrees, of the outer hamburger bars when the menu is open.
pub const BAR_ROTATION_OPEN: f32 = 45.0;
/// Vertical travel, in logical pixels, of the outer hamburger bars when the
/// menu is open (top bar moves down, bottom bar up).
pub const BAR_SHIFT_OPEN: f32 = 8.0;

/// Foreground tone the page renders the header with at rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    /// Dark chrome over light pages.
    #[default]
    Black,
    /// Light chrome over photographic backgrounds.
    White,
}

impl Tone {
    /// The resting foreground color for this tone.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Tone::Black => palette::BLACK,
            Tone::White => palette::WHITE,
        }
    }
}

/// Page-level context determining the header's resting appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ambient {
    pub tone: Tone,
    /// The landing page hides the logo and user menu at rest.
    pub is_landing: bool,
}

/// The full set of animation targets derived from one `is_open` value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuTargets {
    /// Panel translation as a fraction of its width: 1 = off-screen right,
    /// 0 = fully shown.
    pub panel_offset: f32,
    /// Logo color; forced black while the menu panel (white) is open.
    pub logo_color: Color,
    pub logo_opacity: f32,
    pub user_menu_opacity: f32,
    pub user_menu_interactive: bool,
    /// Rotation of the top bar in degrees; the bottom bar mirrors it.
    pub bar_rotation: f32,
    /// Downward travel of the top bar; the bottom bar mirrors it.
    pub bar_shift: f32,
    pub bar_color: Color,
    pub mid_bar_opacity: f32,
}

/// Computes all animation targets for a disclosure state and ambient
/// baseline. Pure; called on every transition request.
#[must_use]
pub fn targets(is_open: bool, ambient: Ambient) -> MenuTargets {
    if is_open {
        MenuTargets {
            panel_offset: 0.0,
            logo_color: palette::BLACK,
            logo_opacity: opacity::FULL,
            user_menu_opacity: opacity::FULL,
            user_menu_interactive: true,
            bar_rotation: BAR_ROTATION_OPEN,
            bar_shift: BAR_SHIFT_OPEN,
            bar_color: palette::BLACK,
            mid_bar_opacity: opacity::NONE,
        }
    } else {
        let resting_opacity = if ambient.is_landing {
            opacity::NONE
        } else {
            opacity::FULL
        };
        MenuTargets {
            panel_offset: 1.0,
            logo_color: ambient.tone.color(),
            logo_opacity: resting_opacity,
            user_menu_opacity: resting_opacity,
            user_menu_interactive: !ambient.is_landing,
            bar_rotation: 0.0,
            bar_shift: 0.0,
            bar_color: ambient.tone.color(),
            mid_bar_opacity: opacity::FULL,
        }
    }
}

/// The disclosure controller: one source of truth (`is_open`) plus the
/// springs carrying each derived property toward its target.
#[derive(Debug, Clone, PartialEq)]
pub struct Disclosure {
    is_open: bool,
    ambient: Ambient,
    panel_offset: Spring,
    logo_color: ColorSpring,
    logo_opacity: Spring,
    user_menu_opacity: Spring,
    user_menu_interactive: bool,
    bar_rotation: Spring,
    bar_shift: Spring,
    bar_color: ColorSpring,
    mid_bar_opacity: Spring,
}

impl Disclosure {
    /// Creates a closed disclosure resting at the ambient baseline.
    #[must_use]
    pub fn new(ambient: Ambient) -> Self {
        let resting = targets(false, ambient);
        Self {
            is_open: false,
            ambient,
            panel_offset: Spring::new(resting.panel_offset),
            logo_color: ColorSpring::new(resting.logo_color),
            logo_opacity: Spring::new(resting.logo_opacity),
            user_menu_opacity: Spring::new(resting.user_menu_opacity),
            user_menu_interactive: resting.user_menu_interactive,
            bar_rotation: Spring::new(resting.bar_rotation),
            bar_shift: Spring::new(resting.bar_shift),
            bar_color: ColorSpring::new(resting.bar_color),
            mid_bar_opacity: Spring::new(resting.mid_bar_opacity),
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn ambient(&self) -> Ambient {
        self.ambient
    }

    /// Opens the menu. Idempotent: reissuing the same targets has no
    /// observable effect.
    pub fn open(&mut self) {
        self.is_open = true;
        self.retarget_all();
    }

    /// Closes the menu, restoring the baseline derived from the ambient
    /// inputs stored at this moment.
    pub fn close(&mut self) {
        self.is_open = false;
        self.retarget_all();
    }

    /// Dispatches exactly one of `open`/`close` based on the current state.
    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Updates the ambient baseline (the embedding page changed). While
    /// closed, the header animates toward the new baseline; while open, the
    /// new baseline only takes effect at the next `close()`.
    pub fn set_ambient(&mut self, ambient: Ambient) {
        if self.ambient == ambient {
            return;
        }
        self.ambient = ambient;
        if !self.is_open {
            self.retarget_all();
        }
    }

    /// The targets currently being animated toward.
    #[must_use]
    pub fn current_targets(&self) -> MenuTargets {
        targets(self.is_open, self.ambient)
    }

    /// Advances every property spring by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.panel_offset.tick(dt);
        self.logo_color.tick(dt);
        self.logo_opacity.tick(dt);
        self.user_menu_opacity.tick(dt);
        self.bar_rotation.tick(dt);
        self.bar_shift.tick(dt);
        self.bar_color.tick(dt);
        self.mid_bar_opacity.tick(dt);
    }

    /// Whether any property spring still needs ticks.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !(self.panel_offset.is_settled()
            && self.logo_color.is_settled()
            && self.logo_opacity.is_settled()
            && self.user_menu_opacity.is_settled()
            && self.bar_rotation.is_settled()
            && self.bar_shift.is_settled()
            && self.bar_color.is_settled()
            && self.mid_bar_opacity.is_settled())
    }

    // Current animated values, read by the view each frame.

    #[must_use]
    pub fn panel_offset(&self) -> f32 {
        self.panel_offset.value()
    }

    #[must_use]
    pub fn logo_color(&self) -> Color {
        self.logo_color.value()
    }

    #[must_use]
    pub fn logo_opacity(&self) -> f32 {
        self.logo_opacity.value().clamp(0.0, 1.0)
    }

    /// Whether the logo links home. Disabled on the landing page while the
    /// menu is closed (the page already is home, and the logo is invisible).
    #[must_use]
    pub fn logo_interactive(&self) -> bool {
        self.is_open || !self.ambient.is_landing
    }

    #[must_use]
    pub fn user_menu_opacity(&self) -> f32 {
        self.user_menu_opacity.value().clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn user_menu_interactive(&self) -> bool {
        self.user_menu_interactive
    }

    #[must_use]
    pub fn bar_rotation(&self) -> f32 {
        self.bar_rotation.value()
    }

    #[must_use]
    pub fn bar_shift(&self) -> f32 {
        self.bar_shift.value()
    }

    #[must_use]
    pub fn bar_color(&self) -> Color {
        self.bar_color.value()
    }

    #[must_use]
    pub fn mid_bar_opacity(&self) -> f32 {
        self.mid_bar_opacity.value().clamp(0.0, 1.0)
    }

    fn retarget_all(&mut self) {
        let targets = targets(self.is_open, self.ambient);
        self.panel_offset.retarget(targets.panel_offset);
        self.logo_color.retarget(targets.logo_color);
        self.logo_opacity.retarget(targets.logo_opacity);
        self.user_menu_opacity.retarget(targets.user_menu_opacity);
        self.user_menu_interactive = targets.user_menu_interactive;
        self.bar_rotation.retarget(targets.bar_rotation);
        self.bar_shift.retarget(targets.bar_shift);
        self.bar_color.retarget(targets.bar_color);
        self.mid_bar_opacity.retarget(targets.mid_bar_opacity);
    }
}
