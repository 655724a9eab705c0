// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::catalog::Portfolio;
use crate::error::Error;
use crate::ui::header;
use crate::ui::pages::{album, albums};
use crate::ui::swiper;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Swiper(swiper::Message),
    Albums(albums::Message),
    Album(album::Message),
    /// Switch the active screen.
    Navigate(Screen),
    /// Periodic tick driving the spring and transition animations.
    Tick(Instant),
    /// Raw runtime event (keyboard, mouse, window).
    RawEvent(iced::event::Event),
    /// Result of loading and validating the portfolio manifest.
    CatalogLoaded(Result<Portfolio, Error>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional path to the portfolio manifest (`portfolio.toml`).
    pub catalog: Option<String>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
}
