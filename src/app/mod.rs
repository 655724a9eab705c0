// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the pages, the header,
//! and the lightbox.
//!
//! The `App` struct owns the loaded portfolio plus the two stateful UI
//! components and translates their events into navigation. Animation ticks
//! are only subscribed to while something is actually moving.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::catalog::Portfolio;
use crate::config::{self, Config};
use crate::error::Error;
use crate::ui::header;
use crate::ui::swiper;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

/// Manifest file loaded when neither the CLI nor the config names one.
pub const DEFAULT_CATALOG_FILE: &str = "portfolio.toml";

/// Root Iced application state.
pub struct App {
    config: Config,
    portfolio: Option<Portfolio>,
    load_error: Option<Error>,
    screen: Screen,
    header: header::State,
    swiper: swiper::State,
    window_size: Size,
    last_tick: Option<Instant>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("has_portfolio", &self.portfolio.is_some())
            .finish()
    }
}

/// Builds the window settings from the persisted window size.
pub fn window_settings(config: &Config) -> window::Settings {
    let width = config
        .window_width
        .unwrap_or(config::DEFAULT_WINDOW_WIDTH)
        .max(MIN_WINDOW_WIDTH);
    let height = config
        .window_height
        .unwrap_or(config::DEFAULT_WINDOW_HEIGHT)
        .max(MIN_WINDOW_HEIGHT);

    window::Settings {
        size: Size::new(width, height),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let window = window_settings(&load_config(&flags));

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window)
        .subscription(App::subscription)
        .run()
}

fn load_config(flags: &Flags) -> Config {
    let loaded = match &flags.config_dir {
        Some(dir) => {
            let mut path = PathBuf::from(dir);
            path.push("settings.toml");
            config::load_from_path(&path)
        }
        None => config::load(),
    };

    loaded.unwrap_or_else(|err| {
        eprintln!("Warning: could not load settings, using defaults: {err}");
        Config::default()
    })
}

impl App {
    /// Initializes application state and kicks off asynchronous catalog
    /// loading.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = load_config(&flags);

        let catalog_path = flags
            .catalog
            .clone()
            .or_else(|| config.catalog_path.clone())
            .map_or_else(|| PathBuf::from(DEFAULT_CATALOG_FILE), PathBuf::from);

        let screen = Screen::Landing;
        let window_size = Size::new(
            config.window_width.unwrap_or(config::DEFAULT_WINDOW_WIDTH),
            config
                .window_height
                .unwrap_or(config::DEFAULT_WINDOW_HEIGHT),
        );

        let app = App {
            header: header::State::new(screen.ambient()),
            swiper: swiper::State::new(0),
            config,
            portfolio: None,
            load_error: None,
            screen,
            window_size,
            last_tick: None,
        };

        // Manifest parsing probes image headers on disk; keep that off the
        // UI thread.
        let load = Task::perform(
            async move {
                match tokio::task::spawn_blocking(move || Portfolio::load_from_path(&catalog_path))
                    .await
                {
                    Ok(result) => result,
                    Err(err) => Err(Error::Io(err.to_string())),
                }
            },
            Message::CatalogLoaded,
        );

        (app, load)
    }

    fn title(&self) -> String {
        match &self.portfolio {
            Some(portfolio) => portfolio.site_title.clone(),
            None => String::from("Iced Folio"),
        }
    }

    #[allow(clippy::unused_self)]
    fn theme(&self) -> Theme {
        Theme::Light
    }

    /// Album backing the current screen, if the catalog is loaded and the
    /// screen is an album page.
    fn current_album(&self) -> Option<&crate::catalog::Album> {
        match (&self.screen, &self.portfolio) {
            (Screen::Album(id), Some(portfolio)) => portfolio.album(id),
            _ => None,
        }
    }

    fn is_animating(&self) -> bool {
        self.header.is_animating() || self.swiper.is_animating()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(self.swiper.is_open()),
            subscription::create_tick_subscription(self.is_animating()),
        ])
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}
