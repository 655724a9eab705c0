// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::subscription::TICK_INTERVAL;
use super::{App, Message, Screen};
use crate::config;
use crate::ui::header::Event as HeaderEvent;
use crate::ui::pages::{album, albums};
use crate::ui::swiper;
use iced::{event, window, Task};
use std::time::{Duration, Instant};

/// Upper bound on a single animation step so springs stay stable after the
/// event loop stalls (window drag, suspend).
const MAX_TICK: Duration = Duration::from_millis(100);

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Header(message) => {
                match self.header.update(message) {
                    HeaderEvent::None => Task::none(),
                    HeaderEvent::Navigate(link) => self.navigate(Screen::from(link)),
                }
            }
            Message::Swiper(message) => self.swiper.update(message).map(Message::Swiper),
            Message::Albums(albums::Message::AlbumPressed(id)) => {
                self.navigate(Screen::Album(id))
            }
            Message::Album(album::Message::ImagePressed(index)) => {
                // Stale presses can outlive a catalog reload; never hand the
                // lightbox an out-of-range index.
                let count = self.current_album().map_or(0, |album| album.images.len());
                if index < count {
                    self.swiper
                        .update(swiper::Message::OpenAt(index))
                        .map(Message::Swiper)
                } else {
                    Task::none()
                }
            }
            Message::Navigate(screen) => self.navigate(screen),
            Message::Tick(now) => self.tick(now),
            Message::RawEvent(event) => self.handle_raw_event(event),
            Message::CatalogLoaded(Ok(portfolio)) => {
                if let Screen::Album(id) = &self.screen {
                    let count = portfolio
                        .album(id)
                        .map_or(0, |album| album.images.len());
                    self.swiper.set_image_count(count);
                }
                self.portfolio = Some(portfolio);
                self.load_error = None;
                Task::none()
            }
            Message::CatalogLoaded(Err(error)) => {
                eprintln!("Error: failed to load the portfolio catalog: {error}");
                self.load_error = Some(error);
                Task::none()
            }
        }
    }

    /// Switches the active screen and re-baselines the header.
    fn navigate(&mut self, screen: Screen) -> Task<Message> {
        if screen == self.screen {
            return Task::none();
        }

        self.screen = screen;
        self.header.set_ambient(self.screen.ambient());

        let count = match (&self.screen, &self.portfolio) {
            (Screen::Album(id), Some(portfolio)) => portfolio
                .album(id)
                .map_or(0, |album| album.images.len()),
            _ => 0,
        };
        self.swiper.set_image_count(count);
        Task::none()
    }

    fn tick(&mut self, now: Instant) -> Task<Message> {
        let dt = match self.last_tick {
            Some(last) => now.saturating_duration_since(last).min(MAX_TICK),
            None => TICK_INTERVAL,
        };
        self.last_tick = Some(now);

        self.header.tick(dt);
        let task = self.swiper.tick(dt).map(Message::Swiper);

        if !self.is_animating() {
            // The subscription shuts off after this frame; the next burst
            // starts a fresh timebase.
            self.last_tick = None;
        }

        task
    }

    fn handle_raw_event(&mut self, event: event::Event) -> Task<Message> {
        if let event::Event::Window(window::Event::Resized(size)) = event {
            // In-memory only: an interactive resize emits dozens of events
            // per second. The settings file is written once, at close.
            self.window_size = size;
            self.config.window_width = Some(size.width);
            self.config.window_height = Some(size.height);
            return self.swiper.resize(size.width).map(Message::Swiper);
        }

        if let event::Event::Window(window::Event::CloseRequested) = event {
            if let Err(err) = config::save(&self.config) {
                eprintln!("Warning: could not persist window size: {err}");
            }
            return Task::none();
        }

        if self.swiper.is_mounted() {
            return self
                .swiper
                .update(swiper::Message::RawEvent(event))
                .map(Message::Swiper);
        }

        Task::none()
    }
}
