// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are only routed while the lightbox can use them; window
//! resizes are always forwarded so layout arithmetic stays current.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Animation frame cadence, close enough to 60 Hz.
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Creates the native event subscription.
///
/// While the lightbox is interactive it consumes keyboard navigation and
/// pointer gestures, so every ignored event is forwarded. Otherwise only
/// window resizes are of interest.
pub fn create_event_subscription(lightbox_active: bool) -> Subscription<Message> {
    if lightbox_active {
        event::listen_with(|event, status, _window_id| {
            if is_window_event(&event) {
                return Some(Message::RawEvent(event));
            }

            match status {
                event::Status::Ignored => Some(Message::RawEvent(event)),
                event::Status::Captured => None,
            }
        })
    } else {
        event::listen_with(|event, _status, _window_id| {
            if is_window_event(&event) {
                return Some(Message::RawEvent(event));
            }
            None
        })
    }
}

/// Window events the application always consumes: resizes feed the layout
/// arithmetic, close requests trigger settings persistence.
fn is_window_event(event: &event::Event) -> bool {
    matches!(
        event,
        event::Event::Window(
            iced::window::Event::Resized(_) | iced::window::Event::CloseRequested
        )
    )
}

/// Creates a periodic tick subscription while any spring or transition is
/// still moving. Idle applications subscribe to nothing.
pub fn create_tick_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
