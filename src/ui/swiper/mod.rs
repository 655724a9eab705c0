// SPDX-License-Identifier: MPL-2.0
//! Full-screen image swiper (lightbox) for browsing an album.
//!
//! The swiper overlays the album page, showing one image at a time over a
//! white backdrop. Three input channels converge on the same navigation
//! operations so wrap-around behavior is identical for all of them:
//! directional buttons, horizontal swipes, and the keyboard arrows.

pub mod carousel;

pub use carousel::Carousel;

use crate::animation::OverlayTransition;
use crate::catalog::ImageAsset;
use crate::ui::design_tokens::{faded, palette, sizing, spacing, typography};
use crate::ui::gesture::{Swipe, SwipeDetector};
use crate::ui::layout;
use iced::widget::scrollable::{AbsoluteOffset, Direction, Scrollbar};
use iced::widget::{button, container, Container, Image, Row, Scrollable, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    event, keyboard, mouse,
    widget::{image::Handle, operation, Id},
    Background, Color, Element, Length, Point, Size, Task, Theme,
};
use std::time::Duration;

/// Identifier of the horizontal image strip scrollable.
pub const SCROLLABLE_ID: &str = "swiper-image-strip";

/// Lightbox state: navigation, overlay transition, and gesture tracking.
#[derive(Debug)]
pub struct State {
    carousel: Carousel,
    transition: OverlayTransition,
    swipe: SwipeDetector,
    cursor_position: Option<Point>,
}

/// Messages consumed by [`State::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// Open the lightbox at an image index (from the album grid).
    OpenAt(usize),
    /// Dismiss the lightbox.
    Close,
    /// Advance to the next image (wraps).
    Next,
    /// Return to the previous image (wraps).
    Previous,
    /// Raw runtime event routed here while the lightbox is open.
    RawEvent(event::Event),
}

impl State {
    /// Creates a closed lightbox over `image_count` images.
    #[must_use]
    pub fn new(image_count: usize) -> Self {
        Self {
            carousel: Carousel::new(image_count),
            transition: OverlayTransition::new(),
            swipe: SwipeDetector::default(),
            cursor_position: None,
        }
    }

    /// Points the lightbox at a different album's image list.
    pub fn set_image_count(&mut self, image_count: usize) {
        self.carousel.set_len(image_count);
        if !self.carousel.is_open() {
            self.transition.hide();
        }
    }

    /// Currently open image index, if any.
    #[must_use]
    pub fn open_index(&self) -> Option<usize> {
        self.carousel.open_index()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.carousel.is_open()
    }

    /// Whether anything should be rendered (includes the leave fade).
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.transition.is_mounted()
    }

    /// Whether the lightbox still needs periodic ticks.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.carousel.is_animating() || self.transition.is_animating()
    }

    /// Propagates a viewport width change; the open image stays the open
    /// image, only the strip offset is recomputed.
    pub fn resize(&mut self, viewport_width: f32) -> Task<Message> {
        self.carousel.set_viewport_width(viewport_width);
        self.sync_strip()
    }

    /// Advances animations by `dt`, keeping the strip scroll in step with
    /// the offset spring.
    pub fn tick(&mut self, dt: Duration) -> Task<Message> {
        self.transition.advance(dt);
        if self.carousel.is_animating() {
            self.carousel.tick(dt);
            self.sync_strip()
        } else {
            Task::none()
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenAt(index) => {
                self.carousel.open_at(index);
                self.transition.show();
                self.sync_strip()
            }
            Message::Close => {
                // The strip keeps its offset so the open image fades out in
                // place.
                self.carousel.close();
                self.transition.hide();
                Task::none()
            }
            Message::Next => {
                self.carousel.next();
                self.sync_strip()
            }
            Message::Previous => {
                self.carousel.previous();
                self.sync_strip()
            }
            Message::RawEvent(event) => self.handle_raw_event(event),
        }
    }

    fn handle_raw_event(&mut self, event: event::Event) -> Task<Message> {
        if !self.transition.is_interactive() {
            return Task::none();
        }

        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(named),
                ..
            }) => match named {
                keyboard::key::Named::ArrowRight => self.update(Message::Next),
                keyboard::key::Named::ArrowLeft => self.update(Message::Previous),
                keyboard::key::Named::Escape => self.update(Message::Close),
                _ => Task::none(),
            },
            event::Event::Mouse(mouse_event) => match mouse_event {
                mouse::Event::CursorMoved { position } => {
                    self.cursor_position = Some(position);
                    Task::none()
                }
                mouse::Event::ButtonPressed(mouse::Button::Left) => {
                    if let Some(position) = self.cursor_position {
                        self.swipe.press(position);
                    }
                    Task::none()
                }
                mouse::Event::ButtonReleased(mouse::Button::Left) => {
                    let released_at = self.cursor_position;
                    match released_at.and_then(|position| self.swipe.release(position)) {
                        Some(Swipe::Left) => self.update(Message::Next),
                        Some(Swipe::Right) => self.update(Message::Previous),
                        None => Task::none(),
                    }
                }
                mouse::Event::CursorLeft => {
                    self.cursor_position = None;
                    self.swipe.cancel();
                    Task::none()
                }
                _ => Task::none(),
            },
            _ => Task::none(),
        }
    }

    /// Mirrors the animated offset onto the strip scrollable.
    fn sync_strip(&self) -> Task<Message> {
        operation::scroll_to(
            Id::new(SCROLLABLE_ID),
            AbsoluteOffset {
                x: -self.carousel.offset(),
                y: 0.0,
            },
        )
    }

    /// Renders the lightbox overlay. Callers only invoke this while
    /// [`State::is_mounted`] is true.
    pub fn view<'a>(&'a self, images: &'a [ImageAsset], viewport: Size) -> Element<'a, Message> {
        let opacity = self.transition.opacity();
        let interactive = self.transition.is_interactive();

        let strip = Scrollable::new(self.image_strip(images, viewport, opacity))
            .id(Id::new(SCROLLABLE_ID))
            .width(Length::Fill)
            .height(Length::Fill)
            .direction(Direction::Horizontal(Scrollbar::hidden()));

        let backdrop = Container::new(strip)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme: &Theme| iced::widget::container::Style {
                background: Some(Background::Color(Color {
                    a: opacity,
                    ..palette::WHITE
                })),
                ..Default::default()
            });

        let mut stack = Stack::new().push(backdrop);

        stack = stack.push(corner_control(
            close_button(opacity, interactive),
            Horizontal::Right,
            Vertical::Top,
        ));
        stack = stack.push(corner_control(
            caret_button("‹", Message::Previous, opacity, interactive),
            Horizontal::Left,
            Vertical::Center,
        ));
        stack = stack.push(corner_control(
            caret_button("›", Message::Next, opacity, interactive),
            Horizontal::Right,
            Vertical::Center,
        ));

        stack.into()
    }

    /// One full-viewport cell per image, pre-sized from the catalog's
    /// natural dimensions so nothing reflows once pixel data arrives.
    fn image_strip<'a>(
        &'a self,
        images: &'a [ImageAsset],
        viewport: Size,
        opacity: f32,
    ) -> Element<'a, Message> {
        let scale = self.transition.scale();
        let avail_width = (viewport.width - 2.0 * spacing::XXL).max(1.0) * scale;
        let avail_height = (viewport.height - 2.0 * spacing::XL).max(1.0) * scale;

        let mut row = Row::new();
        for asset in images {
            let mut width = avail_width;
            let mut height =
                layout::fit_height(width, asset.natural_width, asset.natural_height);
            if height > avail_height {
                width *= avail_height / height;
                height = avail_height;
            }

            let picture = Image::new(Handle::from_path(&asset.source))
                .width(Length::Fixed(width))
                .height(Length::Fixed(height))
                .opacity(opacity);

            row = row.push(
                Container::new(picture)
                    .width(Length::Fixed(viewport.width))
                    .height(Length::Fill)
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Center),
            );
        }

        row.into()
    }
}

fn close_button<'a>(opacity: f32, interactive: bool) -> Element<'a, Message> {
    let label = Text::new("close").size(typography::CAPTION);
    let mut close = button(label)
        .padding(spacing::XS)
        .style(text_button_style(faded(palette::GRAY_900, opacity)));
    if interactive {
        close = close.on_press(Message::Close);
    }
    close.into()
}

fn caret_button<'a>(
    glyph: &'a str,
    message: Message,
    opacity: f32,
    interactive: bool,
) -> Element<'a, Message> {
    let label = Text::new(glyph).size(typography::MENU_LINK);
    let mut caret = button(label)
        .width(Length::Fixed(sizing::CARET_BUTTON))
        .style(text_button_style(faded(palette::GRAY_400, opacity)));
    if interactive {
        caret = caret.on_press(message);
    }
    caret.into()
}

/// Places a control against a viewport edge without blocking the rest of the
/// overlay.
fn corner_control(
    control: Element<'_, Message>,
    align_x: Horizontal,
    align_y: Vertical,
) -> Element<'_, Message> {
    container(control)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(align_x)
        .align_y(align_y)
        .padding(spacing::SM)
        .into()
}

fn text_button_style(
    text_color: Color,
) -> impl Fn(&Theme, iced::widget::button::Status) -> iced::widget::button::Style {
    move |_theme, status| {
        let color = match status {
            iced::widget::button::Status::Hovered => Color {
                a: text_color.a,
                ..palette::GRAY_700
            },
            _ => text_color,
        };
        iced::widget::button::Style {
            background: None,
            text_color: color,
            ..iced::widget::button::Style::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Phase;

    fn pressed(named: keyboard::key::Named) -> event::Event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            modified_key: keyboard::Key::Named(named),
            physical_key: keyboard::key::Physical::Unidentified(
                keyboard::key::NativeCode::Unidentified,
            ),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        })
    }

    fn open_state(len: usize, index: usize) -> State {
        let mut state = State::new(len);
        let _ = state.resize(1000.0);
        let _ = state.update(Message::OpenAt(index));
        state
    }

    #[test]
    fn opening_shows_the_overlay_at_the_index() {
        let state = open_state(5, 2);
        assert_eq!(state.open_index(), Some(2));
        assert!(state.is_mounted());
        assert!(state.is_animating());
    }

    #[test]
    fn close_starts_the_leave_transition_but_stays_mounted() {
        let mut state = open_state(3, 1);
        let _ = state.update(Message::Close);
        assert_eq!(state.open_index(), None);
        assert!(state.is_mounted());

        let _ = state.tick(Duration::from_millis(300));
        assert!(!state.is_mounted());
        assert_eq!(state.transition.phase(), Phase::Hidden);
    }

    #[test]
    fn buttons_and_keyboard_and_swipe_share_wraparound() {
        // Button channel.
        let mut state = open_state(3, 2);
        let _ = state.update(Message::Next);
        assert_eq!(state.open_index(), Some(0));

        // Keyboard channel.
        let mut state = open_state(3, 0);
        let _ = state.update(Message::RawEvent(pressed(keyboard::key::Named::ArrowLeft)));
        assert_eq!(state.open_index(), Some(2));

        // Swipe channel: leftward drag advances.
        let mut state = open_state(3, 2);
        let _ = state.update(Message::RawEvent(event::Event::Mouse(
            mouse::Event::CursorMoved {
                position: Point::new(600.0, 300.0),
            },
        )));
        let _ = state.update(Message::RawEvent(event::Event::Mouse(
            mouse::Event::ButtonPressed(mouse::Button::Left),
        )));
        let _ = state.update(Message::RawEvent(event::Event::Mouse(
            mouse::Event::CursorMoved {
                position: Point::new(400.0, 310.0),
            },
        )));
        let _ = state.update(Message::RawEvent(event::Event::Mouse(
            mouse::Event::ButtonReleased(mouse::Button::Left),
        )));
        assert_eq!(state.open_index(), Some(0));
    }

    #[test]
    fn escape_closes_the_lightbox() {
        let mut state = open_state(3, 1);
        let _ = state.update(Message::RawEvent(pressed(keyboard::key::Named::Escape)));
        assert_eq!(state.open_index(), None);
    }

    #[test]
    fn input_is_ignored_while_hidden() {
        let mut state = State::new(3);
        let _ = state.resize(1000.0);
        let _ = state.update(Message::RawEvent(pressed(keyboard::key::Named::ArrowRight)));
        assert_eq!(state.open_index(), None);
    }

    #[test]
    fn resize_keeps_the_open_image() {
        let mut state = open_state(4, 3);
        let _ = state.resize(640.0);
        assert_eq!(state.open_index(), Some(3));
        assert_eq!(state.carousel.offset_target(), -(640.0 * 3.0));
    }

    #[test]
    fn five_image_swipe_session_wraps_to_the_start() {
        let mut state = open_state(5, 2);
        for _ in 0..3 {
            let _ = state.update(Message::Next);
        }
        assert_eq!(state.open_index(), Some(0));
    }

    #[test]
    fn shrinking_the_album_closes_an_out_of_range_lightbox() {
        let mut state = open_state(5, 4);
        state.set_image_count(2);
        assert_eq!(state.open_index(), None);
    }
}
