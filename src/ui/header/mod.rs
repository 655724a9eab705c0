// SPDX-License-Identifier: MPL-2.0
//! Site header: logo, contact shortcut, hamburger button, and the slide-in
//! menu panel.
//!
//! The header floats above every page. All of its animated properties hang
//! off the [`Disclosure`] controller; this module only maps messages into
//! controller commands and animated values into widgets.

pub mod disclosure;

pub use disclosure::{Ambient, Disclosure, Tone};

use crate::catalog::SocialLink;
use crate::ui::design_tokens::{faded, palette, sizing, spacing, typography};
use disclosure::{BAR_ROTATION_OPEN, BAR_SHIFT_OPEN};
use iced::widget::{button, Column, Container, Row, Space, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Background, Color, Element, Length, Size, Theme,
};
use std::time::Duration;

/// Destinations reachable from the menu panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Home,
    Albums,
    Videos,
    About,
}

impl PageLink {
    /// Display label used in the menu panel.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PageLink::Home => "Home",
            PageLink::Albums => "Albums",
            PageLink::Videos => "Videos",
            PageLink::About => "About",
        }
    }
}

/// All panel links, in menu order.
pub const PAGE_LINKS: [PageLink; 4] = [
    PageLink::Home,
    PageLink::Albums,
    PageLink::Videos,
    PageLink::About,
];

/// Header state: the disclosure controller.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    disclosure: Disclosure,
}

/// Messages emitted by the header widgets.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    ToggleMenu,
    LogoPressed,
    ContactPressed,
    LinkPressed(PageLink),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(PageLink),
}

impl State {
    /// Creates a header resting at the given ambient baseline.
    #[must_use]
    pub fn new(ambient: Ambient) -> Self {
        Self {
            disclosure: Disclosure::new(ambient),
        }
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.disclosure.is_open()
    }

    /// Updates the ambient baseline when the active page changes.
    pub fn set_ambient(&mut self, ambient: Ambient) {
        self.disclosure.set_ambient(ambient);
    }

    /// Advances the header animations.
    pub fn tick(&mut self, dt: Duration) {
        self.disclosure.tick(dt);
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.disclosure.is_animating()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ToggleMenu => {
                self.disclosure.toggle();
                Event::None
            }
            Message::LogoPressed => {
                self.disclosure.close();
                Event::Navigate(PageLink::Home)
            }
            Message::ContactPressed => {
                self.disclosure.close();
                Event::Navigate(PageLink::About)
            }
            Message::LinkPressed(link) => {
                self.disclosure.close();
                Event::Navigate(link)
            }
        }
    }
}

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub site_title: &'a str,
    pub social: &'a [SocialLink],
    pub viewport: Size,
}

/// Renders the menu panel and the header bar, panel underneath.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut stack = Stack::new();

    let panel_offset = state.disclosure.panel_offset();
    if panel_offset < 1.0 {
        stack = stack.push(menu_panel(&ctx, panel_offset));
    }

    stack = stack.push(header_bar(state, &ctx));
    stack.into()
}

fn header_bar<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let right_side = Row::new()
        .spacing(spacing::XL)
        .align_y(Vertical::Center)
        .push(contact_control(state))
        .push(hamburger_button(state));

    let bar = Row::new()
        .align_y(Vertical::Center)
        .push(logo(state, ctx.site_title))
        .push(Space::new().width(Length::Fill))
        .push(right_side);

    Container::new(bar)
        .width(Length::Fill)
        .padding([spacing::MD, spacing::LG])
        .into()
}

fn logo<'a>(state: &'a State, site_title: &'a str) -> Element<'a, Message> {
    let color = faded(state.disclosure.logo_color(), state.disclosure.logo_opacity());
    let label = Text::new(site_title.to_uppercase())
        .size(typography::BODY)
        .color(color);

    let mut logo = button(label).padding(0.0).style(plain_button_style());
    if state.disclosure.logo_interactive() {
        logo = logo.on_press(Message::LogoPressed);
    }
    logo.into()
}

fn contact_control(state: &State) -> Element<'_, Message> {
    let color = faded(palette::GRAY_700, state.disclosure.user_menu_opacity());
    let label = Text::new("contact").size(typography::CAPTION).color(color);

    let mut contact = button(label).padding(0.0).style(plain_button_style());
    if state.disclosure.user_menu_interactive() {
        contact = contact.on_press(Message::ContactPressed);
    }
    contact.into()
}

/// Fractions of the hamburger's two motions: vertical bar travel (collapses
/// the gaps) and bar rotation (cross-fades the bars into the ✕ glyph).
fn hamburger_progress(disclosure: &Disclosure) -> (f32, f32) {
    (
        (disclosure.bar_shift() / BAR_SHIFT_OPEN).clamp(0.0, 1.0),
        (disclosure.bar_rotation() / BAR_ROTATION_OPEN).clamp(0.0, 1.0),
    )
}

/// The hamburger button. The outer bars close up as their travel spring
/// progresses and cross-fade into a ✕ glyph as the rotation spring does;
/// the middle bar fades on its own spring.
fn hamburger_button(state: &State) -> Element<'_, Message> {
    let (travel, rotation) = hamburger_progress(&state.disclosure);
    let bar_color = state.disclosure.bar_color();
    let outer_opacity = 1.0 - rotation;

    let bars = Column::new()
        .spacing(sizing::MENU_BAR_GAP * (1.0 - travel))
        .push(menu_bar(faded(bar_color, outer_opacity)))
        .push(menu_bar(faded(
            bar_color,
            state.disclosure.mid_bar_opacity().min(outer_opacity),
        )))
        .push(menu_bar(faded(bar_color, outer_opacity)));

    let glyph = Text::new("✕")
        .size(typography::SUBTITLE)
        .color(faded(bar_color, rotation));

    let icon = Stack::new()
        .width(Length::Fixed(sizing::MENU_BAR_WIDTH))
        .height(Length::Fixed(sizing::MENU_BAR_WIDTH))
        .push(centered(bars.into()))
        .push(centered(glyph.into()));

    button(icon)
        .padding(spacing::XS)
        .style(plain_button_style())
        .on_press(Message::ToggleMenu)
        .into()
}

fn menu_bar<'a>(color: Color) -> Element<'a, Message> {
    Container::new(
        Space::new()
            .width(Length::Fixed(sizing::MENU_BAR_WIDTH))
            .height(Length::Fixed(sizing::MENU_BAR_HEIGHT)),
    )
    .style(move |_theme: &Theme| iced::widget::container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    })
    .into()
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

/// The white panel sliding in from the right, carrying page and social
/// links.
fn menu_panel<'a>(ctx: &ViewContext<'a>, panel_offset: f32) -> Element<'a, Message> {
    let links = PAGE_LINKS.iter().fold(
        Column::new().spacing(spacing::LG),
        |column, link| {
            column.push(
                button(
                    Text::new(link.label())
                        .size(typography::MENU_LINK)
                        .color(palette::BLACK),
                )
                .padding(0.0)
                .style(plain_button_style())
                .on_press(Message::LinkPressed(*link)),
            )
        },
    );

    let contact = ctx.social.iter().fold(
        Column::new().spacing(spacing::MD),
        |column, link| {
            column.push(
                Row::new()
                    .spacing(spacing::MD)
                    .push(
                        Text::new(link.label.as_str())
                            .size(typography::BODY)
                            .color(palette::GRAY_400),
                    )
                    .push(Text::new(link.value.as_str()).size(typography::BODY)),
            )
        },
    );

    let content = Column::new()
        .spacing(spacing::XXL)
        .push(Space::new().height(Length::Fixed(spacing::XXL * 2.0)))
        .push(links)
        .push(contact);

    let panel = Container::new(content)
        .width(Length::Fixed(ctx.viewport.width))
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .style(|_theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(palette::WHITE)),
            ..Default::default()
        });

    // Translate by padding the panel off to the right; 0 offset is fully
    // shown, 1 is fully off-screen.
    Row::new()
        .push(Space::new().width(Length::Fixed(
            (panel_offset * ctx.viewport.width).max(0.0),
        )))
        .push(panel)
        .into()
}

fn plain_button_style(
) -> impl Fn(&Theme, iced::widget::button::Status) -> iced::widget::button::Style {
    |_theme, _status| iced::widget::button::Style {
        background: None,
        text_color: palette::GRAY_900,
        ..iced::widget::button::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_then_closes() {
        let mut state = State::new(Ambient::default());
        assert_eq!(state.update(Message::ToggleMenu), Event::None);
        assert!(state.is_menu_open());
        assert_eq!(state.update(Message::ToggleMenu), Event::None);
        assert!(!state.is_menu_open());
    }

    #[test]
    fn link_press_closes_the_menu_and_navigates() {
        let mut state = State::new(Ambient::default());
        state.update(Message::ToggleMenu);

        let event = state.update(Message::LinkPressed(PageLink::Albums));
        assert_eq!(event, Event::Navigate(PageLink::Albums));
        assert!(!state.is_menu_open());
    }

    #[test]
    fn logo_navigates_home() {
        let mut state = State::new(Ambient::default());
        assert_eq!(
            state.update(Message::LogoPressed),
            Event::Navigate(PageLink::Home)
        );
    }

    #[test]
    fn contact_navigates_to_about() {
        let mut state = State::new(Ambient::default());
        assert_eq!(
            state.update(Message::ContactPressed),
            Event::Navigate(PageLink::About)
        );
    }

    #[test]
    fn hamburger_motions_follow_both_springs() {
        let mut state = State::new(Ambient::default());
        assert_eq!(hamburger_progress(&state.disclosure), (0.0, 0.0));

        state.update(Message::ToggleMenu);
        for _ in 0..2000 {
            state.tick(Duration::from_millis(16));
            if !state.is_animating() {
                break;
            }
        }
        // One more tick locks the settled springs onto their targets.
        state.tick(Duration::from_millis(16));

        let (travel, rotation) = hamburger_progress(&state.disclosure);
        assert_eq!(travel, 1.0);
        assert_eq!(rotation, 1.0);
    }

    #[test]
    fn view_builds_for_closed_and_open_menus() {
        let ctx = || ViewContext {
            site_title: "Folio",
            social: &[],
            viewport: Size::new(800.0, 600.0),
        };

        let mut state = State::new(Ambient::default());
        let _ = view(&state, ctx());

        state.update(Message::ToggleMenu);
        state.tick(Duration::from_millis(16));
        let _ = view(&state, ctx());
    }

    #[test]
    fn opening_animates_until_settled() {
        let mut state = State::new(Ambient {
            tone: Tone::White,
            is_landing: true,
        });
        state.update(Message::ToggleMenu);
        assert!(state.is_animating());

        for _ in 0..2000 {
            state.tick(Duration::from_millis(16));
            if !state.is_animating() {
                break;
            }
        }
        assert!(!state.is_animating());
    }
}
