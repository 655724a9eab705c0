// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composition order is fixed: the active page at the bottom, the floating
//! header above it, and the lightbox overlay on top while it is mounted.

use super::{App, Message, Screen};
use crate::catalog::Portfolio;
use crate::ui::design_tokens::{faded, opacity, palette, spacing, typography};
use crate::ui::header::{self, ViewContext as HeaderViewContext};
use crate::ui::pages::{about, album, albums, landing, videos};
use iced::widget::{Column, Container, Stack, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Renders the current application view based on the active screen.
pub fn view(app: &App) -> Element<'_, Message> {
    let Some(portfolio) = &app.portfolio else {
        return splash(app);
    };

    let page = view_page(app, portfolio);

    let mut stack = Stack::new().push(page).push(
        header::view(
            &app.header,
            HeaderViewContext {
                site_title: &portfolio.site_title,
                social: &portfolio.social,
                viewport: app.window_size,
            },
        )
        .map(Message::Header),
    );

    if app.swiper.is_mounted() {
        if let Some(album) = app.current_album() {
            stack = stack.push(
                app.swiper
                    .view(&album.images, app.window_size)
                    .map(Message::Swiper),
            );
        }
    }

    stack.into()
}

fn view_page<'a>(app: &'a App, portfolio: &'a Portfolio) -> Element<'a, Message> {
    match &app.screen {
        Screen::Landing => landing::view(
            &portfolio.site_title,
            portfolio.landing_cover.as_deref(),
            app.window_size,
        ),
        Screen::Albums => albums::view(&portfolio.albums_page, &portfolio.albums, app.window_size)
            .map(Message::Albums),
        Screen::Album(id) => match portfolio.album(id) {
            Some(album) => album::view(album, app.window_size).map(Message::Album),
            None => missing_album(),
        },
        Screen::Videos => videos::view(&portfolio.videos, app.window_size),
        Screen::About => about::view(
            &portfolio.about,
            portfolio.about_banner.as_deref(),
            &portfolio.social,
            app.window_size,
        ),
    }
}

/// Shown before the catalog finishes loading, or instead of the site when
/// loading failed.
fn splash(app: &App) -> Element<'_, Message> {
    let mut column = Column::new().spacing(spacing::MD);

    match &app.load_error {
        Some(error) => {
            column = column
                .push(
                    Text::new("Could not load the portfolio")
                        .size(typography::SUBTITLE)
                        .color(palette::GRAY_900),
                )
                .push(
                    Text::new(error.to_string())
                        .size(typography::BODY)
                        .color(palette::GRAY_700),
                );
        }
        None => {
            column = column.push(
                Text::new("Loading\u{2026}")
                    .size(typography::BODY)
                    .color(faded(palette::GRAY_700, opacity::MUTED)),
            );
        }
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}

fn missing_album<'a>() -> Element<'a, Message> {
    Container::new(
        Text::new("This album is no longer in the catalog.")
            .size(typography::BODY)
            .color(palette::GRAY_700),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(iced::alignment::Vertical::Center)
    .into()
}
