// SPDX-License-Identifier: MPL-2.0
//! Page views. Each page is a pure function over catalog data; all state
//! lives in the application and the header/lightbox components.

pub mod about;
pub mod album;
pub mod albums;
pub mod landing;
pub mod videos;

use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{Column, Container, Space, Text};
use iced::{alignment::Horizontal, Element, Length, Padding};

/// Vertical room reserved for the floating header bar.
pub const HEADER_CLEARANCE: f32 = 96.0;

/// Standard page scaffold: header clearance, centered column, page title.
fn page_frame<'a, M: 'a>(title: &'a str, content: Element<'a, M>) -> Element<'a, M> {
    let column = Column::new()
        .push(Space::new().height(Length::Fixed(HEADER_CLEARANCE)))
        .push(
            Text::new(title)
                .size(typography::TITLE)
                .color(palette::GRAY_900),
        )
        .push(Space::new().height(Length::Fixed(spacing::XL)))
        .push(content)
        .max_width(1200.0)
        .spacing(spacing::XS);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(Padding::new(spacing::XL).top(0.0))
        .into()
}
