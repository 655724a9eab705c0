// SPDX-License-Identifier: MPL-2.0
//! Landing page: a full-bleed cover photograph with the site title over it.

use crate::ui::design_tokens::{palette, typography};
use iced::widget::{image::Handle, Container, Image, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Background, Element, Length, Size, Theme,
};
use std::path::Path;

pub fn view<'a, M: 'a>(
    site_title: &'a str,
    cover: Option<&'a Path>,
    viewport: Size,
) -> Element<'a, M> {
    let mut stack = Stack::new();

    if let Some(cover) = cover {
        let picture = Image::new(Handle::from_path(cover))
            .content_fit(iced::ContentFit::Cover)
            .width(Length::Fixed(viewport.width))
            .height(Length::Fixed(viewport.height));
        stack = stack.push(picture);
    } else {
        // No cover configured: dark backdrop so the white chrome stays
        // legible.
        stack = stack.push(
            Container::new(Text::new(""))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(|_theme: &Theme| iced::widget::container::Style {
                    background: Some(Background::Color(palette::GRAY_900)),
                    ..Default::default()
                }),
        );
    }

    stack = stack.push(
        Container::new(
            Text::new(site_title)
                .size(typography::TITLE)
                .color(palette::WHITE),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center),
    );

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .clip(true)
        .into()
}
