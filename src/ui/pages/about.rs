// SPDX-License-Identifier: MPL-2.0
//! About page: banner photograph, biography text, and contact details.

use super::page_frame;
use crate::catalog::{PageText, SocialLink};
use crate::ui::design_tokens::{faded, opacity, palette, spacing, typography};
use iced::widget::{image::Handle, Column, Image, Row, Scrollable, Text};
use iced::{Element, Length, Size};
use std::path::Path;

pub fn view<'a, M: 'a>(
    page: &'a PageText,
    banner: Option<&'a Path>,
    social: &'a [SocialLink],
    viewport: Size,
) -> Element<'a, M> {
    let content_width = viewport.width.min(1200.0) - 2.0 * spacing::XL;
    let mut content = Column::new().spacing(spacing::LG);

    if let Some(banner) = banner {
        content = content.push(
            Image::new(Handle::from_path(banner))
                .content_fit(iced::ContentFit::Cover)
                .width(Length::Fixed(content_width.max(1.0)))
                .height(Length::Fixed(280.0)),
        );
    }

    if let Some(subtitle) = &page.subtitle {
        content = content.push(
            Text::new(subtitle.as_str())
                .size(typography::SUBTITLE)
                .color(palette::GRAY_700),
        );
    }

    if let Some(body) = &page.body {
        content = content.push(
            Text::new(body.as_str())
                .size(typography::BODY)
                .color(palette::GRAY_900),
        );
    }

    let mut contacts = Column::new().spacing(spacing::XS);
    for link in social {
        contacts = contacts.push(
            Row::new()
                .push(
                    Text::new(link.label.as_str())
                        .size(typography::CAPTION)
                        .color(faded(palette::GRAY_700, opacity::MUTED))
                        .width(Length::Fixed(120.0)),
                )
                .push(
                    Text::new(link.value.as_str())
                        .size(typography::BODY)
                        .color(palette::GRAY_900),
                )
                .spacing(spacing::MD),
        );
    }
    content = content.push(contacts);

    Scrollable::new(page_frame(&page.title, content.into()))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
