// SPDX-License-Identifier: MPL-2.0
//! Videos page: a plain list of external video links.

use super::page_frame;
use crate::catalog::VideoLink;
use crate::ui::design_tokens::{faded, opacity, palette, spacing, typography};
use iced::widget::{Column, Scrollable, Text};
use iced::{Element, Length, Size};

pub fn view<'a, M: 'a>(videos: &'a [VideoLink], _viewport: Size) -> Element<'a, M> {
    let mut list = Column::new().spacing(spacing::LG);

    if videos.is_empty() {
        list = list.push(
            Text::new("Nothing here yet.")
                .size(typography::BODY)
                .color(faded(palette::GRAY_700, opacity::MUTED)),
        );
    }

    for video in videos {
        list = list.push(
            Column::new()
                .push(
                    Text::new(video.title.as_str())
                        .size(typography::SUBTITLE)
                        .color(palette::GRAY_900),
                )
                .push(
                    Text::new(video.href.as_str())
                        .size(typography::CAPTION)
                        .color(faded(palette::GRAY_700, opacity::MUTED)),
                )
                .spacing(spacing::XS),
        );
    }

    Scrollable::new(page_frame("Videos", list.into()))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
