// SPDX-License-Identifier: MPL-2.0
//! Album overview: a grid of cover photographs, one per album.

use super::page_frame;
use crate::catalog::{Album, AlbumId, PageText};
use crate::ui::design_tokens::{faded, opacity, palette, spacing, typography};
use crate::ui::layout;
use iced::widget::{button, image::Handle, Column, Image, Row, Scrollable, Text};
use iced::{Element, Length, Size};

#[derive(Debug, Clone)]
pub enum Message {
    AlbumPressed(AlbumId),
}

pub fn view<'a>(page: &'a PageText, albums: &'a [Album], viewport: Size) -> Element<'a, Message> {
    let columns = grid_columns(viewport.width);
    let cell_width = cell_width(viewport.width, columns);

    let mut grid = Column::new().spacing(spacing::LG);
    for chunk in albums.chunks(columns) {
        let mut row = Row::new().spacing(spacing::LG);
        for album in chunk {
            row = row.push(album_cell(album, cell_width));
        }
        grid = grid.push(row);
    }

    let mut content = Column::new().spacing(spacing::MD);
    if let Some(subtitle) = &page.subtitle {
        content = content.push(
            Text::new(subtitle.as_str())
                .size(typography::SUBTITLE)
                .color(faded(palette::GRAY_700, opacity::MUTED)),
        );
    }
    content = content.push(grid);

    Scrollable::new(page_frame(&page.title, content.into()))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn album_cell(album: &Album, width: f32) -> Element<'_, Message> {
    let cover = album.cover();
    let height = layout::fit_height(width, cover.natural_width, cover.natural_height);

    let picture = Image::new(Handle::from_path(&cover.source))
        .width(Length::Fixed(width))
        .height(Length::Fixed(height));

    let cell = Column::new()
        .push(picture)
        .push(
            Text::new(album.title.as_str())
                .size(typography::BODY)
                .color(palette::GRAY_900),
        )
        .spacing(spacing::XS);

    button(cell)
        .padding(0.0)
        .style(|_theme, _status| iced::widget::button::Style {
            background: None,
            ..iced::widget::button::Style::default()
        })
        .on_press(Message::AlbumPressed(album.id.clone()))
        .into()
}

fn grid_columns(viewport_width: f32) -> usize {
    if viewport_width >= 1100.0 {
        3
    } else if viewport_width >= 720.0 {
        2
    } else {
        1
    }
}

fn cell_width(viewport_width: f32, columns: usize) -> f32 {
    let content = viewport_width.min(1200.0) - 2.0 * spacing::XL;
    #[allow(clippy::cast_precision_loss)]
    let gaps = spacing::LG * (columns - 1) as f32;
    #[allow(clippy::cast_precision_loss)]
    let width = (content - gaps) / columns as f32;
    width.max(1.0)
}
