// SPDX-License-Identifier: MPL-2.0
//! Single album page: an image grid; pressing an image opens the lightbox.

use super::page_frame;
use crate::catalog::Album;
use crate::ui::design_tokens::spacing;
use crate::ui::layout;
use iced::widget::{button, image::Handle, Column, Image, Row, Scrollable};
use iced::{Element, Length, Size};

#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Index into the album's image list.
    ImagePressed(usize),
}

pub fn view<'a>(album: &'a Album, viewport: Size) -> Element<'a, Message> {
    let columns = if viewport.width >= 900.0 { 2 } else { 1 };
    let content = viewport.width.min(1200.0) - 2.0 * spacing::XL;
    #[allow(clippy::cast_precision_loss)]
    let cell_width = ((content - spacing::LG * (columns - 1) as f32) / columns as f32).max(1.0);

    let mut grid = Column::new().spacing(spacing::LG);
    for (row_start, chunk) in (0_usize..).step_by(columns).zip(album.images.chunks(columns)) {
        let mut row = Row::new().spacing(spacing::LG);
        for (offset, asset) in chunk.iter().enumerate() {
            let height = layout::fit_height(cell_width, asset.natural_width, asset.natural_height);
            let picture = Image::new(Handle::from_path(&asset.source))
                .width(Length::Fixed(cell_width))
                .height(Length::Fixed(height));
            row = row.push(
                button(picture)
                    .padding(0.0)
                    .style(|_theme, _status| iced::widget::button::Style {
                        background: None,
                        ..iced::widget::button::Style::default()
                    })
                    .on_press(Message::ImagePressed(row_start + offset)),
            );
        }
        grid = grid.push(row);
    }

    Scrollable::new(page_frame(&album.title, grid.into()))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
