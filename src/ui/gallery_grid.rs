// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid for the selected album.
//!
//! Thumbnails are decoded by Iced from path handles; the grid never blocks
//! on image IO. Activating a thumbnail asks the parent to open the lightbox
//! at that index.

use crate::album_scanner::Album;
use crate::app::config::GRID_COLUMNS;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, image, scrollable, Column, Container, Row, Text},
    Element, Length,
};

/// Messages emitted by the gallery grid.
#[derive(Debug, Clone)]
pub enum Message {
    /// A thumbnail was clicked.
    ItemActivated(usize),
    /// The "open library" action of the empty state was clicked.
    OpenLibraryPressed,
}

/// Contextual data needed to render the grid.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// The album on display; `None` when no library is open.
    pub album: Option<&'a Album>,
    /// Thumbnail edge length in pixels.
    pub thumbnail_size: u16,
}

/// Render the gallery grid or the appropriate empty state.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    match ctx.album {
        None => empty_state(
            ctx.i18n.tr("gallery-empty-library"),
            Some(ctx.i18n.tr("gallery-open-library-button")),
        ),
        Some(album) if album.is_empty() => empty_state(ctx.i18n.tr("gallery-empty-album"), None),
        Some(album) => grid(album, ctx.thumbnail_size),
    }
}

/// Centered message shown when there is nothing to display.
fn empty_state<'a>(message: String, action: Option<String>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(message).size(typography::TITLE_SM));

    if let Some(label) = action {
        column = column.push(
            button(Text::new(label).size(typography::BODY))
                .padding(spacing::SM)
                .style(styles::button::primary)
                .on_press(Message::OpenLibraryPressed),
        );
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

/// Thumbnails laid out in fixed-width rows.
fn grid(album: &Album, thumbnail_size: u16) -> Element<'_, Message> {
    let edge = f32::from(thumbnail_size);

    let mut rows = Column::new().spacing(spacing::SM).padding(spacing::MD);
    let mut current_row = Row::new().spacing(spacing::SM);
    let mut in_row = 0;

    for (index, item) in album.gallery.iter().enumerate() {
        let thumbnail = image(image::Handle::from_path(&item.path))
            .width(Length::Fixed(edge))
            .height(Length::Fixed(edge));

        let label = Text::new(item.label()).size(typography::CAPTION);

        let card = Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .push(thumbnail)
            .push(label);

        let cell = button(card)
            .padding(spacing::XS)
            .style(styles::button::thumbnail)
            .on_press(Message::ItemActivated(index));

        current_row = current_row.push(cell);
        in_row += 1;

        if in_row == GRID_COLUMNS {
            rows = rows.push(current_row);
            current_row = Row::new().spacing(spacing::SM);
            in_row = 0;
        }
    }

    if in_row > 0 {
        rows = rows.push(current_row);
    }

    Container::new(scrollable(rows))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
