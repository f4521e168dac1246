// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay chrome.
//!
//! Renders the modal layer stacked over the whole window: dimmed backdrop,
//! the current image, its caption, a 1-based position counter, and the
//! close/previous/next controls. Everything here is a pure function of the
//! [`LightboxInfo`] snapshot; state transitions live in the controller.
//!
//! The previous control is absent at the first item and the next control at
//! the last one, matching the controller's boundary no-ops. A press on the
//! backdrop outside the content closes the overlay.

use crate::gallery::{GalleryItem, LightboxInfo};
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{opacity, palette::WHITE, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, mouse_area, tooltip, Column, Container, Stack, Text},
    Element, Length, Padding,
};

/// Messages emitted by the lightbox chrome.
#[derive(Debug, Clone)]
pub enum Message {
    /// The close button was clicked.
    ClosePressed,
    /// The previous button was clicked.
    PrevPressed,
    /// The next button was clicked.
    NextPressed,
    /// The backdrop outside the content area was clicked.
    BackdropPressed,
    /// A press inside the content area; swallowed so it never reaches the
    /// backdrop and closes the overlay.
    ContentPressed,
}

/// Contextual data needed to render the overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub info: LightboxInfo,
    /// The item on display.
    pub item: Option<&'a GalleryItem>,
    /// Decoded full-size image, once loading finished.
    pub image: Option<&'a ImageData>,
}

/// Render the lightbox overlay. Callers must only invoke this while open.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    // Dimmed backdrop; presses here (outside the content) close the overlay.
    let backdrop = mouse_area(
        Container::new(Text::new(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::BackdropPressed);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop);

    // Center content: image, caption, counter.
    let mut content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .height(Length::Fill)
        .max_width(1200.0);

    match ctx.image {
        Some(data) => {
            content = content.push(
                iced::widget::image(data.handle.clone())
                    .width(Length::Fill)
                    .height(Length::FillPortion(1)),
            );
        }
        None => {
            content = content.push(
                Container::new(Text::new("…").size(typography::TITLE_LG))
                    .width(Length::Fill)
                    .height(Length::FillPortion(1))
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Center),
            );
        }
    }

    if let Some(caption) = ctx.item.and_then(|item| item.caption.as_deref()) {
        content = content.push(
            Container::new(Text::new(caption).size(typography::BODY))
                .padding(Padding {
                    top: spacing::XXS,
                    right: spacing::XS,
                    bottom: spacing::XXS,
                    left: spacing::XS,
                })
                .style(styles::overlay::indicator(radius::SM)),
        );
    }

    if let Some(counter) = ctx.info.counter_text() {
        content = content.push(
            Container::new(Text::new(counter).size(typography::BODY))
                .padding(Padding {
                    top: spacing::XXS,
                    right: spacing::XS,
                    bottom: spacing::XXS,
                    left: spacing::XS,
                })
                .style(styles::overlay::indicator(radius::LG)),
        );
    }

    stack = stack.push(
        Container::new(mouse_area(content).on_press(Message::ContentPressed))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XL)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    );

    // Close button, top-right.
    let close = overlay_button("×", ctx.i18n.tr("lightbox-close"), Message::ClosePressed);
    stack = stack.push(
        Container::new(close)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Top),
    );

    // Previous button, left edge, only away from the first item.
    if ctx.info.has_previous {
        let prev = overlay_button("‹", ctx.i18n.tr("lightbox-previous"), Message::PrevPressed);
        stack = stack.push(
            Container::new(prev)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD)
                .align_x(Horizontal::Left)
                .align_y(Vertical::Center),
        );
    }

    // Next button, right edge, only away from the last item.
    if ctx.info.has_next {
        let next = overlay_button("›", ctx.i18n.tr("lightbox-next"), Message::NextPressed);
        stack = stack.push(
            Container::new(next)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD)
                .align_x(Horizontal::Right)
                .align_y(Vertical::Center),
        );
    }

    stack.into()
}

/// A round-ish glyph button used for the overlay controls.
fn overlay_button<'a>(glyph: &'a str, label: String, message: Message) -> Element<'a, Message> {
    let control = button(
        Container::new(Text::new(glyph).size(typography::TITLE_MD))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(Length::Fixed(sizing::NAV_BUTTON))
    .height(Length::Fixed(sizing::NAV_BUTTON))
    .style(styles::button::overlay(
        WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_HOVER,
    ))
    .on_press(message);

    tooltip(
        control,
        Text::new(label).size(typography::CAPTION),
        tooltip::Position::Bottom,
    )
    .style(iced::widget::container::rounded_box)
    .into()
}
