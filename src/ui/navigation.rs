// SPDX-License-Identifier: MPL-2.0
//! Navigation panel with collapsible album sections.
//!
//! Each album is one section: a header button that folds the section body
//! away, and a body listing the album's images. Collapse state lives here
//! as an explicit set; the persisted map is rebuilt from it wholesale after
//! every toggle (see [`crate::app::nav_state::NavState`]).

use crate::album_scanner::Album;
use crate::app::nav_state::NavState;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, scrollable, Column, Container, Row, Text},
    Element, Length,
};
use std::collections::HashSet;

/// Collapse state of the navigation panel.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Ids of sections that are currently collapsed.
    collapsed: HashSet<String>,
}

impl State {
    /// Creates a panel state with every section expanded.
    #[must_use]
    pub fn new() -> Self {
        Self {
            collapsed: HashSet::new(),
        }
    }

    /// Builds the panel state from the persisted map, for the given sections.
    ///
    /// Only known section ids are consulted; stale ids in the map are
    /// ignored. Applying is idempotent: sections absent from the map stay
    /// in their default expanded state.
    #[must_use]
    pub fn from_nav_state<'a, I>(nav_state: &NavState, section_ids: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let collapsed = section_ids
            .into_iter()
            .filter(|id| nav_state.is_collapsed(id))
            .map(str::to_string)
            .collect();
        Self { collapsed }
    }

    /// Check if a section is collapsed.
    #[must_use]
    pub fn is_collapsed(&self, section_id: &str) -> bool {
        self.collapsed.contains(section_id)
    }

    /// Toggle a section's collapsed state.
    pub fn toggle(&mut self, section_id: &str) {
        if !self.collapsed.remove(section_id) {
            self.collapsed.insert(section_id.to_string());
        }
    }

    /// Returns `(id, collapsed)` for every given section, in order.
    ///
    /// This is the snapshot the persistence layer writes back wholesale.
    pub fn snapshot<'a, I>(&self, section_ids: I) -> Vec<(&'a str, bool)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        section_ids
            .into_iter()
            .map(|id| (id, self.is_collapsed(id)))
            .collect()
    }
}

/// Messages emitted by the navigation panel.
#[derive(Debug, Clone)]
pub enum Message {
    /// A section header was clicked.
    ToggleSection(String),
    /// An image entry was clicked.
    EntryActivated {
        album_index: usize,
        item_index: usize,
    },
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    /// Collapse state changed; the parent should persist the new map.
    SectionToggled,
    /// An image entry was activated; the parent should open the lightbox.
    OpenItem {
        album_index: usize,
        item_index: usize,
    },
}

/// Process a panel message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::ToggleSection(section_id) => {
            state.toggle(&section_id);
            Event::SectionToggled
        }
        Message::EntryActivated {
            album_index,
            item_index,
        } => Event::OpenItem {
            album_index,
            item_index,
        },
    }
}

/// Contextual data needed to render the navigation panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub albums: &'a [Album],
}

/// Render the navigation panel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("nav-panel-title")).size(typography::TITLE_MD);

    let mut content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .push(title);

    if ctx.albums.is_empty() {
        content = content.push(Text::new(ctx.i18n.tr("nav-empty")).size(typography::BODY));
    } else {
        for (album_index, album) in ctx.albums.iter().enumerate() {
            content = content.push(build_collapsible_section(&ctx, album_index, album));
        }
    }

    Container::new(scrollable(content))
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(styles::container::panel)
        .into()
}

/// Build one collapsible section: header button plus optional entry list.
fn build_collapsible_section<'a>(
    ctx: &ViewContext<'a>,
    album_index: usize,
    album: &'a Album,
) -> Element<'a, Message> {
    let is_collapsed = ctx.state.is_collapsed(&album.id);

    // Expand/collapse indicator
    let indicator = Text::new(if is_collapsed { "▶" } else { "▼" }).size(typography::BODY);

    let count = Text::new(format!("{}", album.len())).size(typography::CAPTION);

    let header_content = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(indicator)
        .push(
            Container::new(Text::new(album.title.as_str()).size(typography::TITLE_SM))
                .width(Length::Fill),
        )
        .push(count);

    let header = button(header_content)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::button::section_header)
        .on_press(Message::ToggleSection(album.id.clone()));

    let mut section_column = Column::new().spacing(spacing::XXS).push(header);

    if !is_collapsed {
        let mut entries = Column::new().spacing(spacing::XXS);
        for (item_index, item) in album.gallery.iter().enumerate() {
            let entry = button(Text::new(item.label()).size(typography::BODY))
                .width(Length::Fill)
                .padding(spacing::XXS)
                .style(styles::button::section_entry)
                .on_press(Message::EntryActivated {
                    album_index,
                    item_index,
                });
            entries = entries.push(entry);
        }

        let body = Container::new(entries)
            .padding(spacing::XS)
            .width(Length::Fill)
            .style(styles::container::section_body);

        section_column = section_column.push(body);
    }

    section_column.into()
}
