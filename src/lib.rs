// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a small photo-album browser built with the Iced GUI framework.
//!
//! It presents a library of albums behind a collapsible navigation panel
//! whose fold state persists across sessions, and views images in a modal
//! lightbox with keyboard navigation. It demonstrates internationalization
//! with Fluent, user preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.2.0")]

pub mod album_scanner;
pub mod app;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod media;
pub mod ui;
