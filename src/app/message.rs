// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::ImageData;
use crate::ui::gallery_grid;
use crate::ui::lightbox_view;
use crate::ui::navigation;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navigation(navigation::Message),
    Gallery(gallery_grid::Message),
    Lightbox(lightbox_view::Message),
    Notification(notifications::NotificationMessage),
    /// Native event routed from the subscription (keyboard, window).
    RawEvent {
        window: iced::window::Id,
        event: iced::Event,
    },
    /// Result of the asynchronous full-size image load for the lightbox.
    ImageLoaded {
        index: usize,
        result: Result<ImageData, Error>,
    },
    /// Trigger the open-library directory dialog.
    OpenLibraryDialog,
    /// Result from the open-library directory dialog.
    OpenLibraryDialogResult(Option<PathBuf>),
    /// A path was dropped on the window.
    FileDropped(PathBuf),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional library directory to open on startup.
    pub library_path: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional data directory override (for the state file).
    /// Takes precedence over `ICED_FOLIO_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
