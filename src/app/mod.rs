// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the navigation panel,
//! the gallery grid, and the lightbox.
//!
//! The `App` struct wires the components together and translates messages
//! into side effects like state persistence or image loading. Policy
//! decisions (persistence timing, keyboard routing, lightbox bounds) stay
//! close to the main update loop so user-facing behavior is easy to audit.

pub mod config;
mod message;
pub mod nav_state;
pub mod paths;
mod subscription;

pub use message::{Flags, Message};

use crate::album_scanner::{self, Album};
use crate::gallery::Lightbox;
use crate::i18n::fluent::I18n;
use crate::media::{self, ImageData};
use crate::ui::gallery_grid;
use crate::ui::lightbox_view;
use crate::ui::navigation;
use crate::ui::notifications;
use crate::ui::notifications::Toast;
use crate::ui::theming::ThemeMode;
use config::SortOrder;
use iced::widget::{Container, Row, Stack};
use iced::{window, Element, Length, Subscription, Task, Theme};
use nav_state::NavState;
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state bridging the UI components, localization,
/// and persisted navigation state.
pub struct App {
    pub i18n: I18n,
    /// Albums of the open library, in display order.
    albums: Vec<Album>,
    /// Root directory of the open library.
    library_root: Option<PathBuf>,
    /// Index of the album shown in the grid.
    selected_album: Option<usize>,
    /// Collapse state of the navigation panel.
    nav_panel: navigation::State,
    /// Persisted collapse map, rewritten wholesale on every toggle.
    nav_state: NavState,
    /// Modal image viewer state machine.
    lightbox: Lightbox,
    /// Decoded full-size image for the lightbox, once loaded.
    current_image: Option<ImageData>,
    theme_mode: ThemeMode,
    sort_order: SortOrder,
    thumbnail_size: u16,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("library_root", &self.library_root)
            .field("album_count", &self.albums.len())
            .field("lightbox", &self.lightbox.state())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            albums: Vec::new(),
            library_root: None,
            selected_album: None,
            nav_panel: navigation::State::new(),
            nav_state: NavState::default(),
            lightbox: Lightbox::new(),
            current_image: None,
            theme_mode: ThemeMode::System,
            sort_order: SortOrder::default(),
            thumbnail_size: config::DEFAULT_THUMBNAIL_SIZE,
            notifications: notifications::Manager::new(),
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from `Flags` and the persisted files,
    /// and optionally opens the library passed on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;
        app.sort_order = config.display.sort_order.unwrap_or_default();
        app.thumbnail_size = config
            .display
            .thumbnail_size
            .unwrap_or(config::DEFAULT_THUMBNAIL_SIZE)
            .clamp(config::MIN_THUMBNAIL_SIZE, config::MAX_THUMBNAIL_SIZE);

        // Load the persisted collapse map (self-healing on corruption).
        let (nav_state, state_warning) = NavState::load();
        app.nav_state = nav_state;

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }
        if let Some(key) = state_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        if let Some(path_str) = flags.library_path {
            app.open_library(PathBuf::from(&path_str));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        let library_name = self.library_root.as_ref().and_then(|root| {
            root.file_name()
                .and_then(|name| name.to_str())
                .map(String::from)
        });

        match library_name {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    /// Scans a library root and replaces all album-derived state.
    ///
    /// The navigation panel is rebuilt by applying the persisted collapse
    /// map to the sections found on disk; unknown sections start expanded.
    fn open_library(&mut self, root: PathBuf) {
        match album_scanner::scan_library(&root, self.sort_order) {
            Ok(albums) => {
                self.nav_panel = navigation::State::from_nav_state(
                    &self.nav_state,
                    albums.iter().map(|album| album.id.as_str()),
                );
                self.selected_album = if albums.is_empty() { None } else { Some(0) };
                self.albums = albums;
                self.library_root = Some(root);
                self.lightbox.close();
                self.current_image = None;
            }
            Err(err) => {
                log::warn!("library scan failed for {}: {}", root.display(), err);
                self.notifications.push(notifications::Notification::error(
                    "notification-scan-dir-error",
                ));
            }
        }
    }

    /// The album currently shown in the grid.
    fn current_album(&self) -> Option<&Album> {
        self.selected_album.and_then(|index| self.albums.get(index))
    }

    /// Writes the collapse map back to disk, mirroring the panel wholesale.
    fn persist_nav_state(&mut self) {
        self.nav_state.set_from_sections(
            self.nav_panel
                .snapshot(self.albums.iter().map(|album| album.id.as_str())),
        );
        if let Some(key) = self.nav_state.save() {
            self.notifications
                .push(notifications::Notification::warning(&key));
        }
    }

    /// Opens the lightbox at `index` into the current album and starts
    /// loading the full-size image. Out-of-range requests are silent no-ops.
    fn open_lightbox(&mut self, index: usize) -> Task<Message> {
        let Some(album) = self.current_album() else {
            return Task::none();
        };

        let count = album.gallery.len();
        if !self.lightbox.open(index, count) {
            return Task::none();
        }

        self.load_current_image()
    }

    /// Starts the asynchronous load of the image at the lightbox index.
    fn load_current_image(&mut self) -> Task<Message> {
        let Some(index) = self.lightbox.current_index() else {
            return Task::none();
        };
        let Some(path) = self
            .current_album()
            .and_then(|album| album.gallery.path(index))
            .map(std::path::Path::to_path_buf)
        else {
            return Task::none();
        };

        self.current_image = None;
        Task::perform(async move { media::load_image(&path) }, move |result| {
            Message::ImageLoaded { index, result }
        })
    }

    fn navigate_next(&mut self) -> Task<Message> {
        let count = self.current_album().map(Album::len).unwrap_or(0);
        if self.lightbox.next(count) {
            self.load_current_image()
        } else {
            Task::none()
        }
    }

    fn navigate_previous(&mut self) -> Task<Message> {
        if self.lightbox.prev() {
            self.load_current_image()
        } else {
            Task::none()
        }
    }

    fn close_lightbox(&mut self) {
        self.lightbox.close();
        self.current_image = None;
    }

    /// Keyboard input; only meaningful while the lightbox is open.
    fn handle_key_pressed(&mut self, key: &iced::keyboard::Key) -> Task<Message> {
        use iced::keyboard::{key::Named, Key};

        if !self.lightbox.is_open() {
            return Task::none();
        }

        match key {
            Key::Named(Named::Escape) => {
                self.close_lightbox();
                Task::none()
            }
            Key::Named(Named::ArrowLeft) => self.navigate_previous(),
            Key::Named(Named::ArrowRight) => self.navigate_next(),
            _ => Task::none(),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigation(nav_message) => {
                match navigation::update(&mut self.nav_panel, nav_message) {
                    navigation::Event::SectionToggled => {
                        self.persist_nav_state();
                        Task::none()
                    }
                    navigation::Event::OpenItem {
                        album_index,
                        item_index,
                    } => {
                        if album_index < self.albums.len() {
                            self.selected_album = Some(album_index);
                            self.open_lightbox(item_index)
                        } else {
                            Task::none()
                        }
                    }
                }
            }
            Message::Gallery(gallery_grid::Message::ItemActivated(index)) => {
                self.open_lightbox(index)
            }
            Message::Gallery(gallery_grid::Message::OpenLibraryPressed)
            | Message::OpenLibraryDialog => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .pick_folder()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                Message::OpenLibraryDialogResult,
            ),
            Message::OpenLibraryDialogResult(path) => {
                if let Some(path) = path {
                    self.open_library(path);
                }
                Task::none()
            }
            Message::FileDropped(path) => {
                if path.is_dir() {
                    self.open_library(path);
                }
                Task::none()
            }
            Message::Lightbox(lightbox_message) => match lightbox_message {
                lightbox_view::Message::ClosePressed
                | lightbox_view::Message::BackdropPressed => {
                    self.close_lightbox();
                    Task::none()
                }
                lightbox_view::Message::PrevPressed => self.navigate_previous(),
                lightbox_view::Message::NextPressed => self.navigate_next(),
                // Swallowed; a press on the content must not close the overlay.
                lightbox_view::Message::ContentPressed => Task::none(),
            },
            Message::RawEvent { event, .. } => {
                if let iced::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, .. }) =
                    &event
                {
                    self.handle_key_pressed(key)
                } else {
                    Task::none()
                }
            }
            Message::ImageLoaded { index, result } => {
                // A result for an index the user already navigated away from
                // is stale and ignored.
                if self.lightbox.current_index() == Some(index) {
                    match result {
                        Ok(data) => self.current_image = Some(data),
                        Err(err) => {
                            log::warn!("lightbox image load failed: {}", err);
                            self.notifications.push(notifications::Notification::error(
                                "notification-image-load-error",
                            ));
                        }
                    }
                }
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let panel = navigation::view(navigation::ViewContext {
            i18n: &self.i18n,
            state: &self.nav_panel,
            albums: &self.albums,
        })
        .map(Message::Navigation);

        let grid = gallery_grid::view(gallery_grid::ViewContext {
            i18n: &self.i18n,
            album: self.current_album(),
            thumbnail_size: self.thumbnail_size,
        })
        .map(Message::Gallery);

        let base = Row::new()
            .push(panel)
            .push(grid)
            .width(Length::Fill)
            .height(Length::Fill);

        let mut stack = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(base);

        // Modal layer: while open, the overlay covers the whole window and
        // the grid behind it receives no input.
        let info = self
            .lightbox
            .info(self.current_album().map(Album::len).unwrap_or(0));
        if info.is_open {
            let item = info
                .current_index
                .and_then(|index| self.current_album().and_then(|a| a.gallery.get(index)));
            stack = stack.push(
                lightbox_view::view(lightbox_view::ViewContext {
                    i18n: &self.i18n,
                    info,
                    item,
                    image: self.current_image.as_ref(),
                })
                .map(Message::Lightbox),
            );
        }

        stack = stack.push(
            Toast::view_overlay(&self.notifications, &self.i18n).map(Message::Notification),
        );

        Container::new(stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::lightbox::ViewState;
    use iced::keyboard;
    use std::fs;
    use std::path::Path;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    /// Points both the config and data directories at fresh temp dirs for
    /// the duration of one test.
    fn with_temp_dirs<F>(test: F)
    where
        F: FnOnce(&Path, &Path),
    {
        let _guard = env_lock().lock().expect("failed to lock mutex");
        let config_dir = tempdir().expect("failed to create temp config dir");
        let data_dir = tempdir().expect("failed to create temp data dir");
        let previous_config = std::env::var(paths::ENV_CONFIG_DIR).ok();
        let previous_data = std::env::var(paths::ENV_DATA_DIR).ok();
        std::env::set_var(paths::ENV_CONFIG_DIR, config_dir.path());
        std::env::set_var(paths::ENV_DATA_DIR, data_dir.path());

        test(config_dir.path(), data_dir.path());

        match previous_config {
            Some(value) => std::env::set_var(paths::ENV_CONFIG_DIR, value),
            None => std::env::remove_var(paths::ENV_CONFIG_DIR),
        }
        match previous_data {
            Some(value) => std::env::set_var(paths::ENV_DATA_DIR, value),
            None => std::env::remove_var(paths::ENV_DATA_DIR),
        }
    }

    fn create_test_image(dir: &Path, name: &str) {
        use image_rs::{Rgba, RgbaImage};
        let image = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 255]));
        image.save(dir.join(name)).expect("write test image");
    }

    /// Builds a library on disk with two albums of 3 and 1 images.
    fn create_test_library(root: &Path) {
        let travel = root.join("travel");
        let family = root.join("family");
        fs::create_dir(&travel).expect("create travel");
        fs::create_dir(&family).expect("create family");
        create_test_image(&travel, "a.png");
        create_test_image(&travel, "b.png");
        create_test_image(&travel, "c.png");
        create_test_image(&family, "only.png");
    }

    fn app_with_library(root: &Path) -> App {
        let mut app = App::default();
        app.open_library(root.to_path_buf());
        app
    }

    fn key_pressed(named: keyboard::key::Named) -> Message {
        let code = match named {
            keyboard::key::Named::Escape => keyboard::key::Code::Escape,
            keyboard::key::Named::ArrowLeft => keyboard::key::Code::ArrowLeft,
            _ => keyboard::key::Code::ArrowRight,
        };
        Message::RawEvent {
            window: window::Id::unique(),
            event: iced::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(named),
                modified_key: keyboard::Key::Named(named),
                physical_key: keyboard::key::Physical::Code(code),
                location: keyboard::Location::Standard,
                modifiers: keyboard::Modifiers::default(),
                text: None,
                repeat: false,
            }),
        }
    }

    #[test]
    fn new_starts_without_library() {
        with_temp_dirs(|_, _| {
            let (app, _task) = App::new(Flags::default());
            assert!(app.library_root.is_none());
            assert!(app.albums.is_empty());
            assert!(!app.lightbox.is_open());
        });
    }

    #[test]
    fn title_shows_library_name_when_open() {
        with_temp_dirs(|_, _| {
            let library = tempdir().expect("library dir");
            create_test_library(library.path());

            let app = app_with_library(library.path());
            let title = app.title();
            let library_name = library
                .path()
                .file_name()
                .unwrap()
                .to_string_lossy()
                .into_owned();
            assert!(title.starts_with(&library_name));
        });
    }

    #[test]
    fn opening_library_selects_first_album_and_expands_sections() {
        let library = tempdir().expect("library dir");
        create_test_library(library.path());

        let app = app_with_library(library.path());

        assert_eq!(app.albums.len(), 2);
        assert_eq!(app.selected_album, Some(0));
        assert!(!app.nav_panel.is_collapsed("family"));
        assert!(!app.nav_panel.is_collapsed("travel"));
    }

    #[test]
    fn gallery_activation_opens_lightbox_at_index() {
        let library = tempdir().expect("library dir");
        create_test_library(library.path());

        let mut app = app_with_library(library.path());
        // First album is "family" (alphabetical), switch to "travel".
        app.selected_album = Some(1);

        let _ = app.update(Message::Gallery(gallery_grid::Message::ItemActivated(1)));

        assert_eq!(app.lightbox.state(), ViewState::Open(1));
        let info = app.lightbox.info(app.current_album().unwrap().len());
        assert_eq!(info.counter_text().as_deref(), Some("2 / 3"));
        assert!(info.has_previous);
        assert!(info.has_next);
    }

    #[test]
    fn out_of_range_activation_is_a_silent_no_op() {
        let library = tempdir().expect("library dir");
        create_test_library(library.path());

        let mut app = app_with_library(library.path());

        let _ = app.update(Message::Gallery(gallery_grid::Message::ItemActivated(99)));

        assert!(!app.lightbox.is_open());
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn nav_entry_opens_lightbox_in_its_album() {
        let library = tempdir().expect("library dir");
        create_test_library(library.path());

        let mut app = app_with_library(library.path());

        let _ = app.update(Message::Navigation(
            navigation::Message::EntryActivated {
                album_index: 1,
                item_index: 2,
            },
        ));

        assert_eq!(app.selected_album, Some(1));
        assert_eq!(app.lightbox.state(), ViewState::Open(2));
    }

    #[test]
    fn escape_closes_open_lightbox_and_is_noop_while_closed() {
        let library = tempdir().expect("library dir");
        create_test_library(library.path());

        let mut app = app_with_library(library.path());

        // Escape while closed: nothing happens.
        let _ = app.update(key_pressed(keyboard::key::Named::Escape));
        assert!(!app.lightbox.is_open());

        let _ = app.update(Message::Gallery(gallery_grid::Message::ItemActivated(0)));
        assert!(app.lightbox.is_open());

        let _ = app.update(key_pressed(keyboard::key::Named::Escape));
        assert!(!app.lightbox.is_open());
        assert!(app.current_image.is_none());
    }

    #[test]
    fn arrow_keys_navigate_within_bounds() {
        let library = tempdir().expect("library dir");
        create_test_library(library.path());

        let mut app = app_with_library(library.path());
        app.selected_album = Some(1); // "travel", 3 images

        let _ = app.update(Message::Gallery(gallery_grid::Message::ItemActivated(0)));

        // Left at the first item: no-op.
        let _ = app.update(key_pressed(keyboard::key::Named::ArrowLeft));
        assert_eq!(app.lightbox.state(), ViewState::Open(0));

        let _ = app.update(key_pressed(keyboard::key::Named::ArrowRight));
        let _ = app.update(key_pressed(keyboard::key::Named::ArrowRight));
        assert_eq!(app.lightbox.state(), ViewState::Open(2));

        // Right at the last item: no-op.
        let _ = app.update(key_pressed(keyboard::key::Named::ArrowRight));
        assert_eq!(app.lightbox.state(), ViewState::Open(2));
    }

    #[test]
    fn arrow_keys_are_ignored_while_closed() {
        let library = tempdir().expect("library dir");
        create_test_library(library.path());

        let mut app = app_with_library(library.path());

        let _ = app.update(key_pressed(keyboard::key::Named::ArrowRight));
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn lightbox_buttons_mirror_keyboard_navigation() {
        let library = tempdir().expect("library dir");
        create_test_library(library.path());

        let mut app = app_with_library(library.path());
        app.selected_album = Some(1);

        let _ = app.update(Message::Gallery(gallery_grid::Message::ItemActivated(1)));
        let _ = app.update(Message::Lightbox(lightbox_view::Message::NextPressed));
        assert_eq!(app.lightbox.state(), ViewState::Open(2));

        let _ = app.update(Message::Lightbox(lightbox_view::Message::PrevPressed));
        assert_eq!(app.lightbox.state(), ViewState::Open(1));

        let _ = app.update(Message::Lightbox(lightbox_view::Message::BackdropPressed));
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn toggling_a_section_persists_the_full_map() {
        with_temp_dirs(|_, data_dir| {
            let library = tempdir().expect("library dir");
            create_test_library(library.path());

            let mut app = app_with_library(library.path());

            let _ = app.update(Message::Navigation(navigation::Message::ToggleSection(
                "travel".to_string(),
            )));

            let (persisted, warning) =
                NavState::load_from(Some(data_dir.to_path_buf()));
            assert!(warning.is_none());
            assert!(persisted.is_collapsed("travel"));
            assert!(!persisted.is_collapsed("family"));
            assert_eq!(persisted.collapsed.len(), 2);

            // Toggling back rewrites the map again.
            let _ = app.update(Message::Navigation(navigation::Message::ToggleSection(
                "travel".to_string(),
            )));
            let (persisted, _) = NavState::load_from(Some(data_dir.to_path_buf()));
            assert!(!persisted.is_collapsed("travel"));
        });
    }

    #[test]
    fn persisted_map_is_applied_on_next_library_open() {
        with_temp_dirs(|_, _| {
            let library = tempdir().expect("library dir");
            create_test_library(library.path());

            {
                let mut app = app_with_library(library.path());
                let _ = app.update(Message::Navigation(navigation::Message::ToggleSection(
                    "travel".to_string(),
                )));
            }

            // A fresh app run reads the persisted map back.
            let (mut app, _task) = App::new(Flags::default());
            app.open_library(library.path().to_path_buf());

            assert!(app.nav_panel.is_collapsed("travel"));
            assert!(!app.nav_panel.is_collapsed("family"));
        });
    }

    #[test]
    fn corrupt_state_file_resets_to_expanded_and_warns() {
        with_temp_dirs(|_, data_dir| {
            fs::write(data_dir.join("state.cbor"), "{not json").expect("write corrupt state");

            let library = tempdir().expect("library dir");
            create_test_library(library.path());

            let (mut app, _task) = App::new(Flags::default());
            app.open_library(library.path().to_path_buf());

            assert!(app.notifications.has_notifications());
            assert!(!app.nav_panel.is_collapsed("travel"));
            assert!(!app.nav_panel.is_collapsed("family"));
            assert!(
                !data_dir.join("state.cbor").exists(),
                "corrupt state file should have been removed"
            );
        });
    }

    #[test]
    fn empty_library_never_opens_the_lightbox() {
        let library = tempdir().expect("library dir");

        let mut app = app_with_library(library.path());
        assert!(app.albums.is_empty());
        assert_eq!(app.selected_album, None);

        let _ = app.update(Message::Gallery(gallery_grid::Message::ItemActivated(0)));
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn scan_failure_pushes_notification() {
        let library = tempdir().expect("library dir");
        let missing = library.path().join("missing");

        let mut app = App::default();
        app.open_library(missing);

        assert!(app.notifications.has_notifications());
        assert!(app.library_root.is_none());
    }

    #[test]
    fn image_loaded_for_current_index_sets_image() {
        let library = tempdir().expect("library dir");
        create_test_library(library.path());

        let mut app = app_with_library(library.path());
        let _ = app.update(Message::Gallery(gallery_grid::Message::ItemActivated(0)));

        let data = ImageData::from_rgba(1, 1, vec![255; 4]);
        let _ = app.update(Message::ImageLoaded {
            index: 0,
            result: Ok(data),
        });

        assert!(app.current_image.is_some());
    }

    #[test]
    fn stale_image_result_is_ignored() {
        let library = tempdir().expect("library dir");
        create_test_library(library.path());

        let mut app = app_with_library(library.path());
        app.selected_album = Some(1);
        let _ = app.update(Message::Gallery(gallery_grid::Message::ItemActivated(0)));
        let _ = app.update(Message::Lightbox(lightbox_view::Message::NextPressed));

        // A result for the index the user navigated away from.
        let data = ImageData::from_rgba(1, 1, vec![255; 4]);
        let _ = app.update(Message::ImageLoaded {
            index: 0,
            result: Ok(data),
        });

        assert!(app.current_image.is_none());
    }

    #[test]
    fn image_load_error_surfaces_notification() {
        let library = tempdir().expect("library dir");
        create_test_library(library.path());

        let mut app = app_with_library(library.path());
        let _ = app.update(Message::Gallery(gallery_grid::Message::ItemActivated(0)));

        let _ = app.update(Message::ImageLoaded {
            index: 0,
            result: Err(crate::error::Error::Io("boom".into())),
        });

        assert!(app.notifications.has_notifications());
        // The lightbox stays open on the failed load.
        assert!(app.lightbox.is_open());
    }

    #[test]
    fn dropping_a_directory_opens_it_as_library() {
        let library = tempdir().expect("library dir");
        create_test_library(library.path());

        let mut app = App::default();
        let _ = app.update(Message::FileDropped(library.path().to_path_buf()));

        assert_eq!(app.albums.len(), 2);
        assert!(app.library_root.is_some());
    }

    #[test]
    fn dropping_a_file_is_ignored() {
        let library = tempdir().expect("library dir");
        create_test_library(library.path());

        let mut app = App::default();
        let _ = app.update(Message::FileDropped(
            library.path().join("travel").join("a.png"),
        ));

        assert!(app.library_root.is_none());
    }
}
