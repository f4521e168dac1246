// SPDX-License-Identifier: MPL-2.0
use iced_folio::album_scanner;
use iced_folio::app::config::{self, Config, SortOrder};
use iced_folio::app::nav_state::NavState;
use iced_folio::gallery::Lightbox;
use iced_folio::i18n::fluent::I18n;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn create_test_image(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"fake image data").expect("failed to write test image");
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_scan_then_navigate_full_album() {
    let library = tempdir().expect("failed to create library dir");
    let album_dir = library.path().join("holiday");
    fs::create_dir(&album_dir).expect("failed to create album dir");
    create_test_image(&album_dir, "a.jpg");
    create_test_image(&album_dir, "b.jpg");
    create_test_image(&album_dir, "c.jpg");

    let albums =
        album_scanner::scan_library(library.path(), SortOrder::Alphabetical).expect("scan");
    assert_eq!(albums.len(), 1);
    let gallery = &albums[0].gallery;

    // Walk the whole album with the lightbox controller.
    let mut lightbox = Lightbox::new();
    assert!(lightbox.open(0, gallery.len()));

    let mut visited = vec![lightbox.current_index().unwrap()];
    while lightbox.next(gallery.len()) {
        visited.push(lightbox.current_index().unwrap());
    }
    assert_eq!(visited, vec![0, 1, 2]);

    let info = lightbox.info(gallery.len());
    assert_eq!(info.counter_text().as_deref(), Some("3 / 3"));
    assert!(!info.has_next);

    lightbox.close();
    assert!(!lightbox.is_open());
}

#[test]
fn test_collapse_state_round_trip_through_files() {
    let data_dir = tempdir().expect("failed to create data dir");

    // First session: collapse one of two sections and persist.
    let mut state = NavState::default();
    state.set_from_sections([("holiday", true), ("work", false)]);
    assert!(state.save_to(Some(data_dir.path().to_path_buf())).is_none());

    // Second session: the map reproduces the same visual state.
    let (reloaded, warning) = NavState::load_from(Some(data_dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert!(reloaded.is_collapsed("holiday"));
    assert!(!reloaded.is_collapsed("work"));

    // Corrupt the file: defaults come back and the file is removed.
    fs::write(data_dir.path().join("state.cbor"), "{not json").expect("corrupt state");
    let (reset, warning) = NavState::load_from(Some(data_dir.path().to_path_buf()));
    assert!(warning.is_some());
    assert!(!reset.is_collapsed("holiday"));
    assert!(!data_dir.path().join("state.cbor").exists());
}
