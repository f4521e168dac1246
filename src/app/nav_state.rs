// SPDX-License-Identifier: MPL-2.0
//! Navigation panel state persistence using CBOR format.
//!
//! This module handles the collapse map of the navigation panel: which album
//! sections the user has folded away. The map should survive across sessions
//! but is not user-configurable (unlike preferences in `settings.toml`).
//!
//! State is stored in CBOR (Concise Binary Object Representation) format for:
//! - Compact binary storage
//! - Fast serialization/deserialization
//! - Clear separation from user-editable TOML preferences
//!
//! The file is rewritten in full on every toggle, so it always mirrors the
//! current panel exactly. A file that fails to decode is logged and deleted;
//! the panel then starts with every section expanded.
//!
//! # Path Resolution
//!
//! The state file location can be customized for testing or portable deployments:
//! 1. Use `load_from()`/`save_to()` with explicit path override
//! 2. Set `ICED_FOLIO_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::paths;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Persisted navigation panel state.
///
/// Maps a section id (the album directory name) to its collapsed flag.
/// Ids of albums that no longer exist may linger in a loaded map; they are
/// harmless and age out on the next save, which rebuilds the map from the
/// sections currently on screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NavState {
    /// Collapsed flag per section id.
    #[serde(default)]
    pub collapsed: BTreeMap<String, bool>,
}

impl NavState {
    /// Loads navigation state from the default location.
    ///
    /// Returns a tuple of (state, optional_warning). A missing file yields the
    /// default state silently; an unreadable or undecodable file yields the
    /// default state with a warning message key, and an undecodable file is
    /// deleted so the next run starts clean.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads navigation state from a custom directory.
    ///
    /// # Arguments
    ///
    /// * `base_dir` - Optional base directory. If `None`, uses default path resolution.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(state) => (state, None),
                    Err(err) => {
                        log::warn!(
                            "discarding undecodable navigation state {}: {}",
                            path.display(),
                            err
                        );
                        // Self-healing: drop the bad file so it cannot fail again.
                        let _ = fs::remove_file(&path);
                        (
                            Self::default(),
                            Some("notification-state-parse-error".to_string()),
                        )
                    }
                }
            }
            Err(_) => (
                Self::default(),
                Some("notification-state-read-error".to_string()),
            ),
        }
    }

    /// Saves navigation state to the default location.
    ///
    /// Creates the parent directory if it doesn't exist.
    /// Returns an optional warning message if save failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves navigation state to a custom directory.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-dir-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(self, writer).is_err() {
                    return Some("notification-state-write-error".to_string());
                }
                None
            }
            Err(_) => Some("notification-state-create-error".to_string()),
        }
    }

    /// Returns whether the given section is recorded as collapsed.
    ///
    /// Unknown sections default to expanded.
    #[must_use]
    pub fn is_collapsed(&self, section_id: &str) -> bool {
        self.collapsed.get(section_id).copied().unwrap_or(false)
    }

    /// Rebuilds the map wholesale from the current state of every section.
    ///
    /// Called on each toggle, so the persisted map always mirrors the panel
    /// exactly and stale ids from removed albums do not accumulate further.
    pub fn set_from_sections<'a, I>(&mut self, sections: I)
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        self.collapsed = sections
            .into_iter()
            .map(|(id, collapsed)| (id.to_string(), collapsed))
            .collect();
    }

    /// Returns the full path to the state file with optional override.
    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_state_has_no_entries() {
        let state = NavState::default();
        assert!(state.collapsed.is_empty());
        assert!(!state.is_collapsed("photos"));
    }

    #[test]
    fn set_from_sections_rebuilds_wholesale() {
        let mut state = NavState::default();
        state.collapsed.insert("stale".to_string(), true);

        state.set_from_sections([("travel", true), ("family", false)]);

        assert_eq!(state.collapsed.len(), 2);
        assert!(state.is_collapsed("travel"));
        assert!(!state.is_collapsed("family"));
        assert!(!state.is_collapsed("stale"));
    }

    #[test]
    fn save_to_and_load_from_custom_directory() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let mut original = NavState::default();
        original.set_from_sections([("travel", true), ("family", false)]);

        let save_result = original.save_to(Some(base_dir.clone()));
        assert!(save_result.is_none(), "save should succeed");

        let expected_path = base_dir.join(STATE_FILE);
        assert!(expected_path.exists(), "state file should exist");

        let (loaded, warning) = NavState::load_from(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(original, loaded);
    }

    #[test]
    fn load_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let (state, warning) = NavState::load_from(Some(base_dir));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(state, NavState::default());
    }

    #[test]
    fn load_from_corrupted_file_returns_default_and_removes_file() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let state_path = base_dir.join(STATE_FILE);
        fs::write(&state_path, "{not json").expect("write file");

        let (state, warning) = NavState::load_from(Some(base_dir.clone()));
        assert_eq!(
            warning,
            Some("notification-state-parse-error".to_string())
        );
        assert_eq!(state, NavState::default());
        assert!(
            !state_path.exists(),
            "corrupt state file should have been removed"
        );

        // A reload after the cleanup is silent.
        let (state, warning) = NavState::load_from(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(state, NavState::default());
    }

    #[test]
    fn round_trip_reproduces_same_visual_state() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        // Simulate a toggle sequence: each toggle rewrites the map in full.
        let mut state = NavState::default();
        state.set_from_sections([("a", true), ("b", false), ("c", false)]);
        state.save_to(Some(base_dir.clone()));
        state.set_from_sections([("a", true), ("b", true), ("c", false)]);
        state.save_to(Some(base_dir.clone()));

        let (loaded, _) = NavState::load_from(Some(base_dir));
        assert!(loaded.is_collapsed("a"));
        assert!(loaded.is_collapsed("b"));
        assert!(!loaded.is_collapsed("c"));
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested_dir = temp_dir.path().join("nested").join("deeply");

        let state = NavState::default();
        let result = state.save_to(Some(nested_dir.clone()));
        assert!(result.is_none(), "save should succeed");
        assert!(nested_dir.join(STATE_FILE).exists());
    }

    #[test]
    fn load_does_not_panic() {
        // NavState::load() should never panic, even if the real state file
        // exists on the developer's machine.
        let _state = NavState::load();
    }
}
