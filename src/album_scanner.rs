// SPDX-License-Identifier: MPL-2.0
//! Library scanner module for finding albums and their images.
//!
//! A *library* is a directory whose subdirectories are albums. Images placed
//! directly in the library root form a leading album named after the root
//! itself. Albums and their images are ordered deterministically (images
//! according to the configured sort order, albums by name), so gallery
//! indices are stable for the lifetime of a scan.
//!
//! Each album directory may carry a `captions.toml` file mapping file names
//! to display captions:
//!
//! ```toml
//! "beach.jpg" = "Low tide at sunrise"
//! ```
//!
//! A missing captions file is normal; an invalid one is logged and ignored.

use crate::app::config::SortOrder;
use crate::error::Result;
use crate::gallery::{GalleryItem, GalleryList};
use crate::media;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Caption file name within an album directory.
const CAPTIONS_FILE: &str = "captions.toml";

/// One album: a named, ordered image collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Album {
    /// Stable section id (the directory name).
    pub id: String,
    /// Display title shown in the navigation panel.
    pub title: String,
    /// Images in display order.
    pub gallery: GalleryList,
}

impl Album {
    /// Number of images in the album.
    #[must_use]
    pub fn len(&self) -> usize {
        self.gallery.len()
    }

    /// Checks if the album holds no images.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gallery.is_empty()
    }
}

/// Scans a library root and returns its albums in display order.
///
/// Subdirectories without any supported image are skipped. A root with no
/// images anywhere yields an empty vector, which the UI renders as an empty
/// library state.
///
/// # Errors
///
/// Returns an error if the root directory cannot be read. Unreadable
/// subdirectories are logged and skipped rather than failing the scan.
pub fn scan_library(root: &Path, sort_order: SortOrder) -> Result<Vec<Album>> {
    let mut album_dirs = Vec::new();
    let mut root_images = Vec::new();

    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            album_dirs.push(path);
        } else if path.is_file() && media::is_supported_image(&path) {
            root_images.push(path);
        }
    }

    album_dirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let mut albums = Vec::new();

    if !root_images.is_empty() {
        sort_image_files(&mut root_images, sort_order);
        let captions = load_captions(root);
        albums.push(build_album(root, root_images, &captions));
    }

    for dir in album_dirs {
        match scan_album(&dir, sort_order) {
            Ok(Some(album)) => albums.push(album),
            Ok(None) => {}
            Err(err) => {
                log::warn!("skipping unreadable album {}: {}", dir.display(), err);
            }
        }
    }

    Ok(albums)
}

/// Scans a single album directory.
///
/// Returns `Ok(None)` when the directory contains no supported images.
fn scan_album(dir: &Path, sort_order: SortOrder) -> Result<Option<Album>> {
    let mut image_files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && media::is_supported_image(&path) {
            image_files.push(path);
        }
    }

    if image_files.is_empty() {
        return Ok(None);
    }

    sort_image_files(&mut image_files, sort_order);
    let captions = load_captions(dir);
    Ok(Some(build_album(dir, image_files, &captions)))
}

fn build_album(dir: &Path, image_files: Vec<PathBuf>, captions: &BTreeMap<String, String>) -> Album {
    let id = dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.to_string_lossy().into_owned());

    let items = image_files
        .into_iter()
        .map(|path| {
            let caption = path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(|name| captions.get(name))
                .cloned();
            match caption {
                Some(caption) => GalleryItem::with_caption(path, caption),
                None => GalleryItem::new(path),
            }
        })
        .collect();

    Album {
        title: id.clone(),
        id,
        gallery: GalleryList::from_items(items),
    }
}

/// Reads the album's caption map, tolerating absence and corruption.
fn load_captions(dir: &Path) -> BTreeMap<String, String> {
    let path = dir.join(CAPTIONS_FILE);
    if !path.exists() {
        return BTreeMap::new();
    }

    match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(captions) => captions,
            Err(err) => {
                log::warn!("ignoring invalid captions file {}: {}", path.display(), err);
                BTreeMap::new()
            }
        },
        Err(err) => {
            log::warn!("cannot read captions file {}: {}", path.display(), err);
            BTreeMap::new()
        }
    }
}

/// Sorts image file paths according to the specified sort order.
fn sort_image_files(image_files: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            image_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            image_files.sort_by(|a, b| {
                let a_time = a
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                let b_time = b
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                a_time.cmp(&b_time)
            });
        }
        SortOrder::CreatedDate => {
            image_files.sort_by(|a, b| {
                let a_time = a
                    .metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                let b_time = b
                    .metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                a_time.cmp(&b_time)
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_test_image(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test file");
        path
    }

    #[test]
    fn scan_finds_albums_in_name_order() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let travel = temp_dir.path().join("travel");
        let family = temp_dir.path().join("family");
        fs::create_dir(&travel).expect("create travel");
        fs::create_dir(&family).expect("create family");
        create_test_image(&travel, "a.jpg");
        create_test_image(&family, "b.jpg");

        let albums =
            scan_library(temp_dir.path(), SortOrder::Alphabetical).expect("scan failed");

        let ids: Vec<&str> = albums.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["family", "travel"]);
    }

    #[test]
    fn images_within_an_album_are_sorted_by_name() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let album_dir = temp_dir.path().join("album");
        fs::create_dir(&album_dir).expect("create album");
        let img_c = create_test_image(&album_dir, "c.png");
        let img_a = create_test_image(&album_dir, "a.jpg");
        let img_b = create_test_image(&album_dir, "b.gif");

        let albums =
            scan_library(temp_dir.path(), SortOrder::Alphabetical).expect("scan failed");

        assert_eq!(albums.len(), 1);
        let gallery = &albums[0].gallery;
        assert_eq!(gallery.path(0), Some(img_a.as_path()));
        assert_eq!(gallery.path(1), Some(img_b.as_path()));
        assert_eq!(gallery.path(2), Some(img_c.as_path()));
    }

    #[test]
    fn root_images_form_a_leading_album() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "loose.jpg");
        let album_dir = temp_dir.path().join("album");
        fs::create_dir(&album_dir).expect("create album");
        create_test_image(&album_dir, "a.jpg");

        let albums =
            scan_library(temp_dir.path(), SortOrder::Alphabetical).expect("scan failed");

        assert_eq!(albums.len(), 2);
        assert_eq!(albums[0].len(), 1);
        assert_eq!(albums[1].id, "album");
    }

    #[test]
    fn directories_without_images_are_skipped() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let empty = temp_dir.path().join("empty");
        fs::create_dir(&empty).expect("create empty dir");
        fs::write(empty.join("notes.txt"), "not an image").expect("write notes");

        let albums =
            scan_library(temp_dir.path(), SortOrder::Alphabetical).expect("scan failed");
        assert!(albums.is_empty());
    }

    #[test]
    fn captions_are_attached_by_file_name() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let album_dir = temp_dir.path().join("album");
        fs::create_dir(&album_dir).expect("create album");
        create_test_image(&album_dir, "beach.jpg");
        create_test_image(&album_dir, "dunes.jpg");
        fs::write(
            album_dir.join("captions.toml"),
            "\"beach.jpg\" = \"Low tide at sunrise\"\n",
        )
        .expect("write captions");

        let albums =
            scan_library(temp_dir.path(), SortOrder::Alphabetical).expect("scan failed");

        let gallery = &albums[0].gallery;
        assert_eq!(
            gallery.get(0).unwrap().caption.as_deref(),
            Some("Low tide at sunrise")
        );
        assert_eq!(gallery.get(1).unwrap().caption, None);
    }

    #[test]
    fn invalid_captions_file_is_ignored() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let album_dir = temp_dir.path().join("album");
        fs::create_dir(&album_dir).expect("create album");
        create_test_image(&album_dir, "a.jpg");
        fs::write(album_dir.join("captions.toml"), "not = valid = toml")
            .expect("write captions");

        let albums =
            scan_library(temp_dir.path(), SortOrder::Alphabetical).expect("scan failed");

        assert_eq!(albums.len(), 1);
        assert_eq!(albums[0].gallery.get(0).unwrap().caption, None);
    }

    #[test]
    fn captions_file_itself_is_not_listed_as_an_image() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let album_dir = temp_dir.path().join("album");
        fs::create_dir(&album_dir).expect("create album");
        create_test_image(&album_dir, "a.jpg");
        fs::write(album_dir.join("captions.toml"), "").expect("write captions");

        let albums =
            scan_library(temp_dir.path(), SortOrder::Alphabetical).expect("scan failed");
        assert_eq!(albums[0].len(), 1);
    }

    #[test]
    fn scan_missing_root_returns_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("nope");
        assert!(scan_library(&missing, SortOrder::Alphabetical).is_err());
    }
}
