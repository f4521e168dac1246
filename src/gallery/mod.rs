// SPDX-License-Identifier: MPL-2.0
//! Gallery data model: ordered image collections per album.
//!
//! A [`GalleryList`] is fixed at scan time and never mutated afterwards; the
//! lightbox navigates it purely by index.

pub mod lightbox;

pub use lightbox::{Lightbox, LightboxInfo};

use std::path::{Path, PathBuf};

/// One enterable image entry in the lightbox sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    /// Full-size image path.
    pub path: PathBuf,
    /// Optional caption shown under the image in the lightbox.
    pub caption: Option<String>,
}

impl GalleryItem {
    /// Creates an item without a caption.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            caption: None,
        }
    }

    /// Creates an item with a caption.
    #[must_use]
    pub fn with_caption(path: PathBuf, caption: String) -> Self {
        Self {
            path,
            caption: Some(caption),
        }
    }

    /// Returns the file name, used as a fallback label in the panel.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Returns the caption if present, the file name otherwise.
    #[must_use]
    pub fn label(&self) -> String {
        self.caption.clone().unwrap_or_else(|| self.file_name())
    }
}

/// An ordered, immutable sequence of gallery items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryList {
    items: Vec<GalleryItem>,
}

impl GalleryList {
    /// Creates a new empty `GalleryList`.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a list from already-ordered items.
    #[must_use]
    pub fn from_items(items: Vec<GalleryItem>) -> Self {
        Self { items }
    }

    /// Returns the item at the given index, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GalleryItem> {
        self.items.get(index)
    }

    /// Returns the path at the given index, if in range.
    #[must_use]
    pub fn path(&self, index: usize) -> Option<&Path> {
        self.items.get(index).map(|item| item.path.as_path())
    }

    /// Returns the total number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the items in display order.
    pub fn iter(&self) -> impl Iterator<Item = &GalleryItem> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> GalleryItem {
        GalleryItem::new(PathBuf::from(name))
    }

    #[test]
    fn new_list_is_empty() {
        let list = GalleryList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.get(0), None);
    }

    #[test]
    fn get_respects_order_and_bounds() {
        let list = GalleryList::from_items(vec![item("a.jpg"), item("b.jpg")]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.path(0), Some(Path::new("a.jpg")));
        assert_eq!(list.path(1), Some(Path::new("b.jpg")));
        assert_eq!(list.get(2), None);
    }

    #[test]
    fn label_prefers_caption_over_file_name() {
        let plain = item("dir/photo.png");
        assert_eq!(plain.label(), "photo.png");

        let captioned =
            GalleryItem::with_caption(PathBuf::from("dir/photo.png"), "Sunset".to_string());
        assert_eq!(captioned.label(), "Sunset");
    }
}
