// SPDX-License-Identifier: MPL-2.0
//! Lightbox view-state controller.
//!
//! The controller owns the open/closed state and the current index; widget
//! rendering is a pure function of a [`LightboxInfo`] snapshot. The only
//! mutators are [`Lightbox::open`], [`Lightbox::next`], [`Lightbox::prev`]
//! and [`Lightbox::close`].
//!
//! Navigation does not wrap: at the first item `prev` is a no-op, at the
//! last item `next` is a no-op, and the matching control is hidden. An open
//! request with an out-of-range index is silently ignored.

/// Lightbox view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Overlay hidden.
    #[default]
    Closed,
    /// Overlay visible, showing the item at this index.
    Open(usize),
}

/// Snapshot of the lightbox state for UI rendering.
///
/// Contains everything the overlay needs without access to the controller,
/// mirroring how the navigation panel renders from its own snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LightboxInfo {
    /// Whether the overlay is visible.
    pub is_open: bool,
    /// Index of the displayed item while open.
    pub current_index: Option<usize>,
    /// Total number of items in the backing gallery.
    pub total_count: usize,
    /// Whether the previous control should be shown.
    pub has_previous: bool,
    /// Whether the next control should be shown.
    pub has_next: bool,
}

impl LightboxInfo {
    /// Returns the 1-based position counter, e.g. `"3 / 12"`.
    #[must_use]
    pub fn counter_text(&self) -> Option<String> {
        self.current_index
            .map(|index| format!("{} / {}", index + 1, self.total_count))
    }
}

/// Modal image viewer state machine.
///
/// Created once per application; the backing item count is passed into each
/// transition so the controller never holds a reference to the gallery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lightbox {
    state: ViewState,
}

impl Lightbox {
    /// Creates a closed lightbox.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ViewState::Closed,
        }
    }

    /// Returns the current view state.
    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Whether the overlay is currently visible.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, ViewState::Open(_))
    }

    /// Index of the displayed item, if open.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            ViewState::Open(index) => Some(index),
            ViewState::Closed => None,
        }
    }

    /// Opens the lightbox at `index` into a gallery of `count` items.
    ///
    /// Out-of-range requests (including any request against an empty
    /// gallery) leave the state unchanged and return `false`.
    pub fn open(&mut self, index: usize, count: usize) -> bool {
        if index >= count {
            return false;
        }
        self.state = ViewState::Open(index);
        true
    }

    /// Advances to the next item; no-op at the last item or while closed.
    pub fn next(&mut self, count: usize) -> bool {
        match self.state {
            ViewState::Open(index) if index + 1 < count => {
                self.state = ViewState::Open(index + 1);
                true
            }
            _ => false,
        }
    }

    /// Steps back to the previous item; no-op at the first item or while closed.
    pub fn prev(&mut self) -> bool {
        match self.state {
            ViewState::Open(index) if index > 0 => {
                self.state = ViewState::Open(index - 1);
                true
            }
            _ => false,
        }
    }

    /// Closes the overlay. Idempotent.
    pub fn close(&mut self) {
        self.state = ViewState::Closed;
    }

    /// Returns a snapshot for rendering against a gallery of `count` items.
    #[must_use]
    pub fn info(&self, count: usize) -> LightboxInfo {
        match self.state {
            ViewState::Open(index) => LightboxInfo {
                is_open: true,
                current_index: Some(index),
                total_count: count,
                has_previous: index > 0,
                has_next: index + 1 < count,
            },
            ViewState::Closed => LightboxInfo {
                is_open: false,
                current_index: None,
                total_count: count,
                has_previous: false,
                has_next: false,
            },
        }
    }
}
