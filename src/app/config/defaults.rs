// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Default thumbnail edge length in the gallery grid (pixels).
pub const DEFAULT_THUMBNAIL_SIZE: u16 = 160;

/// Minimum allowed thumbnail edge length.
pub const MIN_THUMBNAIL_SIZE: u16 = 64;

/// Maximum allowed thumbnail edge length.
pub const MAX_THUMBNAIL_SIZE: u16 = 512;

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Number of thumbnail columns in the gallery grid.
pub const GRID_COLUMNS: usize = 4;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_THUMBNAIL_SIZE > 0);
    assert!(MAX_THUMBNAIL_SIZE >= MIN_THUMBNAIL_SIZE);
    assert!(DEFAULT_THUMBNAIL_SIZE >= MIN_THUMBNAIL_SIZE);
    assert!(DEFAULT_THUMBNAIL_SIZE <= MAX_THUMBNAIL_SIZE);

    assert!(GRID_COLUMNS > 0);
};
