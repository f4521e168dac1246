// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for non-fatal problems.
//!
//! Notifications carry an i18n message key, not resolved text; the toast
//! widget resolves keys at render time so locale switches apply to toasts
//! already on screen.

pub mod manager;
pub mod notification;
pub mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
