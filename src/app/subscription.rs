// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard events are routed into `App::update` as raw events; the
//! update loop decides what they mean based on the lightbox state, so the
//! arrow keys and Escape only have an effect while the overlay is open.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Creates the native event subscription.
///
/// File drops are forwarded so a dropped directory can be opened as a
/// library. Keyboard events are only forwarded when no widget captured them.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        if let event::Event::Window(iced::window::Event::FileDropped(path)) = &event {
            return Some(Message::FileDropped(path.clone()));
        }

        if let event::Event::Keyboard(..) = &event {
            return match status {
                event::Status::Ignored => Some(Message::RawEvent {
                    window: window_id,
                    event: event.clone(),
                }),
                event::Status::Captured => None,
            };
        }

        None
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss.
///
/// Only active while notifications are showing, so an idle application does
/// not wake up for nothing.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(500)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
