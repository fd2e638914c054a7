// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.
//!
//! Two subscriptions exist, both gated on actual need so an idle app
//! schedules nothing: a periodic tick while any toast carries a deadline
//! (or diagnostics are flowing), and an ESC listener while the popup stack
//! is non-empty.

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use crate::popup;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Creates the periodic tick subscription for toast auto-dismiss and
/// diagnostics draining.
pub fn create_tick_subscription(
    has_pending_dismissals: bool,
    has_pending_diagnostics: bool,
) -> Subscription<Message> {
    if has_pending_dismissals || has_pending_diagnostics {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the keyboard subscription routing ESC to the popup stack.
///
/// Only the topmost popup reacts to ESC; the stack enforces that, this
/// subscription just delivers the gesture while any popup is open.
pub fn create_escape_subscription(has_popups: bool) -> Subscription<Message> {
    if !has_popups {
        return Subscription::none();
    }
    event::listen_with(|event, status, _window_id| {
        if let event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) = &event
        {
            match status {
                event::Status::Ignored => Some(Message::Popup(popup::Message::Escape)),
                event::Status::Captured => None,
            }
        } else {
            None
        }
    })
}
