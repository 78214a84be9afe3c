// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native keyboard and window events to top-level messages.

use super::{Message, Shortcut};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Arrow keys and Escape are only routed when no widget captured them.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if let event::Event::Window(iced::window::Event::Resized(size)) = &event {
            return Some(Message::WindowResized(*size));
        }

        if status == event::Status::Captured {
            return None;
        }

        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                shortcut_for(&key).map(Message::Shortcut)
            }
            _ => None,
        }
    })
}

fn shortcut_for(key: &Key) -> Option<Shortcut> {
    match key {
        Key::Named(Named::ArrowLeft) => Some(Shortcut::Previous),
        Key::Named(Named::ArrowRight) => Some(Shortcut::Next),
        Key::Named(Named::Escape) => Some(Shortcut::Escape),
        _ => None,
    }
}

/// Creates a periodic tick subscription for the loading indicator and
/// notification auto-dismiss.
pub fn create_tick_subscription(is_loading: bool, has_notifications: bool) -> Subscription<Message> {
    if is_loading || has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_escape_map_to_shortcuts() {
        assert_eq!(
            shortcut_for(&Key::Named(Named::ArrowRight)),
            Some(Shortcut::Next)
        );
        assert_eq!(
            shortcut_for(&Key::Named(Named::ArrowLeft)),
            Some(Shortcut::Previous)
        );
        assert_eq!(
            shortcut_for(&Key::Named(Named::Escape)),
            Some(Shortcut::Escape)
        );
        assert_eq!(shortcut_for(&Key::Named(Named::Enter)), None);
    }
}
