// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts mirror a browser's history keys: Alt+Left goes back,
//! Alt+Right goes forward. They are only live on the search screen, where
//! the navbar showing the same controls is visible.

use super::{Message, Screen};
use crate::ui::navbar;
use iced::keyboard::{self, key, Key};
use iced::{event, Subscription};

pub(super) fn create_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Search => event::listen_with(|event, status, _window| {
            // Only react to key presses not already consumed by a focused widget,
            // matching the behavior of iced 0.13's `keyboard::on_key_press`.
            if status == event::Status::Captured {
                return None;
            }
            let event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event
            else {
                return None;
            };
            if !modifiers.alt() {
                return None;
            }
            match key.as_ref() {
                Key::Named(key::Named::ArrowLeft) => Some(Message::Navbar(navbar::Message::Back)),
                Key::Named(key::Named::ArrowRight) => {
                    Some(Message::Navbar(navbar::Message::Forward))
                }
                _ => None,
            }
        }),
        Screen::Settings | Screen::Login => Subscription::none(),
    }
}
