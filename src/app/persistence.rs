// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! This module handles saving user preferences to disk: language, theme
//! mode, preferred page size, and the service endpoint.

use super::{App, Message};
use iced::Task;

/// Persists the current preferences to disk.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic by
/// inspecting application state rather than files.
pub(super) fn persist_preferences(app: &App) -> Task<Message> {
    if cfg!(test) {
        return Task::none();
    }

    let mut cfg = crate::config::load().unwrap_or_default();
    cfg.language = Some(app.i18n.current_locale().to_string());
    cfg.theme_mode = app.theme_mode;
    cfg.api_base_url = Some(app.client.base_url().to_string());
    cfg.page_size = app.page_size;

    if let Err(error) = crate::config::save(&cfg) {
        eprintln!("Failed to save config: {:?}", error);
    }

    Task::none()
}
