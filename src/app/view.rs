// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{App, Message, Screen};
use crate::ui::login;
use crate::ui::navbar;
use crate::ui::search;
use crate::ui::settings::ViewContext as SettingsViewContext;
use iced::{
    widget::{Column, Container},
    Element, Length,
};

/// Renders the current application view based on the active screen.
pub(super) fn view(app: &App) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match app.screen {
        Screen::Search => view_search(app),
        Screen::Settings => app
            .settings
            .view(SettingsViewContext { i18n: &app.i18n })
            .map(Message::Settings),
        Screen::Login => login::view(&app.i18n).map(Message::Login),
    };

    Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_search(app: &App) -> Element<'_, Message> {
    let navbar_view = navbar::view(navbar::ViewContext {
        i18n: &app.i18n,
        location: app.history.current().to_string(),
        can_go_back: app.history.can_go_back(),
        can_go_forward: app.history.can_go_forward(),
    })
    .map(Message::Navbar);

    let search_view = app
        .search
        .view(search::ViewContext {
            i18n: &app.i18n,
            location: app.history.current(),
        })
        .map(Message::Search);

    Column::new()
        .push(navbar_view)
        .push(search_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
