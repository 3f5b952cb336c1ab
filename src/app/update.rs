// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the main `update` function and all specialized
//! message handlers for different parts of the application. Navigation is
//! centralized here: every location change, whatever triggered it, flows
//! through [`App::apply_navigation`] or the history walkers, so the search
//! screen is always re-synchronized from the location that is actually
//! current.

use super::{persistence, App, Message, Screen};
use crate::api::client::ApiClient;
use crate::navigation::{controller, Location, NavigationMode, NavigationRequest};
use crate::query::codec;
use crate::ui::login;
use crate::ui::navbar;
use crate::ui::search;
use crate::ui::settings;
use iced::Task;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Search(message) => handle_search_message(app, message),
        Message::Settings(message) => handle_settings_message(app, message),
        Message::Navbar(message) => handle_navbar_message(app, message),
        Message::Login(message) => handle_login_message(app, message),
    }
}

fn handle_search_message(app: &mut App, message: search::Message) -> Task<Message> {
    let location = app.history.current().clone();
    let (effect, task) = app
        .search
        .handle_message(message, &app.client, &location);
    let component_task = task.map(Message::Search);

    match effect {
        search::Effect::Navigate(request) => {
            Task::batch([component_task, app.apply_navigation(request)])
        }
        search::Effect::None => component_task,
    }
}

fn handle_navbar_message(app: &mut App, message: navbar::Message) -> Task<Message> {
    match message {
        navbar::Message::Back => {
            if app.history.back().is_some() {
                app.route_to_current(false)
            } else {
                Task::none()
            }
        }
        navbar::Message::Forward => {
            if app.history.forward().is_some() {
                app.route_to_current(false)
            } else {
                Task::none()
            }
        }
        navbar::Message::OpenSettings => {
            app.screen = Screen::Settings;
            Task::none()
        }
        navbar::Message::Logout => app.apply_navigation(controller::logout()),
    }
}

fn handle_settings_message(app: &mut App, message: settings::Message) -> Task<Message> {
    match app.settings.handle_message(message) {
        settings::Event::None => Task::none(),
        settings::Event::LanguageChanged(locale) => {
            app.i18n.set_locale(locale);
            persistence::persist_preferences(app)
        }
        settings::Event::ThemeModeChanged(mode) => {
            app.theme_mode = mode;
            persistence::persist_preferences(app)
        }
        settings::Event::ApiUrlChanged(url) => {
            app.client = ApiClient::new(url);
            let persist = persistence::persist_preferences(app);
            // A new endpoint invalidates everything fetched from the old one.
            let reload = if app.history.current().is_search() {
                app.route_to_current(true)
            } else {
                Task::none()
            };
            Task::batch([persist, reload])
        }
        settings::Event::PageSizeChanged(size) => {
            app.page_size = Some(size);
            persistence::persist_preferences(app)
        }
        settings::Event::Close => {
            app.screen = if app.history.current().is_search() {
                Screen::Search
            } else {
                Screen::Login
            };
            Task::none()
        }
    }
}

fn handle_login_message(app: &mut App, message: login::Message) -> Task<Message> {
    match message {
        login::Message::LoginRequested => app.apply_navigation(NavigationRequest {
            location: Location::default(),
            mode: NavigationMode::Full,
        }),
    }
}

impl App {
    /// Applies a navigation request: records the new location in history and
    /// re-routes. Callers fired this and forgot it; by the time the location
    /// is live, the triggering interaction is long finished.
    pub(super) fn apply_navigation(&mut self, request: NavigationRequest) -> Task<Message> {
        let full = request.mode == NavigationMode::Full;
        self.history.push(request.location);
        self.route_to_current(full)
    }

    /// Points the UI at whatever location the history cursor now designates
    /// and re-derives the search state from its query string.
    pub(super) fn route_to_current(&mut self, full: bool) -> Task<Message> {
        let location = self.history.current().clone();
        if location.is_search() {
            self.screen = Screen::Search;
            let state = codec::decode(&location.params);
            self.search
                .sync(&state, full, &self.client)
                .map(Message::Search)
        } else {
            self.screen = Screen::Login;
            Task::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Flags;

    fn app() -> App {
        let (app, _task) = App::new(Flags {
            location: Some("?breeds=Poodle&size=10".to_string()),
            ..Flags::default()
        });
        app
    }

    #[test]
    fn startup_location_seeds_history_and_screen() {
        let app = app();
        assert_eq!(app.screen, Screen::Search);
        assert_eq!(
            app.history.current().params.get("breeds"),
            Some("Poodle")
        );
    }

    #[test]
    fn navigation_request_pushes_history_and_stays_on_search() {
        let mut app = app();
        let request = controller::set_page_size(&app.history.current().clone(), 50);
        let _task = app.apply_navigation(request);

        assert_eq!(app.history.current().params.get("size"), Some("50"));
        assert_eq!(app.screen, Screen::Search);
        assert!(app.history.can_go_back());
    }

    #[test]
    fn back_restores_the_previous_location() {
        let mut app = app();
        let request = controller::set_page_size(&app.history.current().clone(), 50);
        let _task = app.apply_navigation(request);

        let _task = handle_navbar_message(&mut app, navbar::Message::Back);
        assert_eq!(app.history.current().params.get("size"), Some("10"));

        let _task = handle_navbar_message(&mut app, navbar::Message::Forward);
        assert_eq!(app.history.current().params.get("size"), Some("50"));
    }

    #[test]
    fn logout_routes_to_the_login_screen() {
        let mut app = app();
        let _task = handle_navbar_message(&mut app, navbar::Message::Logout);
        assert_eq!(app.screen, Screen::Login);

        let _task = handle_login_message(&mut app, login::Message::LoginRequested);
        assert_eq!(app.screen, Screen::Search);
        assert!(app.history.current().is_search());
    }

    #[test]
    fn settings_close_returns_to_the_current_screen() {
        let mut app = app();
        let _task = handle_navbar_message(&mut app, navbar::Message::OpenSettings);
        assert_eq!(app.screen, Screen::Settings);

        let _task = handle_settings_message(&mut app, settings::Message::ClosePressed);
        assert_eq!(app.screen, Screen::Search);
    }
}
