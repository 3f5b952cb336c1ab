// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the search, settings, and
//! login views.
//!
//! The `App` struct wires together the domains (search, navigation history,
//! localization, settings) and translates messages into side effects like
//! config persistence or query fetching. This module intentionally keeps
//! policy decisions (what full navigation tears down, when preferences are
//! persisted, how locations route to screens) close to the main update loop
//! so it is easy to audit user-facing behavior.

mod message;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::api::client::{ApiClient, DEFAULT_BASE_URL};
use crate::config;
use crate::i18n::fluent::I18n;
use crate::navigation::{History, Location};
use crate::query::codec::{self, PARAM_SIZE};
use crate::ui::search;
use crate::ui::settings::{State as SettingsState, StateConfig as SettingsConfig};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    history: History,
    client: ApiClient,
    search: search::State,
    settings: SettingsState,
    theme_mode: ThemeMode,
    /// Preferred page size persisted for future launches.
    page_size: Option<u32>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("location", &self.history.current().to_string())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1080;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14's boot closure is Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off the breed catalog fetch
    /// plus the first search derived from the starting location.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, flags.i18n_dir, &config);

        let base_url = flags
            .api_url
            .or_else(|| config.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let client = ApiClient::new(base_url);

        let mut location = flags
            .location
            .as_deref()
            .map(Location::parse)
            .unwrap_or_default();

        // The preferred page size only seeds locations that do not carry one
        // of their own; an explicit shared location always wins.
        if let Some(size) = config.effective_page_size() {
            if location.is_search() && !location.params.contains(PARAM_SIZE) {
                location.params.set(PARAM_SIZE, size.to_string());
            }
        }

        let settings = SettingsState::new(SettingsConfig {
            theme_mode: config.theme_mode,
            api_base_url: client.base_url().to_string(),
            page_size: config.effective_page_size(),
        });

        let mut app = App {
            i18n,
            screen: if location.is_search() {
                Screen::Search
            } else {
                Screen::Login
            },
            history: History::new(location),
            client,
            search: search::State::new(),
            settings,
            theme_mode: config.theme_mode,
            page_size: config.effective_page_size(),
        };

        let catalog = search::State::load_catalog(&app.client).map(Message::Search);
        let first_query = if app.history.current().is_search() {
            let state = codec::decode(&app.history.current().params);
            app.search
                .sync(&state, false, &app.client)
                .map(Message::Search)
        } else {
            Task::none()
        };

        (app, Task::batch([catalog, first_query]))
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_subscription(self.screen)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}
