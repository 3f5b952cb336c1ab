// SPDX-License-Identifier: MPL-2.0
//! This module defines the UI components for the application's settings view.
//! It provides language selection, theme mode, default page size, and the
//! search service endpoint.

use crate::config::PAGE_SIZE_CHOICES;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, pick_list, scrollable, text_input, Column, Container, Row, Text};
use iced::{alignment::Horizontal, Element, Length};
use unic_langid::LanguageIdentifier;

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    ApiUrlChanged(String),
    ApiUrlSubmitted,
    PageSizePicked(u32),
    ClosePressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    LanguageChanged(LanguageIdentifier),
    ThemeModeChanged(ThemeMode),
    /// The endpoint was submitted; the app rebuilds its client and persists.
    ApiUrlChanged(String),
    PageSizeChanged(u32),
    Close,
}

/// Initial values handed over by the application on startup.
#[derive(Debug, Clone)]
pub struct StateConfig {
    pub theme_mode: ThemeMode,
    pub api_base_url: String,
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct State {
    theme_mode: ThemeMode,
    /// Edit buffer for the endpoint input; applied on submit only.
    api_base_url: String,
    page_size: Option<u32>,
}

impl State {
    pub fn new(config: StateConfig) -> Self {
        Self {
            theme_mode: config.theme_mode,
            api_base_url: config.api_base_url,
            page_size: config.page_size,
        }
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    pub fn handle_message(&mut self, message: Message) -> Event {
        match message {
            Message::LanguageSelected(locale) => Event::LanguageChanged(locale),
            Message::ThemeModeSelected(mode) => {
                self.theme_mode = mode;
                Event::ThemeModeChanged(mode)
            }
            Message::ApiUrlChanged(url) => {
                self.api_base_url = url;
                Event::None
            }
            Message::ApiUrlSubmitted => Event::ApiUrlChanged(self.api_base_url.clone()),
            Message::PageSizePicked(size) => {
                self.page_size = Some(size);
                Event::PageSizeChanged(size)
            }
            Message::ClosePressed => Event::Close,
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let title = Text::new(ctx.i18n.tr("settings-title")).size(typography::TITLE_LG);

        let language_section = self.language_section(ctx.i18n);
        let theme_section = self.theme_section(ctx.i18n);
        let page_size_section = self.page_size_section(ctx.i18n);
        let endpoint_section = self.endpoint_section(ctx.i18n);

        let close = button(Text::new(ctx.i18n.tr("settings-close-button")))
            .on_press(Message::ClosePressed)
            .style(styles::button::primary);

        let content = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::XL)
            .align_x(Horizontal::Center)
            .push(title)
            .push(language_section)
            .push(theme_section)
            .push(page_size_section)
            .push(endpoint_section)
            .push(close);

        scrollable(
            Container::new(content)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .into()
    }

    fn language_section<'a>(&self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut column = Column::new()
            .spacing(spacing::XS)
            .push(Text::new(i18n.tr("select-language-label")).size(typography::TITLE_SM));

        for locale in &i18n.available_locales {
            let display_name = locale.to_string();

            // Check for a translated name for the language, e.g. "language-name-fr"
            let translated_name_key = format!("language-name-{}", locale);
            let translated_name = i18n.tr(&translated_name_key);
            let button_text = if translated_name.starts_with("MISSING:") {
                display_name.clone()
            } else {
                format!("{} ({})", translated_name, display_name)
            };

            let is_current = i18n.current_locale() == locale;
            let locale_button = button(Text::new(button_text).size(typography::BODY))
                .on_press(Message::LanguageSelected(locale.clone()))
                .style(if is_current {
                    styles::button::selected
                } else {
                    styles::button::unselected
                });
            column = column.push(locale_button);
        }

        column.into()
    }

    fn theme_section<'a>(&self, i18n: &'a I18n) -> Element<'a, Message> {
        let choices = [
            (ThemeMode::Light, i18n.tr("theme-light-label")),
            (ThemeMode::Dark, i18n.tr("theme-dark-label")),
            (ThemeMode::System, i18n.tr("theme-system-label")),
        ];

        let mut row = Row::new().spacing(spacing::XS);
        for (mode, label) in choices {
            let mode_button = button(Text::new(label).size(typography::BODY))
                .on_press(Message::ThemeModeSelected(mode))
                .style(if self.theme_mode == mode {
                    styles::button::selected
                } else {
                    styles::button::unselected
                });
            row = row.push(mode_button);
        }

        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(i18n.tr("theme-mode-label")).size(typography::TITLE_SM))
            .push(row)
            .into()
    }

    fn page_size_section<'a>(&self, i18n: &'a I18n) -> Element<'a, Message> {
        let picker = pick_list(
            PAGE_SIZE_CHOICES.to_vec(),
            self.page_size,
            Message::PageSizePicked,
        )
        .text_size(typography::BODY);

        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(i18n.tr("default-page-size-label")).size(typography::TITLE_SM))
            .push(picker)
            .into()
    }

    fn endpoint_section<'a>(&self, i18n: &'a I18n) -> Element<'a, Message> {
        let input = text_input(&i18n.tr("api-url-placeholder"), &self.api_base_url)
            .on_input(Message::ApiUrlChanged)
            .on_submit(Message::ApiUrlSubmitted)
            .size(typography::BODY)
            .width(Length::Fixed(420.0));

        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(i18n.tr("api-url-label")).size(typography::TITLE_SM))
            .push(input)
            .push(Text::new(i18n.tr("api-url-hint")).size(typography::CAPTION))
            .into()
    }
}

/// Context required to render the settings view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}
