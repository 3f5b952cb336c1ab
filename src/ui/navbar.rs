// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! Provides the back/forward history controls, the current location readout,
//! and the settings and logout entry points shown above the search screen.
//! The location readout doubles as the shareable address of the current view.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, space, text, Container, Row, Text};
use iced::{alignment::Vertical, Element, Length, Theme};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// String form of the current location, shown as the address readout.
    pub location: String,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Back,
    Forward,
    OpenSettings,
    Logout,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'static, Message> {
    let back = button(Text::new("←").size(typography::BODY_LG))
        .on_press_maybe(ctx.can_go_back.then_some(Message::Back))
        .style(styles::button::unselected);

    let forward = button(Text::new("→").size(typography::BODY_LG))
        .on_press_maybe(ctx.can_go_forward.then_some(Message::Forward))
        .style(styles::button::unselected);

    let address = container(
        Text::new(ctx.location)
            .size(typography::BODY_SM)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().secondary.base.text),
            }),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::container::panel);

    let settings = button(Text::new(ctx.i18n.tr("settings-button")).size(typography::BODY))
        .on_press(Message::OpenSettings)
        .style(styles::button::unselected);

    let logout = button(Text::new(ctx.i18n.tr("logout-button")).size(typography::BODY))
        .on_press(Message::Logout)
        .style(styles::button::primary);

    Container::new(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(back)
            .push(forward)
            .push(address)
            .push(space().width(Length::Fill))
            .push(settings)
            .push(logout),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .into()
}
