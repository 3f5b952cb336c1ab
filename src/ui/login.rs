// SPDX-License-Identifier: MPL-2.0
//! Login screen stub.
//!
//! Authentication is an external collaborator; only its navigation boundary
//! is modeled. Logging out lands here, and the single action leads back to
//! the search screen.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    LoginRequested,
}

pub fn view<'a>(i18n: &I18n) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr("login-title")).size(typography::TITLE_LG))
        .push(Text::new(i18n.tr("login-message")).size(typography::BODY))
        .push(
            button(Text::new(i18n.tr("login-button")))
                .on_press(Message::LoginRequested)
                .style(styles::button::primary),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
