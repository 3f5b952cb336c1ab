// SPDX-License-Identifier: MPL-2.0
//! Breed filter dropdown for the search toolbar.
//!
//! Shows the breed catalog as a checkbox list with a small text filter on
//! top. The dropdown owns only its presentation state (panel visibility, the
//! typed filter); the actual selection lives in the location's query string
//! and is handed in read-only at render time.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, checkbox, container, scrollable, text_input, Column, Text};
use iced::{Element, Length};
use std::collections::BTreeSet;

// =============================================================================
// Messages
// =============================================================================

/// Messages emitted by the breed dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Toggle the dropdown visibility.
    TogglePanel,
    /// Close the dropdown (e.g., when leaving the screen).
    ClosePanel,
    /// The catalog filter input changed.
    FilterChanged(String),
    /// A breed checkbox was toggled.
    BreedToggled(String),
}

/// Events propagated to the parent component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The given breed should be added to or removed from the selection.
    BreedToggled(String),
}

// =============================================================================
// State
// =============================================================================

/// Presentation state of the dropdown.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub open: bool,
    pub filter: String,
}

/// Processes a dropdown message and returns the event for the parent.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::TogglePanel => {
            state.open = !state.open;
            Event::None
        }
        Message::ClosePanel => {
            state.open = false;
            state.filter.clear();
            Event::None
        }
        Message::FilterChanged(filter) => {
            state.filter = filter;
            Event::None
        }
        Message::BreedToggled(breed) => Event::BreedToggled(breed),
    }
}

// =============================================================================
// View
// =============================================================================

/// Contextual data needed to render the dropdown.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Full breed catalog from the service, alphabetical.
    pub catalog: &'a [String],
    /// Breeds currently selected in the location.
    pub selected: &'a BTreeSet<String>,
    /// Whether the catalog is still being fetched.
    pub catalog_loading: bool,
}

pub fn view(state: &State, ctx: ViewContext<'_>) -> Element<'static, Message> {
    let label = if ctx.selected.is_empty() {
        ctx.i18n.tr("breed-filter-label")
    } else {
        format!("{} ({})", ctx.i18n.tr("breed-filter-label"), ctx.selected.len())
    };

    let toggle = button(Text::new(label).size(typography::BODY))
        .on_press(Message::TogglePanel)
        .style(if ctx.selected.is_empty() {
            styles::button::unselected
        } else {
            styles::button::selected
        });

    let mut column = Column::new().spacing(spacing::XS).push(toggle);

    if state.open {
        column = column.push(panel(state, &ctx));
    }

    column.into()
}

fn panel(state: &State, ctx: &ViewContext<'_>) -> Element<'static, Message> {
    let mut body = Column::new().spacing(spacing::XS);

    body = body.push(
        text_input(&ctx.i18n.tr("breed-filter-placeholder"), &state.filter)
            .on_input(Message::FilterChanged)
            .size(typography::BODY),
    );

    if ctx.catalog_loading {
        body = body.push(Text::new(ctx.i18n.tr("breed-catalog-loading")).size(typography::BODY_SM));
    } else if ctx.catalog.is_empty() {
        body = body.push(Text::new(ctx.i18n.tr("breed-catalog-empty")).size(typography::BODY_SM));
    } else {
        let needle = state.filter.to_lowercase();
        let mut list = Column::new().spacing(spacing::XXS);
        for breed in ctx.catalog {
            if !needle.is_empty() && !breed.to_lowercase().contains(&needle) {
                continue;
            }
            let is_selected = ctx.selected.contains(breed);
            let breed_name = breed.clone();
            list = list.push(
                checkbox(is_selected)
                    .label(breed.clone())
                    .on_toggle(move |_| Message::BreedToggled(breed_name.clone()))
                    .size(sizing::ICON_SM)
                    .text_size(typography::BODY),
            );
        }
        body = body.push(scrollable(list).height(Length::Fixed(260.0)));
    }

    container(body)
        .padding(spacing::SM)
        .width(Length::Fixed(sizing::DROPDOWN_PANEL_WIDTH))
        .style(styles::container::panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_panel_flips_visibility() {
        let mut state = State::default();
        assert_eq!(update(&mut state, Message::TogglePanel), Event::None);
        assert!(state.open);
        update(&mut state, Message::TogglePanel);
        assert!(!state.open);
    }

    #[test]
    fn close_panel_resets_the_filter() {
        let mut state = State {
            open: true,
            filter: "husk".to_string(),
        };
        update(&mut state, Message::ClosePanel);
        assert!(!state.open);
        assert!(state.filter.is_empty());
    }

    #[test]
    fn breed_toggle_is_forwarded_to_the_parent() {
        let mut state = State::default();
        let event = update(&mut state, Message::BreedToggled("Akita".to_string()));
        assert_eq!(event, Event::BreedToggled("Akita".to_string()));
    }
}
