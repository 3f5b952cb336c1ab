// SPDX-License-Identifier: MPL-2.0
//! Search screen component.
//!
//! Owns everything the results page needs between two locations: the query
//! adapter, the breed catalog, the photo cache, and the match slot. It never
//! mutates the location itself; user intent leaves as an [`Effect`] and comes
//! back through [`State::sync`] once the application has applied the
//! navigation, which keeps the query string the single source of truth.

use crate::api::adapter::{PendingQuery, QueryAdapter, QueryStatus};
use crate::api::client::ApiClient;
use crate::api::models::QueryResult;
use crate::config::DEFAULT_PHOTO_CACHE_ENTRIES;
use crate::error::ApiError;
use crate::i18n::fluent::I18n;
use crate::matching::{self, MatchSlot};
use crate::navigation::{controller, Location, NavigationRequest};
use crate::query::{codec, SearchState};
use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::search::{breed_dropdown, controls, photos::PhotoCache, results};
use crate::ui::styles;
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Task};

/// Messages consumed by the search screen.
#[derive(Debug, Clone)]
pub enum Message {
    Dropdown(breed_dropdown::Message),
    Controls(controls::Message),
    ClearFilters,
    RetrySearch,
    ToggleErrorDetails,
    /// The breed catalog fetch finished.
    BreedsLoaded(Result<Vec<String>, ApiError>),
    /// A search fetch finished; `key` identifies the state it was issued for.
    ResultsLoaded {
        key: String,
        outcome: Result<QueryResult, ApiError>,
    },
    /// A dog photo download finished.
    PhotoLoaded {
        url: String,
        outcome: Result<Vec<u8>, ApiError>,
    },
}

/// Side effects the application should perform after handling a message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Navigate(NavigationRequest),
}

/// Lifecycle of the breed catalog used by the filter dropdown.
#[derive(Debug, Clone)]
enum CatalogStatus {
    Loading,
    Loaded(Vec<String>),
    Failed(ApiError),
}

pub struct State {
    adapter: QueryAdapter,
    match_slot: MatchSlot,
    dropdown: breed_dropdown::State,
    catalog: CatalogStatus,
    photos: PhotoCache,
    show_error_details: bool,
}

impl State {
    pub fn new() -> Self {
        Self {
            adapter: QueryAdapter::default(),
            match_slot: MatchSlot::default(),
            dropdown: breed_dropdown::State::default(),
            catalog: CatalogStatus::Loading,
            photos: PhotoCache::new(DEFAULT_PHOTO_CACHE_ENTRIES),
            show_error_details: false,
        }
    }

    /// Starts the one-time breed catalog fetch.
    pub fn load_catalog(client: &ApiClient) -> Task<Message> {
        let client = client.clone();
        Task::perform(
            async move { client.list_breeds().await },
            Message::BreedsLoaded,
        )
    }

    /// Aligns the screen with the search state decoded from the current
    /// location. `full` applies full-navigation semantics: caches are
    /// flushed and the page refetches even if it was already loaded.
    pub fn sync(&mut self, state: &SearchState, full: bool, client: &ApiClient) -> Task<Message> {
        let pending = if full {
            self.adapter.reload(state)
        } else {
            self.adapter.activate(state)
        };
        self.show_error_details = false;
        self.publish_match();

        let fetch = match pending {
            Some(pending) => spawn_search(client, pending),
            None => Task::none(),
        };
        Task::batch([fetch, self.photo_tasks(client)])
    }

    pub fn handle_message(
        &mut self,
        message: Message,
        client: &ApiClient,
        location: &Location,
    ) -> (Effect, Task<Message>) {
        match message {
            Message::Dropdown(msg) => match breed_dropdown::update(&mut self.dropdown, msg) {
                breed_dropdown::Event::BreedToggled(breed) => {
                    let current = codec::decode(&location.params);
                    let mut selection: Vec<String> = current.breeds.into_iter().collect();
                    match selection.iter().position(|b| *b == breed) {
                        Some(index) => {
                            selection.remove(index);
                        }
                        None => selection.push(breed),
                    }
                    (
                        Effect::Navigate(controller::set_filters(location, &selection)),
                        Task::none(),
                    )
                }
                breed_dropdown::Event::None => (Effect::None, Task::none()),
            },
            Message::Controls(msg) => {
                let current = codec::decode(&location.params);
                let request = match msg {
                    controls::Message::SortPicked(value) => controller::set_sort(location, &value),
                    controls::Message::PageSizePicked(size) => {
                        controller::set_page_size(location, size)
                    }
                    controls::Message::NextPage => {
                        controller::set_page_offset(location, current.next_from())
                    }
                    controls::Message::PreviousPage => {
                        controller::set_page_offset(location, current.previous_from())
                    }
                };
                (Effect::Navigate(request), Task::none())
            }
            Message::ClearFilters => (
                Effect::Navigate(controller::clear_filters(location)),
                Task::none(),
            ),
            Message::RetrySearch => {
                let fetch = match self.adapter.retry() {
                    Some(pending) => spawn_search(client, pending),
                    None => Task::none(),
                };
                (Effect::None, fetch)
            }
            Message::ToggleErrorDetails => {
                self.show_error_details = !self.show_error_details;
                (Effect::None, Task::none())
            }
            Message::BreedsLoaded(result) => {
                self.catalog = match result {
                    Ok(mut breeds) => {
                        breeds.sort();
                        CatalogStatus::Loaded(breeds)
                    }
                    Err(error) => {
                        eprintln!("Failed to load breed catalog: {}", error);
                        CatalogStatus::Failed(error)
                    }
                };
                (Effect::None, Task::none())
            }
            Message::ResultsLoaded { key, outcome } => {
                if self.adapter.complete(&key, outcome) {
                    self.publish_match();
                    (Effect::None, self.photo_tasks(client))
                } else {
                    // Late answer for a superseded state; the cache kept what
                    // is worth keeping.
                    eprintln!("Ignoring stale response for query: {}", key);
                    (Effect::None, Task::none())
                }
            }
            Message::PhotoLoaded { url, outcome } => {
                match outcome {
                    Ok(bytes) => self.photos.complete_fetch(&url, bytes),
                    Err(error) => {
                        eprintln!("Failed to load photo {}: {}", url, error);
                        self.photos.abort_fetch(&url);
                    }
                }
                (Effect::None, Task::none())
            }
        }
    }

    /// Re-resolves the match against the current page and writes it into the
    /// slot. The slot's guard makes the write idempotent, so calling this on
    /// every activation or completion is safe.
    fn publish_match(&mut self) {
        let resolved = self
            .adapter
            .data()
            .and_then(|data| matching::resolve(data))
            .cloned();
        self.match_slot.publish(resolved.as_ref());
    }

    /// Spawns downloads for photos on the current page that are neither
    /// cached nor already in flight.
    fn photo_tasks(&mut self, client: &ApiClient) -> Task<Message> {
        let urls: Vec<String> = match self.adapter.data() {
            Some(data) => data.dogs.iter().map(|dog| dog.img.clone()).collect(),
            None => return Task::none(),
        };

        let mut tasks = Vec::new();
        for url in urls {
            if !self.photos.begin_fetch(&url) {
                continue;
            }
            let client = client.clone();
            tasks.push(Task::perform(
                async move {
                    let outcome = client.fetch_photo(&url).await;
                    (url, outcome)
                },
                |(url, outcome)| Message::PhotoLoaded { url, outcome },
            ));
        }
        Task::batch(tasks)
    }

    pub fn is_loading(&self) -> bool {
        self.adapter.is_loading()
    }

    // =========================================================================
    // View
    // =========================================================================

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let state = codec::decode(&ctx.location.params);

        match self.adapter.status() {
            QueryStatus::Idle | QueryStatus::Loading => loading_view(ctx.i18n),
            QueryStatus::Failed(error) => self.error_view(ctx.i18n, error),
            QueryStatus::Loaded => match self.adapter.data() {
                Some(data) => self.loaded_view(ctx.i18n, &state, data),
                None => loading_view(ctx.i18n),
            },
        }
    }

    fn error_view<'a>(&self, i18n: &I18n, error: &ApiError) -> Element<'a, Message> {
        let display = ErrorDisplay::new(ErrorSeverity::Error)
            .title(i18n.tr("error-search-title"))
            .message(i18n.tr(error.i18n_key()))
            .details(error.to_string())
            .details_visible(self.show_error_details)
            .on_toggle_details(Message::ToggleErrorDetails)
            .details_labels(
                i18n.tr("error-show-details"),
                i18n.tr("error-hide-details"),
                i18n.tr("error-details-heading"),
            )
            .action(i18n.tr("retry-button"), Message::RetrySearch);

        Container::new(display.view())
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
    }

    fn loaded_view<'a>(
        &'a self,
        i18n: &'a I18n,
        state: &SearchState,
        data: &'a QueryResult,
    ) -> Element<'a, Message> {
        let (catalog, catalog_loading): (&[String], bool) = match &self.catalog {
            CatalogStatus::Loading => (&[], true),
            CatalogStatus::Loaded(breeds) => (breeds.as_slice(), false),
            CatalogStatus::Failed(_) => (&[], false),
        };

        let dropdown = breed_dropdown::view(
            &self.dropdown,
            breed_dropdown::ViewContext {
                i18n,
                catalog,
                selected: &state.breeds,
                catalog_loading,
            },
        )
        .map(Message::Dropdown);

        let clear = button(Text::new(i18n.tr("clear-filters-button")).size(typography::BODY))
            .on_press_maybe((!state.breeds.is_empty()).then_some(Message::ClearFilters))
            .style(styles::button::unselected);

        let controls_row = controls::view(controls::ViewContext {
            i18n,
            state,
            has_next_page: data.dogs.len() as u32 >= state.size,
            page_len: data.dogs.len(),
        })
        .map(Message::Controls);

        let toolbar = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Top)
            .push(dropdown)
            .push(clear)
            .push(controls_row);

        let sorted = results::sort_dogs(&data.dogs, &state.sort_by);
        let grid = results::view(results::ViewContext {
            i18n,
            dogs: &sorted,
            matched: self.match_slot.selected(),
            photos: &self.photos,
        });

        let content = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .push(toolbar)
            .push(grid);

        scrollable(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

fn loading_view<'a>(i18n: &I18n) -> Element<'a, Message> {
    Container::new(Text::new(i18n.tr("loading-message")).size(typography::TITLE_SM))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Contextual data needed to render the search screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub location: &'a Location,
}

fn spawn_search(client: &ApiClient, pending: PendingQuery) -> Task<Message> {
    let client = client.clone();
    let PendingQuery { key, request } = pending;
    Task::perform(
        async move {
            let outcome = client.search_dogs(&request).await;
            (key, outcome)
        },
        |(key, outcome)| Message::ResultsLoaded { key, outcome },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Dog;
    use crate::navigation::NavigationMode;
    use crate::query::codec::PARAM_BREEDS;

    fn dog(id: &str) -> Dog {
        Dog {
            id: id.to_string(),
            img: String::new(),
            name: id.to_uppercase(),
            age: 2,
            zip_code: "00000".to_string(),
            breed: "Poodle".to_string(),
        }
    }

    fn page(ids: &[&str], match_id: Option<&str>) -> QueryResult {
        QueryResult {
            dogs: ids.iter().map(|id| dog(id)).collect(),
            match_id: match_id.map(str::to_string),
        }
    }

    fn loaded_state(location: &Location, result: QueryResult) -> State {
        let mut state = State::new();
        let search = codec::decode(&location.params);
        let pending = state.adapter.activate(&search).expect("first fetch");
        state.adapter.complete(&pending.key, Ok(result));
        state.publish_match();
        state
    }

    #[test]
    fn breed_toggle_navigates_shallowly_with_the_new_selection() {
        let location = Location::parse("?breeds=Poodle");
        let mut state = State::new();
        let client = ApiClient::default();

        let (effect, _task) = state.handle_message(
            Message::Dropdown(breed_dropdown::Message::BreedToggled("Husky".to_string())),
            &client,
            &location,
        );

        match effect {
            Effect::Navigate(request) => {
                assert_eq!(request.mode, NavigationMode::Shallow);
                assert_eq!(
                    request.location.params.get(PARAM_BREEDS),
                    Some("Husky_Poodle")
                );
            }
            Effect::None => panic!("expected a navigation effect"),
        }
    }

    #[test]
    fn toggling_a_selected_breed_removes_it() {
        let location = Location::parse("?breeds=Husky_Poodle");
        let mut state = State::new();
        let client = ApiClient::default();

        let (effect, _task) = state.handle_message(
            Message::Dropdown(breed_dropdown::Message::BreedToggled("Husky".to_string())),
            &client,
            &location,
        );

        match effect {
            Effect::Navigate(request) => {
                assert_eq!(request.location.params.get(PARAM_BREEDS), Some("Poodle"));
            }
            Effect::None => panic!("expected a navigation effect"),
        }
    }

    #[test]
    fn next_page_advances_by_the_page_size() {
        let location = Location::parse("?size=10&from=10");
        let mut state = State::new();
        let client = ApiClient::default();

        let (effect, _task) = state.handle_message(
            Message::Controls(controls::Message::NextPage),
            &client,
            &location,
        );

        match effect {
            Effect::Navigate(request) => {
                assert_eq!(request.location.params.get("from"), Some("20"));
            }
            Effect::None => panic!("expected a navigation effect"),
        }
    }

    #[test]
    fn clear_filters_requests_full_navigation() {
        let location = Location::parse("?breeds=Poodle&size=10");
        let mut state = State::new();
        let client = ApiClient::default();

        let (effect, _task) = state.handle_message(Message::ClearFilters, &client, &location);
        match effect {
            Effect::Navigate(request) => {
                assert_eq!(request.mode, NavigationMode::Full);
                assert!(!request.location.params.contains(PARAM_BREEDS));
            }
            Effect::None => panic!("expected a navigation effect"),
        }
    }

    #[test]
    fn results_completion_publishes_the_match_once() {
        let location = Location::default();
        let state = loaded_state(&location, page(&["a", "b"], Some("b")));
        assert_eq!(state.match_slot.selected().expect("match").id, "b");
    }

    #[test]
    fn missing_match_clears_the_slot() {
        let location = Location::default();
        let mut state = loaded_state(&location, page(&["a", "b"], Some("b")));

        // A new state arrives whose page has no match.
        let next = SearchState {
            from: 20,
            ..codec::decode(&location.params)
        };
        let pending = state.adapter.activate(&next).expect("second fetch");
        state.adapter.complete(&pending.key, Ok(page(&["c"], None)));
        state.publish_match();

        assert!(state.match_slot.selected().is_none());
    }

    #[test]
    fn stale_completion_does_not_touch_the_match_slot() {
        let location = Location::default();
        let client = ApiClient::default();
        let mut state = State::new();

        let s1 = codec::decode(&location.params);
        let s2 = SearchState { from: 20, ..s1.clone() };
        let p1 = state.adapter.activate(&s1).expect("fetch for s1");
        state.adapter.activate(&s2).expect("fetch for s2");

        let (_effect, _task) = state.handle_message(
            Message::ResultsLoaded {
                key: p1.key,
                outcome: Ok(page(&["a"], Some("a"))),
            },
            &client,
            &location,
        );

        assert!(
            state.match_slot.selected().is_none(),
            "stale page must not publish a match"
        );
    }
}
