// SPDX-License-Identifier: MPL-2.0
//! End-to-end checks of the location-backed search state: the codec, the
//! navigation mutations, the history stack, and the query adapter working
//! against each other the way the running application drives them.

use iced_fetch::api::adapter::QueryAdapter;
use iced_fetch::api::models::{Dog, QueryResult};
use iced_fetch::matching;
use iced_fetch::navigation::{controller, History, Location, NavigationMode};
use iced_fetch::query::codec;
use iced_fetch::query::SearchState;

fn dog(id: &str, breed: &str) -> Dog {
    Dog {
        id: id.to_string(),
        img: String::new(),
        name: id.to_uppercase(),
        age: 3,
        zip_code: "90210".to_string(),
        breed: breed.to_string(),
    }
}

fn page(ids: &[&str], match_id: Option<&str>) -> QueryResult {
    QueryResult {
        dogs: ids.iter().map(|id| dog(id, "Poodle")).collect(),
        match_id: match_id.map(str::to_string),
    }
}

#[test]
fn mutation_chain_round_trips_through_the_location() {
    // Start with a bare search location and apply the user's journey:
    // pick two breeds, switch the sort, widen the page.
    let start = Location::default();
    let step1 = controller::set_filters(&start, &["Poodle".into(), "Siberian Husky".into()]);
    let step2 = controller::set_sort(&step1.location, "Breed Group");
    let step3 = controller::set_page_size(&step2.location, 50);

    // Everything the view needs is recoverable from the final string alone.
    let reparsed = Location::parse(&step3.location.to_string());
    let state = codec::decode(&reparsed.params);

    assert!(state.breeds.contains("Poodle"));
    assert!(state.breeds.contains("Siberian Husky"));
    assert_eq!(state.sort_by, "Breed Group");
    assert_eq!(state.size, 50);
    assert_eq!(state.from, 0);
}

#[test]
fn history_restores_a_state_equal_to_when_it_was_pushed() {
    let mut history = History::default();
    let snapshot_a = codec::decode(&history.current().params);

    let next = controller::set_filters(history.current(), &["Akita".into()]);
    history.push(next.location);
    let snapshot_b = codec::decode(&history.current().params);

    let next = controller::set_page_offset(history.current(), 20);
    history.push(next.location);

    let restored = history.back().expect("one step back");
    assert_eq!(codec::decode(&restored.params), snapshot_b);

    let restored = history.back().expect("two steps back");
    assert_eq!(codec::decode(&restored.params), snapshot_a);
}

#[test]
fn full_and_shallow_navigation_drive_the_adapter_differently() {
    let mut adapter = QueryAdapter::default();
    let state = SearchState::default();

    // First visit fetches, completion caches.
    let pending = adapter.activate(&state).expect("initial fetch");
    adapter.complete(&pending.key, Ok(page(&["a"], None)));

    // A shallow hop away and back is served from cache.
    let away = SearchState {
        from: 20,
        ..state.clone()
    };
    let pending_away = adapter.activate(&away).expect("fetch for page 2");
    adapter.complete(&pending_away.key, Ok(page(&["b"], None)));
    assert!(adapter.activate(&state).is_none(), "cache hit, no refetch");

    // Clearing filters is a full navigation: caches flushed, refetch forced.
    let request = controller::clear_filters(&Location::default());
    assert_eq!(request.mode, NavigationMode::Full);
    let refetch = adapter.reload(&codec::decode(&request.location.params));
    assert!(refetch.is_some(), "full navigation must refetch");
}

#[test]
fn late_response_for_a_superseded_state_never_wins() {
    let mut adapter = QueryAdapter::default();

    let s1 = codec::decode_query("breeds=Poodle");
    let s2 = codec::decode_query("breeds=Akita");

    let p1 = adapter.activate(&s1).expect("fetch for s1");
    let p2 = adapter.activate(&s2).expect("fetch for s2");

    // s2 wins first, then the stale s1 response arrives.
    assert!(adapter.complete(&p2.key, Ok(page(&["akita1"], Some("akita1")))));
    assert!(!adapter.complete(&p1.key, Ok(page(&["poodle1"], Some("poodle1")))));

    let data = adapter.data().expect("visible page");
    assert_eq!(data.dogs[0].id, "akita1");
    assert_eq!(
        matching::resolve(data).expect("match").id,
        "akita1",
        "the match must come from the winning page"
    );
}

#[test]
fn decode_helper_parses_raw_query_strings() {
    let state = codec::decode_query("breeds=Poodle__Husky_&size=abc&sortBy=Breed_Group");
    assert_eq!(state.breeds.len(), 2);
    assert_eq!(state.size, 20, "non-numeric size falls back to default");
    assert_eq!(state.sort_by, "Breed Group");
}
