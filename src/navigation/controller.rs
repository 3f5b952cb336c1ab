// SPDX-License-Identifier: MPL-2.0
//! Mutation helpers translating user actions into navigation requests.
//!
//! Each helper computes the next location from the current one by editing
//! only the parameter it owns, so unrelated parameters ride along untouched
//! and re-applying an unchanged value yields a byte-identical location.

use crate::navigation::location::LOGIN_PATH;
use crate::navigation::{Location, NavigationMode, NavigationRequest};
use crate::query::codec::{self, PARAM_BREEDS, PARAM_SIZE, PARAM_SORT};
use crate::query::state::TOKEN_SEPARATOR;

/// Removes the breed filter entirely. Full navigation: dependent query
/// caches are flushed and the result page reloads from the service.
pub fn clear_filters(current: &Location) -> NavigationRequest {
    let mut location = current.clone();
    location.params.delete(PARAM_BREEDS);
    NavigationRequest {
        location,
        mode: NavigationMode::Full,
    }
}

/// Replaces the breed filter with the given selection. An empty selection
/// removes the parameter, the same shape [`clear_filters`] leaves behind.
pub fn set_filters(current: &Location, breeds: &[String]) -> NavigationRequest {
    let mut location = current.clone();
    let tokens: Vec<&str> = breeds
        .iter()
        .map(String::as_str)
        .filter(|token| !token.is_empty())
        .collect();
    if tokens.is_empty() {
        location.params.delete(PARAM_BREEDS);
    } else {
        location
            .params
            .set(PARAM_BREEDS, tokens.join(&TOKEN_SEPARATOR.to_string()));
    }
    NavigationRequest {
        location,
        mode: NavigationMode::Shallow,
    }
}

/// Updates the sort field, storing spaces as the reserved separator.
pub fn set_sort(current: &Location, value: &str) -> NavigationRequest {
    let mut location = current.clone();
    location.params.set(PARAM_SORT, codec::encode_sort(value));
    NavigationRequest {
        location,
        mode: NavigationMode::Shallow,
    }
}

/// Updates the page size.
pub fn set_page_size(current: &Location, size: u32) -> NavigationRequest {
    let mut location = current.clone();
    location.params.set(PARAM_SIZE, size.to_string());
    NavigationRequest {
        location,
        mode: NavigationMode::Shallow,
    }
}

/// Moves pagination to the given offset.
pub fn set_page_offset(current: &Location, from: u32) -> NavigationRequest {
    let mut location = current.clone();
    location.params.set(codec::PARAM_FROM, from.to_string());
    NavigationRequest {
        location,
        mode: NavigationMode::Shallow,
    }
}

/// Leaves the search area for the login screen.
pub fn logout() -> NavigationRequest {
    NavigationRequest {
        location: Location::parse(LOGIN_PATH),
        mode: NavigationMode::Full,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_filters_removes_parameter_and_forces_full_reload() {
        let current = Location::parse("?breeds=Poodle&size=10");
        let request = clear_filters(&current);
        assert!(!request.location.params.contains(PARAM_BREEDS));
        assert_eq!(request.location.params.get(PARAM_SIZE), Some("10"));
        assert_eq!(request.mode, NavigationMode::Full);
    }

    #[test]
    fn set_filters_joins_tokens_shallowly() {
        let current = Location::default();
        let request = set_filters(&current, &["Poodle".into(), "Husky".into()]);
        assert_eq!(
            request.location.params.get(PARAM_BREEDS),
            Some("Poodle_Husky")
        );
        assert_eq!(request.mode, NavigationMode::Shallow);
    }

    #[test]
    fn set_filters_with_empty_selection_removes_parameter() {
        let current = Location::parse("?breeds=Poodle");
        let request = set_filters(&current, &[]);
        assert!(!request.location.params.contains(PARAM_BREEDS));
    }

    #[test]
    fn set_sort_substitutes_spaces() {
        let current = Location::default();
        let request = set_sort(&current, "Breed Group");
        assert_eq!(request.location.params.get(PARAM_SORT), Some("Breed_Group"));
    }

    #[test]
    fn set_page_size_is_idempotent_on_the_location() {
        let current = Location::parse("?size=20&breeds=Akita");
        let request = set_page_size(&current, 20);
        assert_eq!(request.location, current);
        assert_eq!(request.location.to_string(), current.to_string());
    }

    #[test]
    fn mutations_preserve_unrelated_parameters() {
        let current = Location::parse("?session=xyz&breeds=Akita");
        let request = set_page_size(&current, 50);
        assert_eq!(request.location.params.get("session"), Some("xyz"));
        assert_eq!(request.location.params.get(PARAM_BREEDS), Some("Akita"));
    }

    #[test]
    fn logout_targets_login_with_full_semantics() {
        let request = logout();
        assert_eq!(request.location.path, LOGIN_PATH);
        assert_eq!(request.mode, NavigationMode::Full);
    }
}
