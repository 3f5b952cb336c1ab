// SPDX-License-Identifier: MPL-2.0
//! Canonical search intent.

use std::collections::BTreeSet;

/// Page size applied when the location does not carry one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Sort field applied when the location does not carry one.
pub const DEFAULT_SORT_FIELD: &str = "Breed";

/// Separator joining breed tokens inside the `breeds` parameter, and the
/// substitution character standing in for spaces inside `sortBy`.
pub const TOKEN_SEPARATOR: char = '_';

/// The filter/sort/pagination intent of the search screen.
///
/// Owned by the current location: every field is reconstructible from the
/// query string alone, and no component keeps a divergent copy between
/// update-loop turns. Breeds are a set (selection order is meaningless) kept
/// in a `BTreeSet` so the serialized form is stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub breeds: BTreeSet<String>,
    pub from: u32,
    pub size: u32,
    pub sort_by: String,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            breeds: BTreeSet::new(),
            from: 0,
            size: DEFAULT_PAGE_SIZE,
            sort_by: DEFAULT_SORT_FIELD.to_string(),
        }
    }
}

impl SearchState {
    /// Breed tokens joined with [`TOKEN_SEPARATOR`], ready for the wire.
    pub fn joined_breeds(&self) -> String {
        let tokens: Vec<&str> = self.breeds.iter().map(String::as_str).collect();
        tokens.join(&TOKEN_SEPARATOR.to_string())
    }

    /// Offset of the next page, saturating instead of wrapping.
    pub fn next_from(&self) -> u32 {
        self.from.saturating_add(self.size)
    }

    /// Offset of the previous page, clamped at zero.
    pub fn previous_from(&self) -> u32 {
        self.from.saturating_sub(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_matches_documented_defaults() {
        let state = SearchState::default();
        assert!(state.breeds.is_empty());
        assert_eq!(state.from, 0);
        assert_eq!(state.size, DEFAULT_PAGE_SIZE);
        assert_eq!(state.sort_by, DEFAULT_SORT_FIELD);
    }

    #[test]
    fn joined_breeds_is_order_stable() {
        let mut state = SearchState::default();
        state.breeds.insert("Husky".to_string());
        state.breeds.insert("Akita".to_string());
        state.breeds.insert("Poodle".to_string());
        assert_eq!(state.joined_breeds(), "Akita_Husky_Poodle");
    }

    #[test]
    fn page_offsets_saturate() {
        let state = SearchState {
            from: 10,
            size: 20,
            ..SearchState::default()
        };
        assert_eq!(state.next_from(), 30);
        assert_eq!(state.previous_from(), 0);
    }
}
