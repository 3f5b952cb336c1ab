// SPDX-License-Identifier: MPL-2.0
//! Match resolution and the shared selection slot.
//!
//! [`resolve`] is a pure lookup of the match identifier inside a result
//! page. [`MatchSlot`] is the one place the resolved selection is written:
//! it is owned by the search screen, handed to the view read-only, and its
//! `publish` guard turns the repeated resolutions a render cycle produces
//! into at most one write per actual change.

use crate::api::models::{Dog, QueryResult};

/// Finds the entity the match identifier points at, if it is present in the
/// page. An absent or unknown identifier is not an error; there is simply no
/// selection.
pub fn resolve(result: &QueryResult) -> Option<&Dog> {
    let match_id = result.match_id.as_deref()?;
    result.dogs.iter().find(|dog| dog.id == match_id)
}

/// Shared selection written by the resolver and read by the view.
#[derive(Debug, Default)]
pub struct MatchSlot {
    selected: Option<Dog>,
}

impl MatchSlot {
    /// Publishes a resolution. Returns `true` only when the write actually
    /// changed the selection; republishing the same identifier is a no-op,
    /// which keeps resolution idempotent across repeated result deliveries.
    pub fn publish(&mut self, resolved: Option<&Dog>) -> bool {
        let next = resolved.map(|dog| dog.id.as_str());
        let current = self.selected.as_ref().map(|dog| dog.id.as_str());
        if next == current {
            return false;
        }
        self.selected = resolved.cloned();
        true
    }

    /// The currently selected match. Readers must tolerate `None`: a fresh
    /// page may not have resolved yet, or may carry no match at all.
    pub fn selected(&self) -> Option<&Dog> {
        self.selected.as_ref()
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dog(id: &str) -> Dog {
        Dog {
            id: id.to_string(),
            img: String::new(),
            name: id.to_uppercase(),
            age: 4,
            zip_code: "11111".to_string(),
            breed: "Akita".to_string(),
        }
    }

    fn result(ids: &[&str], match_id: Option<&str>) -> QueryResult {
        QueryResult {
            dogs: ids.iter().map(|id| dog(id)).collect(),
            match_id: match_id.map(str::to_string),
        }
    }

    #[test]
    fn resolve_finds_the_matched_dog() {
        let page = result(&["a", "b"], Some("b"));
        assert_eq!(resolve(&page).expect("match").id, "b");
    }

    #[test]
    fn resolve_returns_none_for_unknown_id() {
        let page = result(&["a", "b"], Some("z"));
        assert!(resolve(&page).is_none());
    }

    #[test]
    fn resolve_returns_none_without_match_id() {
        let page = result(&["a"], None);
        assert!(resolve(&page).is_none());
    }

    #[test]
    fn publish_writes_once_per_change() {
        let mut slot = MatchSlot::default();
        let rex = dog("rex");

        assert!(slot.publish(Some(&rex)), "first publish is a write");
        assert!(!slot.publish(Some(&rex)), "same id is a guarded no-op");
        assert_eq!(slot.selected().expect("selection").id, "rex");

        assert!(slot.publish(None), "clearing is a change");
        assert!(!slot.publish(None));
        assert!(slot.selected().is_none());
    }

    #[test]
    fn publish_replaces_a_different_match() {
        let mut slot = MatchSlot::default();
        slot.publish(Some(&dog("a")));
        assert!(slot.publish(Some(&dog("b"))));
        assert_eq!(slot.selected().expect("selection").id, "b");
    }
}
