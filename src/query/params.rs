// SPDX-License-Identifier: MPL-2.0
//! Ordered query parameter set.
//!
//! Keeps parameters in their original order so that editing one of them
//! leaves the rest of the query string byte-for-byte unchanged. Percent
//! handling is delegated to `form_urlencoded`; everything above the
//! pair level (separators, defaults) lives in [`crate::query::codec`].

use std::fmt;
use url::form_urlencoded;

/// An ordered list of `key=value` pairs parsed from a query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a query string (without the leading `?`) into ordered pairs.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    /// Returns the value of the first pair with the given key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Sets the value for `key`, replacing the first existing pair in place
    /// and dropping duplicates. Appends at the end when the key is absent.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(index) = self.pairs.iter().position(|(k, _)| k == key) {
            self.pairs[index].1 = value;
            let mut i = index + 1;
            while i < self.pairs.len() {
                if self.pairs[i].0 == key {
                    self.pairs.remove(i);
                } else {
                    i += 1;
                }
            }
        } else {
            self.pairs.push((key.to_string(), value));
        }
    }

    /// Removes every pair with the given key.
    pub fn delete(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serializes the pairs back into a query string (no leading `?`).
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_preserves_order() {
        let params = QueryParams::parse("size=10&breeds=Poodle&from=0");
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["size", "breeds", "from"]);
    }

    #[test]
    fn parse_tolerates_leading_question_mark() {
        let params = QueryParams::parse("?size=10");
        assert_eq!(params.get("size"), Some("10"));
    }

    #[test]
    fn set_replaces_in_place() {
        let mut params = QueryParams::parse("size=10&breeds=Poodle");
        params.set("size", "25");
        assert_eq!(params.to_query_string(), "size=25&breeds=Poodle");
    }

    #[test]
    fn set_appends_missing_key() {
        let mut params = QueryParams::parse("size=10");
        params.set("sortBy", "Breed");
        assert_eq!(params.to_query_string(), "size=10&sortBy=Breed");
    }

    #[test]
    fn set_collapses_duplicate_keys() {
        let mut params = QueryParams::parse("breeds=Poodle&size=10&breeds=Husky");
        params.set("breeds", "Akita");
        assert_eq!(params.to_query_string(), "breeds=Akita&size=10");
    }

    #[test]
    fn delete_removes_all_occurrences() {
        let mut params = QueryParams::parse("breeds=Poodle&size=10&breeds=Husky");
        params.delete("breeds");
        assert_eq!(params.to_query_string(), "size=10");
        assert!(!params.contains("breeds"));
    }

    #[test]
    fn round_trips_percent_encoded_values() {
        let mut params = QueryParams::new();
        params.set("breeds", "German Shepherd_Poodle");
        let encoded = params.to_query_string();
        let reparsed = QueryParams::parse(&encoded);
        assert_eq!(reparsed.get("breeds"), Some("German Shepherd_Poodle"));
    }

    #[test]
    fn unrelated_parameters_survive_edits() {
        let mut params = QueryParams::parse("utm=abc&size=10");
        params.set("size", "50");
        params.set("from", "20");
        assert_eq!(params.get("utm"), Some("abc"));
        assert_eq!(params.to_query_string(), "utm=abc&size=50&from=20");
    }
}
