// SPDX-License-Identifier: MPL-2.0
//! Addressable locations inside the application.

use crate::query::QueryParams;
use std::fmt;

/// Path of the search screen, the application's home.
pub const SEARCH_PATH: &str = "/dogs/search";

/// Path of the login screen. Only its navigation boundary is modeled here.
pub const LOGIN_PATH: &str = "/login";

/// A path plus its ordered query parameters.
///
/// The location is the single source of truth for view state: two equal
/// locations always render the same view, and a location round-trips through
/// its string form unchanged. That is what makes history entries, relaunch
/// arguments, and shared strings reproduce a view deterministically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub params: QueryParams,
}

impl Location {
    /// Builds a location on the search path with the given parameters.
    pub fn search(params: QueryParams) -> Self {
        Self {
            path: SEARCH_PATH.to_string(),
            params,
        }
    }

    /// Parses a `path?query` string. A bare query string (leading `?` or no
    /// `/` prefix) is taken to address the search screen, so shared filter
    /// strings like `?breeds=Poodle` work as launch arguments.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let (path, query) = match raw.split_once('?') {
            Some((path, query)) => (path, query),
            None if raw.starts_with('/') => (raw, ""),
            None => ("", raw),
        };
        let path = if path.is_empty() { SEARCH_PATH } else { path };
        Self {
            path: path.to_string(),
            params: QueryParams::parse(query),
        }
    }

    pub fn is_search(&self) -> bool {
        self.path == SEARCH_PATH
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::search(QueryParams::new())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.is_empty() {
            write!(f, "{}", self.path)
        } else {
            write!(f, "{}?{}", self.path, self.params.to_query_string())
        }
    }
}
