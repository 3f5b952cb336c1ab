// SPDX-License-Identifier: MPL-2.0
//! Finished-query cache.
//!
//! Result pages are keyed by the canonical serialization of the search state
//! that produced them, so shallow navigation back to an already-seen state
//! renders without touching the network. Full navigation flushes everything.

use crate::api::models::QueryResult;
use lru::LruCache;
use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Default number of result pages to keep. A page is small (at most one
/// `size` worth of dogs), so the bound is about staleness, not memory.
pub const DEFAULT_MAX_CACHED_QUERIES: usize = 32;

/// LRU cache of immutable result pages keyed by serialized search state.
pub struct QueryCache {
    entries: LruCache<String, Arc<QueryResult>>,
}

impl fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryCache")
            .field("len", &self.entries.len())
            .field("cap", &self.entries.cap())
            .finish()
    }
}

impl QueryCache {
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(
            NonZeroUsize::new(DEFAULT_MAX_CACHED_QUERIES)
                .expect("DEFAULT_MAX_CACHED_QUERIES must be non-zero"),
        );
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Looks up a page, marking it most recently used.
    pub fn get(&mut self, key: &str) -> Option<Arc<QueryResult>> {
        self.entries.get(key).cloned()
    }

    /// Stores a finished page and returns the shared handle to it.
    pub fn insert(&mut self, key: String, result: QueryResult) -> Arc<QueryResult> {
        let shared = Arc::new(result);
        self.entries.put(key, Arc::clone(&shared));
        shared
    }

    /// Drops every cached page. Used by full navigation.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CACHED_QUERIES)
    }
}
