// SPDX-License-Identifier: MPL-2.0
//! Query lifecycle state machine.
//!
//! Exactly one logical query runs per distinct search state, identified by
//! the canonical serialization of that state. The adapter never looks at the
//! clock or the network; the update loop feeds it state activations and
//! completions, and it answers with the request (if any) that must be
//! spawned. A completion whose key no longer matches the active key is
//! recorded in the cache but never applied to the visible data, which is
//! what makes rapid navigation safe: the last completed query matching the
//! current state wins.

use crate::api::cache::QueryCache;
use crate::api::models::{QueryResult, SearchRequest};
use crate::error::ApiError;
use crate::query::codec;
use crate::query::SearchState;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Page-level lifecycle: `Idle` only before the first activation, `Loading`
/// whenever the active state has no data yet, `Failed` reachable from
/// `Loading` and left again through [`QueryAdapter::retry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryStatus {
    Idle,
    Loading,
    Loaded,
    Failed(ApiError),
}

/// A fetch the caller must spawn, tagged with the key to echo back into
/// [`QueryAdapter::complete`] when the response arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuery {
    pub key: String,
    pub request: SearchRequest,
}

#[derive(Debug)]
pub struct QueryAdapter {
    cache: QueryCache,
    /// Serialized form and value of the state the view is showing.
    active: Option<(String, SearchState)>,
    /// Keys with a fetch currently in flight. Guards against spawning a
    /// second identical fetch when the user flips back to a pending state.
    in_flight: BTreeSet<String>,
    status: QueryStatus,
    data: Option<Arc<QueryResult>>,
}

impl QueryAdapter {
    pub fn new(cache: QueryCache) -> Self {
        Self {
            cache,
            active: None,
            in_flight: BTreeSet::new(),
            status: QueryStatus::Idle,
            data: None,
        }
    }

    /// Makes `state` the active search state.
    ///
    /// Returns the fetch to spawn, or `None` when the state is already
    /// active, served from cache, or already in flight. Activating a new
    /// state drops the previous page from view immediately: `data` stays
    /// empty until the first successful response for the new key.
    pub fn activate(&mut self, state: &SearchState) -> Option<PendingQuery> {
        let key = codec::cache_key(state);
        if self.active.as_ref().is_some_and(|(active, _)| *active == key) {
            return None;
        }
        self.active = Some((key.clone(), state.clone()));

        if let Some(cached) = self.cache.get(&key) {
            self.data = Some(cached);
            self.status = QueryStatus::Loaded;
            return None;
        }

        self.data = None;
        self.status = QueryStatus::Loading;
        if self.in_flight.contains(&key) {
            return None;
        }
        self.in_flight.insert(key.clone());
        Some(PendingQuery {
            key,
            request: SearchRequest::from(state),
        })
    }

    /// Flushes the cache and re-activates `state` unconditionally. This is
    /// the full-navigation teardown: everything dependent refetches.
    pub fn reload(&mut self, state: &SearchState) -> Option<PendingQuery> {
        self.cache.clear();
        self.active = None;
        self.activate(state)
    }

    /// Re-issues the active query after a failure.
    pub fn retry(&mut self) -> Option<PendingQuery> {
        if !matches!(self.status, QueryStatus::Failed(_)) {
            return None;
        }
        let (key, state) = self.active.clone()?;
        self.status = QueryStatus::Loading;
        if self.in_flight.contains(&key) {
            return None;
        }
        self.in_flight.insert(key.clone());
        Some(PendingQuery {
            key,
            request: SearchRequest::from(&state),
        })
    }

    /// Applies a finished fetch. Returns `true` when the completion was for
    /// the active key and changed the visible data; a stale success is still
    /// cached under its own key, a stale failure is dropped outright.
    pub fn complete(
        &mut self,
        key: &str,
        outcome: Result<QueryResult, ApiError>,
    ) -> bool {
        self.in_flight.remove(key);
        let is_active = self
            .active
            .as_ref()
            .is_some_and(|(active, _)| active.as_str() == key);

        match outcome {
            Ok(result) => {
                let shared = self.cache.insert(key.to_string(), result);
                if !is_active {
                    return false;
                }
                self.data = Some(shared);
                self.status = QueryStatus::Loaded;
                true
            }
            Err(error) => {
                if !is_active {
                    return false;
                }
                self.status = QueryStatus::Failed(error);
                true
            }
        }
    }

    /// The result page for the active state, if one has arrived.
    pub fn data(&self) -> Option<&Arc<QueryResult>> {
        self.data.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.status == QueryStatus::Loading
    }

    pub fn status(&self) -> &QueryStatus {
        &self.status
    }

    pub fn active_key(&self) -> Option<&str> {
        self.active.as_ref().map(|(key, _)| key.as_str())
    }
}

impl Default for QueryAdapter {
    fn default() -> Self {
        Self::new(QueryCache::default())
    }
}
