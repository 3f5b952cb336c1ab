// SPDX-License-Identifier: MPL-2.0
//! Wire models for the dog search service.
//!
//! The service nests the match identifier one level deep
//! (`"match": { "match": "id" }`). That quirk stays at this boundary: the
//! rest of the crate only ever sees the flattened [`QueryResult::match_id`].

use crate::query::SearchState;
use serde::{Deserialize, Serialize};

/// A dog as the service describes it. Everything except `id` is display
/// data owned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Dog {
    pub id: String,
    pub img: String,
    pub name: String,
    pub age: u32,
    pub zip_code: String,
    pub breed: String,
}

impl Dog {
    /// Coarse kennel-style grouping: the trailing word of the breed name
    /// ("Siberian Husky" -> "Husky"). Used by the `Breed Group` sort field.
    pub fn breed_group(&self) -> &str {
        self.breed.rsplit(' ').next().unwrap_or(&self.breed)
    }
}

/// Body of a search invocation. The sort field is client-side and therefore
/// not part of the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub breeds: Vec<String>,
    pub from: u32,
    pub size: u32,
}

impl From<&SearchState> for SearchRequest {
    fn from(state: &SearchState) -> Self {
        Self {
            breeds: state.breeds.iter().cloned().collect(),
            from: state.from,
            size: state.size,
        }
    }
}

/// One page of results plus the optional match identifier, produced once per
/// distinct search state and immutable after that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    pub dogs: Vec<Dog>,
    pub match_id: Option<String>,
}

/// The response exactly as it appears on the wire.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponseWire {
    #[serde(rename = "dogObj", default)]
    dogs: Vec<Dog>,
    #[serde(rename = "match", default)]
    matched: Option<MatchWire>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MatchWire {
    #[serde(rename = "match", default)]
    id: Option<String>,
}

impl From<SearchResponseWire> for QueryResult {
    fn from(wire: SearchResponseWire) -> Self {
        Self {
            dogs: wire.dogs,
            match_id: wire.matched.and_then(|m| m.id),
        }
    }
}
