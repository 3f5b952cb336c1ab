// SPDX-License-Identifier: MPL-2.0
//! Bidirectional mapping between query strings and [`SearchState`].
//!
//! Decoding is total: malformed numbers and empty tokens fall back to the
//! documented defaults instead of erroring, so any shared or hand-edited
//! location still produces a usable view. Encoding merges the state into an
//! existing parameter set, leaving unrelated parameters untouched.
//!
//! Round-trip law: `decode_query(&encode_query(&s, &QueryParams::new())) == s`
//! for every state whose breed tokens and sort field avoid the reserved
//! separator.

use crate::query::params::QueryParams;
use crate::query::state::{SearchState, DEFAULT_PAGE_SIZE, DEFAULT_SORT_FIELD, TOKEN_SEPARATOR};

pub const PARAM_BREEDS: &str = "breeds";
pub const PARAM_SIZE: &str = "size";
pub const PARAM_FROM: &str = "from";
pub const PARAM_SORT: &str = "sortBy";

/// Decodes a raw query string into a [`SearchState`].
pub fn decode_query(query: &str) -> SearchState {
    decode(&QueryParams::parse(query))
}

/// Decodes an already-parsed parameter set into a [`SearchState`].
pub fn decode(params: &QueryParams) -> SearchState {
    let breeds = params
        .get(PARAM_BREEDS)
        .unwrap_or("")
        .split(TOKEN_SEPARATOR)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect();

    SearchState {
        breeds,
        from: parse_or(params.get(PARAM_FROM), 0),
        size: parse_or(params.get(PARAM_SIZE), DEFAULT_PAGE_SIZE),
        sort_by: params
            .get(PARAM_SORT)
            .map(decode_sort)
            .unwrap_or_else(|| DEFAULT_SORT_FIELD.to_string()),
    }
}

/// Merges a [`SearchState`] into `base`, preserving unrelated parameters.
///
/// An empty breed set removes the parameter rather than writing an empty
/// value, mirroring what [`decode`] would reconstruct either way.
pub fn encode(state: &SearchState, base: &QueryParams) -> QueryParams {
    let mut params = base.clone();
    if state.breeds.is_empty() {
        params.delete(PARAM_BREEDS);
    } else {
        params.set(PARAM_BREEDS, state.joined_breeds());
    }
    params.set(PARAM_FROM, state.from.to_string());
    params.set(PARAM_SIZE, state.size.to_string());
    params.set(PARAM_SORT, encode_sort(&state.sort_by));
    params
}

/// Serialized form of [`encode`], used for cache keys and shareable strings.
pub fn encode_query(state: &SearchState, base: &QueryParams) -> String {
    encode(state, base).to_query_string()
}

/// Canonical serialization of a state, used to key queries and caches.
///
/// Two states compare equal exactly when their cache keys compare equal.
pub fn cache_key(state: &SearchState) -> String {
    encode_query(state, &QueryParams::new())
}

/// Rewrites spaces to the reserved separator so the sort field stays a
/// single token on the wire (`"Breed Group"` -> `"Breed_Group"`).
pub fn encode_sort(value: &str) -> String {
    value.replace(' ', &TOKEN_SEPARATOR.to_string())
}

/// Inverts [`encode_sort`].
pub fn decode_sort(value: &str) -> String {
    value.replace(TOKEN_SEPARATOR, " ")
}

fn parse_or(value: Option<&str>, default: u32) -> u32 {
    value.and_then(|v| v.parse::<u32>().ok()).unwrap_or(default)
}
