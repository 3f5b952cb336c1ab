// SPDX-License-Identifier: MPL-2.0
//! In-app navigation: locations, history, and the mutation helpers that turn
//! user intent into navigation requests.
//!
//! Navigation is deliberately decoupled from fetching. A helper only builds a
//! [`NavigationRequest`]; the application update loop applies it to the
//! [`History`] and re-derives everything else from the new location. Callers
//! must not assume the location has changed by the time the helper returns.

pub mod controller;
pub mod history;
pub mod location;

pub use history::History;
pub use location::Location;

/// How a navigation request should be applied.
///
/// Both modes add a history entry. `Full` additionally tears down dependent
/// query state (caches flushed, everything refetched), the way a page reload
/// would. `Shallow` rewrites the location and lets cached results survive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    Full,
    Shallow,
}

/// A destination plus the semantics to apply when navigating there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub location: Location,
    pub mode: NavigationMode,
}
