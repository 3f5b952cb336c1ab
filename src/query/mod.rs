// SPDX-License-Identifier: MPL-2.0
//! Location-backed search intent.
//!
//! The query string of the current location is the single source of truth for
//! what the user is searching for. This module owns the typed representation
//! of that intent ([`SearchState`]), the ordered parameter set it is stored in
//! ([`QueryParams`]), and the codec translating between the two. Nothing in
//! here talks to the network or the UI.

pub mod codec;
pub mod params;
pub mod state;

pub use params::QueryParams;
pub use state::SearchState;
