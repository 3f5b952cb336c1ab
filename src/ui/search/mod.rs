// SPDX-License-Identifier: MPL-2.0
//! Search screen: breed filters, sorting, pagination, results, and the
//! resolved match.

pub mod breed_dropdown;
pub mod component;
pub mod controls;
pub mod photos;
pub mod results;

pub use component::{Effect, Message, State, ViewContext};
