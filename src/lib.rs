// SPDX-License-Identifier: MPL-2.0
//! `iced_fetch` is a dog adoption search and matching client built with the
//! Iced GUI framework.
//!
//! The current filter/sort/pagination intent lives entirely in the app's
//! location query string, so history navigation, relaunch arguments, and
//! shared filter strings reproduce the same view deterministically. The
//! crate also demonstrates internationalization with Fluent, user preference
//! management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_fetch/0.2.0")]

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod matching;
pub mod navigation;
pub mod query;
pub mod ui;
