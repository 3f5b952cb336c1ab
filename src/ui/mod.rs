// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`search`] - Dog search with breed filters, sorting, pagination, and the
//!   resolved match
//! - [`settings`] - Application preferences and configuration
//! - [`login`] - Logout destination stub (authentication is external)
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (error display)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Navigation bar with history controls and screen entry points

pub mod components;
pub mod design_tokens;
pub mod login;
pub mod navbar;
pub mod search;
pub mod settings;
pub mod styles;
pub mod theming;
