// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::login;
use crate::ui::navbar;
use crate::ui::search;
use crate::ui::settings;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Search(search::Message),
    Settings(settings::Message),
    Navbar(navbar::Message),
    Login(login::Message),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional service endpoint override.
    pub api_url: Option<String>,
    /// Optional starting location, e.g. a shared
    /// `?breeds=Poodle_Husky&sortBy=Breed_Group` filter string.
    pub location: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
}
