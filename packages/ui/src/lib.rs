//! This crate contains all shared UI for the site.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

pub mod navigation;
pub use navigation::{AppEvent, AppState, AuthMode, PageView, Screen, View};

mod backend;
pub use backend::{make_backend, use_backend, use_site_config, AppStore, Backend};

mod auth;
pub use auth::{bind_auth, sign_out, use_app_state, AuthProvider};

mod navbar;
pub use navbar::{nav_items, Navbar};

mod footer;
pub use footer::Footer;

pub mod views;

mod shell;
pub use shell::AppShell;
