//! # API crate: the site's auth-and-data service
//!
//! The UI never touches storage directly. Everything it needs from "the
//! backend" goes through the two capability traits defined here, so the
//! pages can be driven by the in-process [`MockBackend`] today and a hosted
//! service later.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Argon2 password hashing and the auth-change listener registry with its RAII [`Subscription`] guard |
//! | [`service`] | The [`AuthService`] and [`DataService`] traits plus the form payloads they accept |
//! | [`mock`] | [`MockBackend`], which implements both traits over a [`store::Database`] |
//!
//! ## Operations
//!
//! - **Identity**: `subscribe`, `login`, `register`, `logout`
//! - **Requests**: `create_request`, `list_requests`, `list_requests_for_user`, `update_request_status`
//! - **Messages**: `send_message`, `list_messages`, `mark_message_read`
//! - **Banners**: `list_banners`, `active_banners`, `add_banner`, `set_banner_active`, `delete_banner`
//! - **Users**: `list_users`, `update_profile`, `set_user_status`
//!
//! Failures are reported as [`ApiError`].

pub mod auth;
mod error;
pub mod mock;
pub mod service;

pub use auth::Subscription;
pub use error::ApiError;
pub use mock::{is_plausible_email, MockBackend};
pub use service::{AuthService, DataService, NewMessage, NewRequest, ProfileUpdate};
