//! Shared backend constructor and context accessors for all pages.
//!
//! The concrete [`Backend`] depends on the platform:
//! - **Web** (WASM + `web` feature): records in IndexedDB via [`store::IdbStore`]
//! - **Everything else**: records in memory via [`store::MemoryStore`]

use api::MockBackend;
use dioxus::prelude::*;
use store::{Database, SiteConfig};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppStore = store::IdbStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type AppStore = store::MemoryStore;

/// The auth-and-data service every page talks to.
pub type Backend = MockBackend<AppStore>;

/// Create the platform-appropriate backend for a site configuration.
pub fn make_backend(config: &SiteConfig) -> Backend {
    MockBackend::new(Database::new(AppStore::new()), config.auth.clone())
}

/// The backend provided by the app root.
pub fn use_backend() -> Backend {
    use_context::<Backend>()
}

/// The site configuration provided by the app root.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}
