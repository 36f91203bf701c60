use dioxus::prelude::*;

use store::SiteConfig;
use ui::{make_backend, AppShell, AuthProvider, MAIN_CSS};

/// Site configuration compiled into the bundle.
const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    dioxus::logger::init(tracing::Level::INFO).ok();
    dioxus::launch(App);
}

fn load_config() -> SiteConfig {
    match SiteConfig::from_toml(SITE_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid {}, using defaults: {}", SiteConfig::filename(), e);
            SiteConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_context_provider(load_config);
    use_context_provider(|| make_backend(&config));

    rsx! {
        // Global app resources
        document::Title { "{config.site.name}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            AppShell {}
        }
    }
}
