//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] owns the root [`AppState`] signal and the single auth
//! subscription that feeds it. The subscription is taken when the provider
//! mounts and released when it unmounts.

use std::cell::RefCell;
use std::rc::Rc;

use api::{ApiError, AuthService, Subscription};
use dioxus::prelude::*;

use crate::backend::{use_backend, use_site_config};
use crate::navigation::{AppEvent, AppState};

/// Get the root view state.
/// Returns a signal that updates on every auth change and navigation.
pub fn use_app_state() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

/// Forward auth changes from `auth` into `sink` as [`AppEvent::AuthChanged`].
pub fn bind_auth<A: AuthService>(auth: &A, sink: impl Fn(AppEvent) + 'static) -> Subscription {
    auth.subscribe(move |user| sink(AppEvent::AuthChanged(user)))
}

/// Run the external logout. The returned event clears the local session;
/// on failure local state is left alone.
pub async fn sign_out<A: AuthService>(auth: &A) -> Result<AppEvent, ApiError> {
    auth.logout().await?;
    Ok(AppEvent::LoggedOut)
}

/// Provider component that manages authentication state.
/// Wrap the app shell with this component.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let app_state = use_context_provider(|| Signal::new(AppState::default()));
    let backend = use_backend();
    let config = use_site_config();

    let subscription = use_hook({
        let backend = backend.clone();
        move || {
            let sub = bind_auth(&backend, move |event| {
                let mut app_state = app_state;
                app_state.write().apply(event);
            });
            Rc::new(RefCell::new(Some(sub)))
        }
    });

    use_drop(move || {
        if let Some(sub) = subscription.borrow_mut().take() {
            sub.unsubscribe();
        }
    });

    // Seed, then resolve the persisted session; the first announcement ends loading.
    use_future(move || {
        let backend = backend.clone();
        let config = config.clone();
        async move {
            if let Err(e) = backend.seed(&config).await {
                tracing::error!("Failed to seed backend: {}", e);
            }
            backend.restore_session().await;
        }
    });

    rsx! {
        {children}
    }
}
