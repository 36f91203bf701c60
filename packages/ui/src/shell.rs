//! Root view-state controller.
//!
//! [`AppShell`] renders whatever [`AppState::screen`](crate::AppState::screen)
//! selects and turns every page callback into an [`AppEvent`].

use dioxus::prelude::*;

use crate::auth::{sign_out, use_app_state};
use crate::navigation::{AppEvent, PageView, Screen, View};
use crate::views::{
    AdminDashboard, AuthForm, Contact, Dashboard, Hero, LoadingScreen, RequestForm, Success,
};
use crate::{use_backend, Footer, Navbar};

#[component]
pub fn AppShell() -> Element {
    let mut app_state = use_app_state();
    let backend = use_backend();

    let mut dispatch = move |event: AppEvent| app_state.write().apply(event);

    let handle_logout = move |_: ()| {
        let backend = backend.clone();
        spawn(async move {
            match sign_out(&backend).await {
                Ok(event) => app_state.write().apply(event),
                Err(e) => tracing::error!("Logout failed: {}", e),
            }
        });
    };

    let state = app_state();
    let view = match state.screen() {
        Screen::Loading => {
            return rsx! {
                div { dir: "rtl", LoadingScreen {} }
            };
        }
        Screen::Page(view) => view,
    };

    rsx! {
        div {
            class: "app",
            dir: "rtl",
            Navbar {
                current_page: state.current_page,
                user: state.user.clone(),
                on_navigate: move |page: PageView| dispatch(AppEvent::Navigate(page)),
                on_logout: handle_logout,
            }

            main {
                class: "content",
                match view {
                    View::Hero => rsx! {
                        Hero { on_start: move |_| dispatch(AppEvent::HeroStart) }
                    },
                    View::Contact => rsx! { Contact {} },
                    View::Auth(mode) => rsx! {
                        AuthForm {
                            key: "{mode:?}",
                            mode,
                            on_success: move |user| dispatch(AppEvent::AuthSucceeded(user)),
                            on_switch_mode: move |page| dispatch(AppEvent::Navigate(page)),
                        }
                    },
                    View::RequestForm(user) => rsx! {
                        RequestForm {
                            user,
                            on_submit_success: move |_| dispatch(AppEvent::RequestSubmitted),
                            on_cancel: move |_| dispatch(AppEvent::RequestCancelled),
                        }
                    },
                    View::Success { signed_in } => rsx! {
                        Success {
                            signed_in,
                            on_navigate: move |page| dispatch(AppEvent::Navigate(page)),
                        }
                    },
                    View::Dashboard(user) => rsx! {
                        Dashboard {
                            user,
                            on_user_update: move |user| dispatch(AppEvent::UserUpdated(user)),
                        }
                    },
                    View::AdminDashboard(user) => rsx! {
                        AdminDashboard { user }
                    },
                }
            }

            Footer {}
        }
    }
}
