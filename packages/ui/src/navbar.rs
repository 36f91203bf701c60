use dioxus::prelude::*;
use store::User;

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaPenNib, FaRightFromBracket};
use crate::navigation::{landing_page, PageView};
use crate::Icon;

/// Pages linked from the navbar for the given user.
pub fn nav_items(user: Option<&User>) -> Vec<PageView> {
    let mut items = vec![PageView::Home, PageView::RequestForm, PageView::Contact];
    match user {
        Some(user) => items.push(landing_page(user)),
        None => items.extend([PageView::Login, PageView::Register]),
    }
    items
}

#[component]
pub fn Navbar(
    current_page: PageView,
    user: Option<User>,
    on_navigate: EventHandler<PageView>,
    on_logout: EventHandler<()>,
) -> Element {
    let site = crate::use_site_config().site;
    let items = nav_items(user.as_ref());

    rsx! {
        nav {
            class: "navbar",
            button {
                class: "navbar-brand",
                onclick: move |_| on_navigate.call(PageView::Home),
                Icon { icon: FaPenNib, width: 20, height: 20 }
                span { "{site.name}" }
            }

            div {
                class: "navbar-links",
                for page in items {
                    button {
                        key: "{page:?}",
                        class: if page == current_page { "navbar-link active" } else { "navbar-link" },
                        onclick: move |_| on_navigate.call(page),
                        "{page.label()}"
                    }
                }
            }

            if let Some(user) = user {
                div {
                    class: "navbar-user",
                    span { class: "avatar", "{user.initial()}" }
                    span { class: "navbar-user-name", "{user.name}" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_logout.call(()),
                        Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                        "تسجيل الخروج"
                    }
                }
            }
        }
    }
}
