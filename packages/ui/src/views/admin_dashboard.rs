//! Administration panel for requests, messages, banners and users.

use std::future::Future;
use std::pin::Pin;

use api::{ApiError, DataService};
use dioxus::prelude::*;
use store::{Banner, DesignRequest, Message, User, UserStatus};

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::icons::{FaClipboardList, FaImage, FaInbox, FaTrash, FaUsers};
use crate::{use_backend, Icon};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Requests,
    Messages,
    Banners,
    Users,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [
        AdminTab::Requests,
        AdminTab::Messages,
        AdminTab::Banners,
        AdminTab::Users,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AdminTab::Requests => "الطلبات",
            AdminTab::Messages => "الرسائل",
            AdminTab::Banners => "البانرات",
            AdminTab::Users => "المستخدمون",
        }
    }
}

/// A pending backend mutation handed up to the panel.
type Action = Pin<Box<dyn Future<Output = Result<(), ApiError>>>>;

/// Number of messages not yet marked read.
pub fn unread_count(messages: &[Message]) -> usize {
    messages.iter().filter(|m| !m.read).count()
}

#[component]
pub fn AdminDashboard(user: User) -> Element {
    let backend = use_backend();
    let mut tab = use_signal(AdminTab::default);
    let mut refresh = use_signal(|| 0u32);
    let mut error = use_signal(|| Option::<String>::None);

    let mut requests = use_signal(Vec::<DesignRequest>::new);
    let mut messages = use_signal(Vec::<Message>::new);
    let mut banners = use_signal(Vec::<Banner>::new);
    let mut users = use_signal(Vec::<User>::new);

    let _loader = use_resource({
        let backend = backend.clone();
        move || {
            let _ = refresh();
            let backend = backend.clone();
            async move {
                requests.set(backend.list_requests().await);
                messages.set(backend.list_messages().await);
                banners.set(backend.list_banners().await);
                users.set(backend.list_users().await);
            }
        }
    });

    // Run a mutation, then reload everything or surface the error.
    let run = move |fut: Action| {
        spawn(async move {
            match fut.await {
                Ok(()) => {
                    error.set(None);
                    refresh += 1;
                }
                Err(e) => {
                    tracing::warn!("Admin action failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let unread = unread_count(&messages.read());

    rsx! {
        section {
            class: "page admin",
            header {
                class: "dashboard-header",
                div {
                    h1 { class: "page-title", "لوحة الإدارة" }
                    p { class: "page-subtitle", "مرحباً، {user.name}" }
                }
            }

            div {
                class: "tabs",
                for t in AdminTab::ALL {
                    button {
                        key: "{t:?}",
                        class: if t == tab() { "tab active" } else { "tab" },
                        onclick: move |_| tab.set(t),
                        match t {
                            AdminTab::Requests => rsx! { Icon { icon: FaClipboardList, width: 14, height: 14 } },
                            AdminTab::Messages => rsx! { Icon { icon: FaInbox, width: 14, height: 14 } },
                            AdminTab::Banners => rsx! { Icon { icon: FaImage, width: 14, height: 14 } },
                            AdminTab::Users => rsx! { Icon { icon: FaUsers, width: 14, height: 14 } },
                        }
                        " {t.label()}"
                        if t == AdminTab::Messages && unread > 0 {
                            span { class: "badge", "{unread}" }
                        }
                    }
                }
            }

            if let Some(err) = error() {
                div { class: "notice error", "{err}" }
            }

            match tab() {
                AdminTab::Requests => rsx! {
                    RequestsTab { requests: requests(), on_action: run }
                },
                AdminTab::Messages => rsx! {
                    MessagesTab { messages: messages(), on_action: run }
                },
                AdminTab::Banners => rsx! {
                    BannersTab { banners: banners(), on_action: run }
                },
                AdminTab::Users => rsx! {
                    UsersTab { users: users(), on_action: run }
                },
            }
        }
    }
}

#[component]
fn RequestsTab(requests: Vec<DesignRequest>, on_action: EventHandler<Action>) -> Element {
    let backend = use_backend();

    rsx! {
        div {
            class: "card",
            if requests.is_empty() {
                p { class: "empty", "لا توجد طلبات." }
            }
            table {
                class: "table",
                thead {
                    tr {
                        th { "العميل" }
                        th { "النوع" }
                        th { "الميزانية" }
                        th { "الحالة" }
                        th { "" }
                    }
                }
                tbody {
                    for request in requests {
                        tr {
                            key: "{request.id}",
                            td {
                                strong { "{request.client_name}" }
                                br {}
                                small { "{request.email}" }
                                p { class: "description", "{request.description}" }
                            }
                            td { "{request.project_type.label()}" }
                            td { {request.budget.clone().unwrap_or_else(|| "-".to_string())} }
                            td {
                                span {
                                    class: "status",
                                    "data-status": "{request.status:?}",
                                    "{request.status.label()}"
                                }
                            }
                            td {
                                class: "actions",
                                for next in request.status.next_statuses().iter().copied() {
                                    Button {
                                        key: "{next:?}",
                                        variant: ButtonVariant::Outline,
                                        onclick: {
                                            let backend = backend.clone();
                                            let id = request.id.clone();
                                            move |_| {
                                                let backend = backend.clone();
                                                let id = id.clone();
                                                on_action.call(Box::pin(async move {
                                                    backend.update_request_status(&id, next).await.map(|_| ())
                                                }));
                                            }
                                        },
                                        "{next.label()}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MessagesTab(messages: Vec<Message>, on_action: EventHandler<Action>) -> Element {
    let backend = use_backend();

    rsx! {
        div {
            class: "card",
            if messages.is_empty() {
                p { class: "empty", "لا توجد رسائل." }
            }
            ul {
                class: "message-list",
                for message in messages {
                    li {
                        key: "{message.id}",
                        class: if message.read { "message" } else { "message unread" },
                        div {
                            class: "message-head",
                            strong { "{message.name}" }
                            span { " · {message.phone} · " }
                            small { {message.date.format("%Y-%m-%d %H:%M").to_string()} }
                        }
                        p { "{message.text}" }
                        if !message.read {
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: {
                                    let backend = backend.clone();
                                    let id = message.id.clone();
                                    move |_| {
                                        let backend = backend.clone();
                                        let id = id.clone();
                                        on_action.call(Box::pin(async move {
                                            backend.mark_message_read(&id).await.map(|_| ())
                                        }));
                                    }
                                },
                                "تحديد كمقروءة"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn BannersTab(banners: Vec<Banner>, on_action: EventHandler<Action>) -> Element {
    let backend = use_backend();
    let mut title = use_signal(String::new);
    let mut image_url = use_signal(String::new);

    let handle_add = {
        let backend = backend.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let backend = backend.clone();
            let (t, url) = (title(), image_url());
            title.set(String::new());
            image_url.set(String::new());
            on_action.call(Box::pin(async move {
                backend.add_banner(&t, &url).await.map(|_| ())
            }));
        }
    };

    rsx! {
        div {
            class: "card",
            form {
                class: "form inline",
                onsubmit: handle_add,
                Label { html_for: "banner-title", "العنوان" }
                Input {
                    id: "banner-title",
                    r#type: "text",
                    value: title(),
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }
                Label { html_for: "banner-image", "رابط الصورة" }
                Input {
                    id: "banner-image",
                    r#type: "url",
                    value: image_url(),
                    oninput: move |evt: FormEvent| image_url.set(evt.value()),
                }
                Button { variant: ButtonVariant::Primary, r#type: "submit", "إضافة بانر" }
            }

            div {
                class: "banner-admin-grid",
                for banner in banners {
                    figure {
                        key: "{banner.id}",
                        class: if banner.is_active { "banner" } else { "banner inactive" },
                        img { src: "{banner.image_url}", alt: "{banner.title}" }
                        figcaption { "{banner.title}" }
                        div {
                            class: "actions",
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: {
                                    let backend = backend.clone();
                                    let id = banner.id.clone();
                                    let active = !banner.is_active;
                                    move |_| {
                                        let backend = backend.clone();
                                        let id = id.clone();
                                        on_action.call(Box::pin(async move {
                                            backend.set_banner_active(&id, active).await.map(|_| ())
                                        }));
                                    }
                                },
                                if banner.is_active { "إخفاء" } else { "تفعيل" }
                            }
                            Button {
                                variant: ButtonVariant::Danger,
                                onclick: {
                                    let backend = backend.clone();
                                    let id = banner.id.clone();
                                    move |_| {
                                        let backend = backend.clone();
                                        let id = id.clone();
                                        on_action.call(Box::pin(async move {
                                            backend.delete_banner(&id).await
                                        }));
                                    }
                                },
                                Icon { icon: FaTrash, width: 12, height: 12 }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UsersTab(users: Vec<User>, on_action: EventHandler<Action>) -> Element {
    let backend = use_backend();

    rsx! {
        div {
            class: "card",
            table {
                class: "table",
                thead {
                    tr {
                        th { "الاسم" }
                        th { "البريد" }
                        th { "تاريخ الانضمام" }
                        th { "" }
                    }
                }
                tbody {
                    for member in users {
                        tr {
                            key: "{member.id}",
                            class: if member.is_banned() { "banned" } else { "" },
                            td { "{member.name}" }
                            td { "{member.email}" }
                            td { {member.joined_at.format("%Y-%m-%d").to_string()} }
                            td {
                                if member.is_admin() {
                                    span { class: "status", "مسؤول" }
                                } else {
                                    Button {
                                        variant: if member.is_banned() { ButtonVariant::Outline } else { ButtonVariant::Danger },
                                        onclick: {
                                            let backend = backend.clone();
                                            let id = member.id.clone();
                                            let status = if member.is_banned() {
                                                UserStatus::Active
                                            } else {
                                                UserStatus::Banned
                                            };
                                            move |_| {
                                                let backend = backend.clone();
                                                let id = id.clone();
                                                on_action.call(Box::pin(async move {
                                                    backend.set_user_status(&id, status).await.map(|_| ())
                                                }));
                                            }
                                        },
                                        if member.is_banned() { "إلغاء الحظر" } else { "حظر" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn message(read: bool) -> Message {
        Message {
            id: store::new_id(),
            name: "Omar".to_string(),
            phone: "0500000000".to_string(),
            text: "hello".to_string(),
            date: Utc::now(),
            read,
        }
    }

    #[test]
    fn test_unread_count() {
        assert_eq!(unread_count(&[]), 0);
        assert_eq!(unread_count(&[message(true), message(false), message(false)]), 2);
    }

    #[test]
    fn test_tabs_have_distinct_labels() {
        let labels: std::collections::HashSet<_> = AdminTab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels.len(), AdminTab::ALL.len());
    }
}
