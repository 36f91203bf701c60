//! Signed-in user's dashboard: profile and own requests.

use api::{DataService, ProfileUpdate};
use dioxus::prelude::*;
use store::{DesignRequest, User};

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::icons::FaClipboardList;
use crate::{use_backend, Icon};

#[component]
pub fn Dashboard(user: User, on_user_update: EventHandler<User>) -> Element {
    let backend = use_backend();
    let mut requests = use_signal(Vec::<DesignRequest>::new);
    let mut name = use_signal({
        let name = user.name.clone();
        move || name
    });
    let mut avatar = use_signal({
        let avatar = user.avatar.clone();
        move || avatar.unwrap_or_default()
    });
    let mut notice = use_signal(|| Option::<Result<(), String>>::None);

    let _loader = use_resource({
        let backend = backend.clone();
        let user_id = user.id.clone();
        move || {
            let backend = backend.clone();
            let user_id = user_id.clone();
            async move {
                requests.set(backend.list_requests_for_user(&user_id).await);
            }
        }
    });

    let handle_save = {
        let user_id = user.id.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let backend = backend.clone();
            let user_id = user_id.clone();
            spawn(async move {
                let update = ProfileUpdate {
                    name: name(),
                    avatar: Some(avatar()),
                };
                match backend.update_profile(&user_id, update).await {
                    Ok(updated) => {
                        notice.set(Some(Ok(())));
                        on_user_update.call(updated);
                    }
                    Err(e) => notice.set(Some(Err(e.to_string()))),
                }
            });
        }
    };

    let joined = user.joined_at.format("%Y-%m-%d").to_string();

    rsx! {
        section {
            class: "page dashboard",
            header {
                class: "dashboard-header",
                if let Some(url) = &user.avatar {
                    img { class: "avatar large", src: "{url}", alt: "{user.name}" }
                } else {
                    span { class: "avatar large", "{user.initial()}" }
                }
                div {
                    h1 { class: "page-title", "مرحباً، {user.name}" }
                    p { class: "page-subtitle", "{user.email} · عضو منذ {joined}" }
                }
            }

            div {
                class: "dashboard-grid",
                div {
                    class: "card",
                    h2 {
                        Icon { icon: FaClipboardList, width: 18, height: 18 }
                        " طلباتي"
                    }
                    if requests().is_empty() {
                        p { class: "empty", "لا توجد طلبات بعد." }
                    } else {
                        ul {
                            class: "request-list",
                            for request in requests() {
                                li {
                                    key: "{request.id}",
                                    class: "request-item",
                                    div {
                                        strong { "{request.project_type.label()}" }
                                        p { "{request.description}" }
                                    }
                                    span {
                                        class: "status",
                                        "data-status": "{request.status:?}",
                                        "{request.status.label()}"
                                    }
                                }
                            }
                        }
                    }
                }

                form {
                    class: "card form",
                    onsubmit: handle_save,
                    h2 { "الملف الشخصي" }

                    match notice() {
                        Some(Ok(())) => rsx! { div { class: "notice success", "تم حفظ التغييرات" } },
                        Some(Err(err)) => rsx! { div { class: "notice error", "{err}" } },
                        None => rsx! {},
                    }

                    Label { html_for: "profile-name", "الاسم" }
                    Input {
                        id: "profile-name",
                        r#type: "text",
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }

                    Label { html_for: "profile-avatar", "رابط الصورة الشخصية" }
                    Input {
                        id: "profile-avatar",
                        r#type: "url",
                        value: avatar(),
                        oninput: move |evt: FormEvent| avatar.set(evt.value()),
                    }

                    Button { variant: ButtonVariant::Primary, r#type: "submit", "حفظ" }
                }
            }
        }
    }
}
