//! Project request form.

use api::{is_plausible_email, DataService, NewRequest};
use dioxus::prelude::*;
use store::{ProjectType, User};

use crate::components::{Button, ButtonVariant, Input, Label, TextArea};
use crate::use_backend;

/// Steps of the request form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Contact,
    Project,
}

/// Why the contact step cannot be left yet, if it cannot.
fn contact_step_error(client_name: &str, email: &str) -> Option<&'static str> {
    if client_name.trim().is_empty() || email.trim().is_empty() {
        Some("يرجى إدخال الاسم والبريد الإلكتروني")
    } else if !is_plausible_email(email.trim()) {
        Some("يرجى إدخال بريد إلكتروني صحيح")
    } else {
        None
    }
}

/// Two-step request form. Anonymous visitors may submit too; a signed-in
/// user's name and email are prefilled and the request is linked to them.
#[component]
pub fn RequestForm(
    user: Option<User>,
    on_submit_success: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let backend = use_backend();
    let user_id = user.as_ref().map(|u| u.id.clone());
    let mut step = use_signal(|| Step::Contact);
    let mut client_name = use_signal({
        let user = user.clone();
        move || user.map(|u| u.name).unwrap_or_default()
    });
    let mut email = use_signal({
        let user = user.clone();
        move || user.map(|u| u.email).unwrap_or_default()
    });
    let mut project_type = use_signal(|| ProjectType::Logo);
    let mut description = use_signal(String::new);
    let mut budget = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_next = move |_: MouseEvent| match contact_step_error(&client_name(), &email()) {
        Some(message) => error.set(Some(message.to_string())),
        None => {
            error.set(None);
            step.set(Step::Project);
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        let user_id = user_id.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            let request = NewRequest {
                user_id,
                client_name: client_name(),
                email: email(),
                project_type: project_type(),
                description: description(),
                budget: Some(budget()),
            };
            match backend.create_request(request).await {
                Ok(_) => on_submit_success.call(()),
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        section {
            class: "page request",
            form {
                class: "card form",
                onsubmit: handle_submit,

                h1 { class: "page-title", "اطلب تصميمك" }
                p {
                    class: "page-subtitle",
                    if step() == Step::Contact { "الخطوة 1 من 2: بيانات التواصل" } else { "الخطوة 2 من 2: تفاصيل المشروع" }
                }

                if let Some(err) = error() {
                    div { class: "notice error", "{err}" }
                }

                if step() == Step::Contact {
                    Label { html_for: "request-name", "الاسم" }
                    Input {
                        id: "request-name",
                        r#type: "text",
                        value: client_name(),
                        oninput: move |evt: FormEvent| client_name.set(evt.value()),
                    }

                    Label { html_for: "request-email", "البريد الإلكتروني" }
                    Input {
                        id: "request-email",
                        r#type: "email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    div {
                        class: "form-actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "button",
                            onclick: handle_next,
                            "التالي"
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            r#type: "button",
                            onclick: move |_| on_cancel.call(()),
                            "إلغاء"
                        }
                    }
                } else {
                    Label { html_for: "request-type", "نوع المشروع" }
                    select {
                        id: "request-type",
                        class: "input",
                        value: project_type().key(),
                        onchange: move |evt| {
                            if let Some(t) = ProjectType::from_key(&evt.value()) {
                                project_type.set(t);
                            }
                        },
                        for t in ProjectType::ALL {
                            option { key: "{t.key()}", value: t.key(), "{t.label()}" }
                        }
                    }

                    Label { html_for: "request-description", "وصف المشروع" }
                    TextArea {
                        id: "request-description",
                        rows: "6",
                        placeholder: "أخبرنا عن فكرتك، الألوان المفضلة، والجمهور المستهدف...",
                        value: description(),
                        oninput: move |evt: FormEvent| description.set(evt.value()),
                    }

                    Label { html_for: "request-budget", "الميزانية التقريبية (اختياري)" }
                    Input {
                        id: "request-budget",
                        r#type: "text",
                        value: budget(),
                        oninput: move |evt: FormEvent| budget.set(evt.value()),
                    }

                    div {
                        class: "form-actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            disabled: loading(),
                            if loading() { "جارٍ الإرسال..." } else { "إرسال الطلب" }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            r#type: "button",
                            onclick: move |_| step.set(Step::Contact),
                            "السابق"
                        }
                    }
                }
            }
        }
    }
}
