//! Login and registration form.

use api::AuthService;
use dioxus::prelude::*;
use store::User;

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::navigation::{AuthMode, PageView};
use crate::use_backend;

/// Email/password form in login or registration mode.
///
/// Service errors are shown inline; on success the resulting user is passed
/// to `on_success`.
#[component]
pub fn AuthForm(
    mode: AuthMode,
    on_success: EventHandler<User>,
    on_switch_mode: EventHandler<PageView>,
) -> Element {
    let backend = use_backend();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            let result = match mode {
                AuthMode::Login => backend.login(&email(), &password()).await,
                AuthMode::Register => backend.register(&name(), &email(), &password()).await,
            };
            loading.set(false);
            match result {
                Ok(user) => on_success.call(user),
                Err(e) => {
                    tracing::info!("Auth form rejected: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let (title, subtitle, submit_label, switch_prompt, switch_label) = match mode {
        AuthMode::Login => (
            "تسجيل الدخول",
            "مرحباً بعودتك! سجّل دخولك لمتابعة طلباتك.",
            "دخول",
            "ليس لديك حساب؟ ",
            "أنشئ حساباً",
        ),
        AuthMode::Register => (
            "إنشاء حساب",
            "أنشئ حسابك لتقديم الطلبات ومتابعتها.",
            "إنشاء الحساب",
            "لديك حساب بالفعل؟ ",
            "سجّل دخولك",
        ),
    };

    rsx! {
        section {
            class: "page auth",
            form {
                class: "card form auth-card",
                onsubmit: handle_submit,

                h1 { class: "page-title", "{title}" }
                p { class: "page-subtitle", "{subtitle}" }

                if let Some(err) = error() {
                    div { class: "notice error", "{err}" }
                }

                if mode == AuthMode::Register {
                    Label { html_for: "auth-name", "الاسم الكامل" }
                    Input {
                        id: "auth-name",
                        r#type: "text",
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                }

                Label { html_for: "auth-email", "البريد الإلكتروني" }
                Input {
                    id: "auth-email",
                    r#type: "email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                Label { html_for: "auth-password", "كلمة المرور" }
                Input {
                    id: "auth-password",
                    r#type: "password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "جارٍ التحقق..." } else { "{submit_label}" }
                }

                p {
                    class: "auth-switch",
                    "{switch_prompt}"
                    button {
                        r#type: "button",
                        class: "link",
                        onclick: move |_| on_switch_mode.call(mode.other_page()),
                        "{switch_label}"
                    }
                }
            }
        }
    }
}
