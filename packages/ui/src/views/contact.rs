use api::{ApiError, DataService, NewMessage};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label, TextArea};
use crate::icons::{FaEnvelope, FaLocationDot, FaPaperPlane, FaPhone};
use crate::{use_backend, use_site_config, Icon};

/// Result of the last send, shown above the form.
#[derive(Clone, Debug, PartialEq)]
enum SendOutcome {
    Sent,
    Failed(String),
}

impl SendOutcome {
    fn of<T>(result: &Result<T, ApiError>) -> Self {
        match result {
            Ok(_) => SendOutcome::Sent,
            Err(e) => SendOutcome::Failed(e.to_string()),
        }
    }
}

/// Contact details and the contact form.
#[component]
pub fn Contact() -> Element {
    let backend = use_backend();
    let contact = use_site_config().contact;
    let mut name = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut text = use_signal(String::new);
    let mut outcome = use_signal(|| Option::<SendOutcome>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        spawn(async move {
            outcome.set(None);
            loading.set(true);
            let message = NewMessage {
                name: name(),
                phone: phone(),
                text: text(),
            };
            let result = backend.send_message(message).await;
            if result.is_ok() {
                name.set(String::new());
                phone.set(String::new());
                text.set(String::new());
            }
            outcome.set(Some(SendOutcome::of(&result)));
            loading.set(false);
        });
    };

    rsx! {
        section {
            class: "page contact",
            h1 { class: "page-title", "تواصل معنا" }
            p { class: "page-subtitle", "يسعدنا سماعك. اترك رسالتك وسنعاود الاتصال بك قريباً." }

            div {
                class: "contact-grid",
                div {
                    class: "card contact-info",
                    if !contact.phone.is_empty() {
                        p {
                            Icon { icon: FaPhone, width: 14, height: 14 }
                            " {contact.phone}"
                        }
                    }
                    if !contact.email.is_empty() {
                        p {
                            Icon { icon: FaEnvelope, width: 14, height: 14 }
                            " {contact.email}"
                        }
                    }
                    if !contact.address.is_empty() {
                        p {
                            Icon { icon: FaLocationDot, width: 14, height: 14 }
                            " {contact.address}"
                        }
                    }
                }

                form {
                    class: "card form",
                    onsubmit: handle_submit,

                    match outcome() {
                        Some(SendOutcome::Sent) => rsx! {
                            div { class: "notice success", "تم إرسال رسالتك بنجاح، شكراً لتواصلك!" }
                        },
                        Some(SendOutcome::Failed(err)) => rsx! {
                            div { class: "notice error", "{err}" }
                        },
                        None => rsx! {},
                    }

                    Label { html_for: "contact-name", "الاسم" }
                    Input {
                        id: "contact-name",
                        r#type: "text",
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }

                    Label { html_for: "contact-phone", "رقم الجوال" }
                    Input {
                        id: "contact-phone",
                        r#type: "tel",
                        value: phone(),
                        oninput: move |evt: FormEvent| phone.set(evt.value()),
                    }

                    Label { html_for: "contact-text", "رسالتك" }
                    TextArea {
                        id: "contact-text",
                        rows: "5",
                        value: text(),
                        oninput: move |evt: FormEvent| text.set(evt.value()),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: loading(),
                        Icon { icon: FaPaperPlane, width: 14, height: 14 }
                        if loading() { " جارٍ الإرسال..." } else { " إرسال" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_send_replaces_earlier_success() {
        let mut shown = Some(SendOutcome::of::<()>(&Ok(())));
        assert_eq!(shown, Some(SendOutcome::Sent));

        shown = Some(SendOutcome::of::<()>(&Err(ApiError::validation("يرجى تعبئة جميع الحقول"))));
        assert_eq!(
            shown,
            Some(SendOutcome::Failed("يرجى تعبئة جميع الحقول".to_string()))
        );
    }
}
