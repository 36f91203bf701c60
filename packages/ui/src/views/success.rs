use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::icons::FaCircleCheck;
use crate::navigation::{success_follow_up, PageView};
use crate::Icon;

/// Confirmation shown after a request was submitted.
#[component]
pub fn Success(signed_in: bool, on_navigate: EventHandler<PageView>) -> Element {
    let follow_up = success_follow_up(signed_in);
    let follow_up_label = if signed_in {
        "متابعة الطلب"
    } else {
        "تقديم طلب آخر"
    };

    rsx! {
        section {
            class: "page success",
            div {
                class: "card success-card",
                span { class: "success-icon", Icon { icon: FaCircleCheck, width: 56, height: 56 } }
                h1 { class: "page-title", "تم استلام طلبك بنجاح!" }
                p {
                    class: "page-subtitle",
                    "شكراً لثقتك بنا. سيتواصل معك فريقنا قريباً لمناقشة تفاصيل مشروعك."
                }
                if signed_in {
                    p { class: "page-subtitle", "يمكنك متابعة حالة طلبك من لوحة التحكم." }
                }
                div {
                    class: "form-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| on_navigate.call(PageView::Home),
                        "العودة للرئيسية"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_navigate.call(follow_up),
                        "{follow_up_label}"
                    }
                }
            }
        }
    }
}
