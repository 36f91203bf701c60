use dioxus::prelude::*;

use crate::icons::{FaEnvelope, FaLocationDot, FaPhone};
use crate::Icon;

#[component]
pub fn Footer() -> Element {
    let config = crate::use_site_config();
    let contact = config.contact;

    rsx! {
        footer {
            class: "footer",
            div {
                class: "footer-brand",
                strong { "{config.site.name}" }
                p { "{config.site.tagline}" }
            }
            div {
                class: "footer-contact",
                if !contact.phone.is_empty() {
                    span {
                        Icon { icon: FaPhone, width: 12, height: 12 }
                        " {contact.phone}"
                    }
                }
                if !contact.email.is_empty() {
                    span {
                        Icon { icon: FaEnvelope, width: 12, height: 12 }
                        " {contact.email}"
                    }
                }
                if !contact.address.is_empty() {
                    span {
                        Icon { icon: FaLocationDot, width: 12, height: 12 }
                        " {contact.address}"
                    }
                }
            }
            p {
                class: "footer-copy",
                "© {config.site.name}. جميع الحقوق محفوظة."
            }
        }
    }
}
