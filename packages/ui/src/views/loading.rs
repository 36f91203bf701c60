use dioxus::prelude::*;

use crate::icons::FaSpinner;
use crate::Icon;

/// Full-screen spinner shown until the auth service has reported.
#[component]
pub fn LoadingScreen() -> Element {
    rsx! {
        div {
            class: "loading-screen",
            span {
                class: "spin",
                Icon { icon: FaSpinner, width: 40, height: 40 }
            }
        }
    }
}
