use dioxus::prelude::*;

#[component]
pub fn Input(
    oninput: Option<EventHandler<FormEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = input)]
    attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        input {
            class: "input",
            oninput: move |event| {
                if let Some(f) = &oninput {
                    f.call(event);
                }
            },
            ..attributes,
        }
    }
}

#[component]
pub fn TextArea(
    oninput: Option<EventHandler<FormEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = textarea)]
    attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        textarea {
            class: "input textarea",
            oninput: move |event| {
                if let Some(f) = &oninput {
                    f.call(event);
                }
            },
            ..attributes,
        }
    }
}

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label {
            class: "label",
            "for": html_for,
            {children}
        }
    }
}
