use dioxus::prelude::*;
use store::{Banner, ProjectType};

use api::DataService;

use crate::components::{Button, ButtonVariant};
use crate::icons::FaRocket;
use crate::{use_backend, use_site_config, Icon};

/// Landing section with the call to action and the active banners.
#[component]
pub fn Hero(on_start: EventHandler<()>) -> Element {
    let backend = use_backend();
    let site = use_site_config().site;
    let mut banners = use_signal(Vec::<Banner>::new);

    let _loader = use_resource(move || {
        let backend = backend.clone();
        async move {
            banners.set(backend.active_banners().await);
        }
    });

    rsx! {
        section {
            class: "hero",
            h1 { class: "hero-title", "{site.name}" }
            p { class: "hero-tagline", "{site.tagline}" }
            p {
                class: "hero-lead",
                "شعارات، هويات بصرية، تصاميم سوشيال ميديا ومواقع، ومونتاج فيديو. أخبرنا بفكرتك وسنتولى الباقي."
            }
            Button {
                variant: ButtonVariant::Primary,
                class: "hero-cta",
                onclick: move |_| on_start.call(()),
                Icon { icon: FaRocket, width: 16, height: 16 }
                " ابدأ مشروعك الآن"
            }
        }

        if !banners().is_empty() {
            section {
                class: "banners",
                for banner in banners() {
                    figure {
                        key: "{banner.id}",
                        class: "banner",
                        img { src: "{banner.image_url}", alt: "{banner.title}" }
                        figcaption { "{banner.title}" }
                    }
                }
            }
        }

        section {
            class: "services",
            h2 { "خدماتنا" }
            div {
                class: "service-grid",
                for project_type in ProjectType::ALL {
                    div {
                        key: "{project_type.key()}",
                        class: "service-card",
                        "{project_type.label()}"
                    }
                }
            }
        }
    }
}
