use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    let version = env!("CARGO_PKG_VERSION");

    rsx! {
        div { class: "c-page c-about",
            header { class: "c-page__header",
                h1 { class: "c-page__title", "ℹ️ About" }
            }

            div { class: "c-about__card",
                div { class: "c-about__brand", "✨" }
                h2 { class: "c-about__name", "J.A.R.V.I.S" }
                p { class: "c-about__tagline", "Just A Rather Very Intelligent System" }
                p { class: "c-about__version", "Version {version}" }
                p { class: "c-about__description",
                    "Assistant console shell: conversation surface, knowledge base "
                    "index and preferences, wrapped in a collapsible navigation layout."
                }
            }
        }
    }
}
