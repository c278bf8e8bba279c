use dioxus::prelude::*;

/// Centered empty-state placeholder used by list surfaces.
#[component]
pub fn EmptyState(icon: &'static str, title: String, description: String) -> Element {
    rsx! {
        div { class: "c-empty",
            div { class: "c-empty__icon", "{icon}" }
            div { class: "c-empty__title", "{title}" }
            div { class: "c-empty__description", "{description}" }
        }
    }
}
