use dioxus::prelude::*;

use crate::shared::hooks::{set_theme, use_theme};

/// Theme toggle for switching between the light and dark theme.
/// Lives in the top bar; the Settings page offers the same choice as cards.
#[component]
pub fn ThemeToggle() -> Element {
    let current_theme = use_theme();

    let is_currently_light = !current_theme().is_dark();

    let toggle_class = if is_currently_light {
        "c-theme-toggle c-theme-toggle--light"
    } else {
        "c-theme-toggle"
    };

    // Tooltip shows target state (what will happen on click)
    let tooltip = format!("Switch to {} theme", current_theme().toggle().display_name());

    rsx! {
        div {
            class: "{toggle_class}",
            "data-tooltip": "{tooltip}",
            role: "button",
            tabindex: "0",
            aria_label: "Toggle light/dark theme",
            onclick: move |_| {
                let next = current_theme().toggle();
                set_theme(current_theme, next);
            },

            div { class: "c-theme-toggle__ball" }
        }
    }
}
