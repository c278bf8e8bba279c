use dioxus::prelude::*;

use crate::shared::hooks::{set_theme, use_theme, Theme};

#[component]
pub fn Settings() -> Element {
    let current_theme = use_theme();

    rsx! {
        div { class: "c-page c-settings",
            header { class: "c-page__header",
                h1 { class: "c-page__title", "⚙️ Settings" }
                p { class: "c-page__description", "Console preferences" }
            }

            section { class: "c-settings__section",
                h2 { class: "c-settings__heading", "Appearance" }
                p { class: "c-settings__hint",
                    "The selection is saved in this browser and restored on the next visit."
                }

                div { class: "c-settings__themes",
                    for theme in Theme::all() {
                        ThemeCard {
                            key: "{theme.as_str()}",
                            theme,
                            selected: current_theme() == theme,
                            on_select: move |t| set_theme(current_theme, t),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ThemeCard(theme: Theme, selected: bool, on_select: EventHandler<Theme>) -> Element {
    let card_class = if selected {
        "c-theme-card c-theme-card--selected"
    } else {
        "c-theme-card"
    };

    rsx! {
        button {
            class: "{card_class}",
            onclick: move |_| on_select.call(theme),
            span { class: "c-theme-card__icon", "{theme.icon()}" }
            span { class: "c-theme-card__name", "{theme.display_name()}" }
        }
    }
}
