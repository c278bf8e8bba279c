use dioxus::prelude::*;

use crate::domain::models::{ChatMessage, ChatRole};

/// One chat bubble with author and timestamp.
#[component]
pub fn MessageItem(message: ChatMessage) -> Element {
    let role_class = match message.role {
        ChatRole::User => "c-message c-message--user",
        ChatRole::Assistant => "c-message c-message--assistant",
    };
    let time = message.timestamp.format("%H:%M");

    rsx! {
        div { class: "{role_class}",
            div { class: "c-message__meta",
                span { class: "c-message__author", "{message.role.display_name()}" }
                span { class: "c-message__time", "{time}" }
            }
            div { class: "c-message__content", "{message.content}" }
        }
    }
}
