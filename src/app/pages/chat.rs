use dioxus::prelude::*;

use crate::app::components::{ChatInput, EmptyState, MessageItem};
use crate::domain::assistant;
use crate::domain::models::{ChatMessage, ChatRole};
use crate::shared::logging;

#[component]
pub fn Chat() -> Element {
    let mut messages = use_signal(Vec::<ChatMessage>::new);
    let mut input = use_signal(String::new);

    let send = move |_: ()| {
        let text = input.read().trim().to_string();
        if text.is_empty() {
            return;
        }

        let response = assistant::reply(&text);
        {
            let mut list = messages.write();
            list.push(ChatMessage::new(ChatRole::User, text));
            list.push(ChatMessage::new(ChatRole::Assistant, response));
        }
        input.set(String::new());

        logging::log_chat_turn(messages.read().len());
    };

    rsx! {
        div { class: "c-page c-chat",
            header { class: "c-page__header",
                h1 { class: "c-page__title", "💬 Chat" }
                p { class: "c-page__description", "Talk to the assistant" }
            }

            div { class: "c-chat__messages",
                if messages.read().is_empty() {
                    EmptyState {
                        icon: "💬",
                        title: "No messages yet",
                        description: "Say hello to start the conversation.",
                    }
                } else {
                    for message in messages.read().iter() {
                        MessageItem { key: "{message.id}", message: message.clone() }
                    }
                }
            }

            ChatInput { input, on_submit: send }
        }
    }
}
