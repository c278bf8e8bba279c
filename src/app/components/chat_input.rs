//! Chat input with Enter-to-send and IME composition handling

use dioxus::prelude::*;
use keyboard_types::{Key, Modifiers};

#[component]
pub fn ChatInput(input: Signal<String>, on_submit: EventHandler<()>) -> Element {
    // Enter must not submit mid IME composition
    let mut is_composing = use_signal(|| false);

    rsx! {
        div { class: "c-chat-input",
            textarea {
                id: "chat-input",
                class: "c-chat-input__field",
                placeholder: "Ask J.A.R.V.I.S...",
                rows: 1,
                value: "{input}",
                oninput: move |evt| input.set(evt.value()),
                oncompositionstart: move |_| is_composing.set(true),
                oncompositionend: move |_| is_composing.set(false),
                onkeydown: move |evt| {
                    let shift = evt.modifiers().contains(Modifiers::SHIFT);
                    if evt.key() == Key::Enter && !shift && !is_composing() {
                        evt.prevent_default();
                        on_submit.call(());
                    }
                },
            }
            button {
                class: "c-chat-input__send",
                disabled: input.read().trim().is_empty(),
                onclick: move |_| on_submit.call(()),
                "Send"
            }
        }
    }
}
