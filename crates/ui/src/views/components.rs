use dioxus::prelude::*;

use crate::vm::CardFaceVm;

#[component]
pub fn CardFace(card: CardFaceVm) -> Element {
    rsx! {
        div { class: "{card.class()}", title: "{card.code}",
            span { class: "card-face__corner", "{card.rank}{card.suit}" }
            span { class: "card-face__pip", "{card.suit}" }
            span { class: "card-face__corner card-face__corner--flipped", "{card.rank}{card.suit}" }
        }
    }
}

#[component]
pub fn CountPrompt(
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] autofocus: bool,
) -> Element {
    rsx! {
        div { class: "count-prompt",
            h3 { class: "count-prompt__title", "What's the running count?" }
            input {
                class: "count-prompt__input",
                id: "count-input",
                r#type: "text",
                inputmode: "numeric",
                autocomplete: "off",
                autofocus,
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    }
}

#[component]
pub fn FeedbackLine(text: Option<String>) -> Element {
    rsx! {
        p { class: "feedback", role: "status",
            if let Some(text) = text {
                "{text}"
            }
        }
    }
}
