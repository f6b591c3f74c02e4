use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::views::components::{CardFace, CountPrompt, FeedbackLine};
use crate::vm::NormalVm;

#[component]
pub fn NormalView() -> Element {
    let ctx = use_context::<AppContext>();
    let trainer = ctx.trainer();

    let mut vm = use_signal(move || {
        trainer.start_normal().map(NormalVm::new).map_err(|err| {
            log::error!("cannot start normal mode: {err}");
            ViewError::SessionUnavailable
        })
    });
    let mut answer = use_signal(String::new);

    let on_next = move |evt: FormEvent| {
        evt.prevent_default();
        let input = answer.read().clone();
        let clear = match vm.write().as_mut() {
            Ok(vm) => vm.press_next(&input),
            Err(_) => false,
        };
        if clear {
            answer.set(String::new());
        }
    };

    let state = match vm.read().as_ref() {
        Ok(vm) => Ok((
            vm.card(),
            vm.is_quiz(),
            vm.feedback().map(str::to_string),
            vm.tally_label(),
        )),
        Err(err) => Err(*err),
    };

    let body = match state {
        Err(err) => {
            let message = err.message();
            rsx! {
                p { class: "view-error", "{message}" }
            }
        }
        Ok((card, is_quiz, feedback, tally)) => rsx! {
            form { class: "mode-table", onsubmit: on_next,
                if let Some(card) = card {
                    CardFace { card }
                }
                if is_quiz {
                    CountPrompt {
                        value: answer(),
                        on_input: move |value| answer.set(value),
                        autofocus: true,
                    }
                }
                button { class: "btn mode-next", id: "normal-next", r#type: "submit", "Next" }
                FeedbackLine { text: feedback }
            }
            footer { class: "mode-footer",
                span { class: "mode-footer__item", "{tally}" }
            }
        },
    };

    rsx! {
        div { class: "page mode-page normal-page", {body} }
    }
}
