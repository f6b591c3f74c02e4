use dioxus::prelude::*;
use hilo_core::DealInterval;
use services::TimedHandle;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::views::components::{CardFace, CountPrompt, FeedbackLine};
use crate::vm::TimedVm;

#[component]
pub fn TimedView() -> Element {
    let ctx = use_context::<AppContext>();
    let trainer = ctx.trainer();
    let initial_interval = trainer.settings().deal_interval();

    let mut vm = use_signal(move || TimedVm::new(initial_interval));
    let mut answer = use_signal(String::new);

    let handle: Result<TimedHandle, ViewError> = use_hook(move || match trainer.start_timed() {
        Ok((driver, handle, mut events)) => {
            spawn(async move {
                let session = driver.run().await;
                log::debug!("timed session closed after {} shoes", session.shoes_dealt());
            });
            spawn(async move {
                while let Some(event) = events.recv().await {
                    vm.write().apply(event);
                }
            });
            Ok(handle)
        }
        Err(err) => {
            log::error!("cannot start timed mode: {err}");
            Err(ViewError::SessionUnavailable)
        }
    });

    let on_leave = handle.clone();
    use_drop(move || {
        if let Ok(handle) = &on_leave {
            handle.cancel();
        }
    });

    let handle = match handle {
        Ok(handle) => handle,
        Err(err) => {
            let message = err.message();
            return rsx! {
                div { class: "page mode-page timed-page",
                    p { class: "view-error", "{message}" }
                }
            };
        }
    };

    let on_toggle = {
        let handle = handle.clone();
        move |_: MouseEvent| {
            let sent = if vm.read().is_paused() {
                handle.resume()
            } else {
                handle.pause()
            };
            if let Err(err) = sent {
                log::warn!("timed mode control ignored: {err}");
            }
        }
    };

    let on_speed = {
        let handle = handle.clone();
        move |evt: FormEvent| {
            let Ok(secs) = evt.value().parse::<f64>() else {
                return;
            };
            let interval = DealInterval::clamped(secs);
            vm.write().set_interval(interval);
            if let Err(err) = handle.set_interval(interval) {
                log::warn!("speed change ignored: {err}");
            }
        }
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let input = answer.read().clone();
        match handle.submit(input) {
            Ok(()) => answer.set(String::new()),
            Err(err) => log::warn!("answer not delivered: {err}"),
        }
    };

    let state = vm.read().clone();
    let card = state.card().cloned();
    let interval = state.interval().secs();
    let (min, max, step) = (
        DealInterval::MIN_SECS,
        DealInterval::MAX_SECS,
        DealInterval::STEP_SECS,
    );
    let stop_label = state.stop_label();
    let interval_label = state.interval_label();
    let tally = state.tally_label();

    rsx! {
        div { class: "page mode-page timed-page",
            div { class: "mode-table",
                if let Some(card) = card {
                    CardFace { card }
                }
                if state.is_quiz() {
                    form { class: "timed-quiz", onsubmit: on_submit,
                        CountPrompt {
                            value: answer(),
                            on_input: move |value| answer.set(value),
                            autofocus: true,
                        }
                        button { class: "btn mode-next", id: "timed-submit", r#type: "submit", "Submit" }
                    }
                }
                FeedbackLine { text: state.feedback().map(str::to_string) }
            }
            if state.shows_controls() {
                div { class: "timed-controls",
                    button {
                        class: "btn timed-toggle",
                        id: "timed-toggle",
                        r#type: "button",
                        onclick: on_toggle,
                        "{stop_label}"
                    }
                    label { class: "timed-speed",
                        span { class: "timed-speed__label", "Speed" }
                        input {
                            class: "timed-speed__slider",
                            id: "timed-speed",
                            r#type: "range",
                            min: "{min}",
                            max: "{max}",
                            step: "{step}",
                            value: "{interval}",
                            oninput: on_speed,
                        }
                        span { class: "timed-speed__value", "{interval_label}" }
                    }
                }
            }
            footer { class: "mode-footer",
                span { class: "mode-footer__item", "{tally}" }
                if state.is_stopped() {
                    span { class: "mode-footer__item", "Stopped" }
                }
            }
        }
    }
}
