use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let version = ctx.version();

    rsx! {
        div { class: "page home-page",
            div { class: "home-spacer" }
            div { class: "home-logo", "♠" }
            h1 { class: "home-title", "BlackJack Card Counter" }
            p { class: "home-subtitle", "Train using the Hi-Lo method" }
            div { class: "home-spacer home-spacer--wide" }
            button {
                class: "btn home-mode",
                id: "home-normal",
                r#type: "button",
                onclick: move |_| {
                    let _ = navigator.push(Route::Normal {});
                },
                "Normal Mode"
            }
            button {
                class: "btn home-mode",
                id: "home-timed",
                r#type: "button",
                onclick: move |_| {
                    let _ = navigator.push(Route::Timed {});
                },
                "Timed Mode"
            }
            div { class: "home-spacer" }
            hr { class: "home-divider" }
            p { class: "home-version", "v{version}" }
        }
    }
}
