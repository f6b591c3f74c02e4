use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_route};

use crate::views::{HomeView, NormalView, TimedView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/normal", NormalView)] Normal {},
        #[route("/timed", TimedView)] Timed {},
}

impl Route {
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home {} => "BlackJack Card Counter",
            Route::Normal {} => "Normal Mode",
            Route::Timed {} => "Timed Mode",
        }
    }
}

#[component]
fn Layout() -> Element {
    let route = use_route::<Route>();
    let on_home = route == Route::Home {};
    let title = route.title();

    rsx! {
        div { class: "app",
            if !on_home {
                header { class: "topbar",
                    Link { class: "topbar__home", to: Route::Home {}, "← Home" }
                    h2 { class: "topbar__title", "{title}" }
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
