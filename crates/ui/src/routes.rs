use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::context::AppContext;
use crate::views::QuizView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", QuizView)] Quiz {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let source = ctx.source_label().to_string();

    rsx! {
        div { class: "app",
            header { class: "app-header",
                h1 { "Quiz Master" }
                p { class: "app-header__source", "Questions from {source}" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
