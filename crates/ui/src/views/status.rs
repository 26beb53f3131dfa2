use dioxus::prelude::*;
use quiz_core::SessionEvent;

#[component]
pub fn Loader() -> Element {
    rsx! {
        section { class: "panel loader",
            div { class: "loader__spinner" }
            p { "Loading..." }
        }
    }
}

#[component]
pub fn ErrorPanel(on_event: EventHandler<SessionEvent>) -> Element {
    rsx! {
        section { class: "panel error",
            h2 { "We couldn't load the questions" }
            p { "Check your connection or question source and try again." }
            button {
                id: "error-restart",
                class: "btn btn-primary",
                onclick: move |_| on_event.call(SessionEvent::Restart),
                "Start over"
            }
        }
    }
}
