use dioxus::prelude::*;
use quiz_core::{SECS_PER_QUESTION, SessionEvent};

use crate::vm::COUNT_CHOICES;

#[component]
pub fn StartScreen(on_event: EventHandler<SessionEvent>) -> Element {
    rsx! {
        section { class: "panel start",
            h2 { "Welcome to Quiz Master" }
            p { "How many questions would you like to do?" }
            div { class: "count-choices",
                for count in COUNT_CHOICES {
                    button {
                        key: "{count}",
                        id: "count-{count}",
                        class: "btn btn-primary",
                        onclick: move |_| on_event.call(SessionEvent::CountSelected(count)),
                        "{count}"
                    }
                }
            }
            p { class: "hint", "You get {SECS_PER_QUESTION} seconds per question." }
        }
    }
}
