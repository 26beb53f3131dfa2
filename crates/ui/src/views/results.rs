use dioxus::prelude::*;
use quiz_core::SessionEvent;

use crate::vm::ResultVm;

#[component]
pub fn ResultsScreen(vm: ResultVm, on_event: EventHandler<SessionEvent>) -> Element {
    let summary = vm.summary();
    let unanswered = vm.unanswered();

    rsx! {
        section { class: "panel results",
            h2 { "Quiz complete" }
            if vm.timed_out {
                p { class: "results__timeout", "Time's up!" }
            }
            p { class: "results__score", "{summary}" }
            p { class: "results__headline", "{vm.headline()}" }
            if unanswered > 0 {
                p { class: "results__unanswered", "{unanswered} left unanswered" }
            }
            div { class: "results__actions",
                button {
                    id: "results-review",
                    class: "btn btn-primary",
                    onclick: move |_| on_event.call(SessionEvent::ReviewRequested),
                    "Review answers"
                }
                button {
                    id: "results-restart",
                    class: "btn btn-secondary",
                    onclick: move |_| on_event.call(SessionEvent::Restart),
                    "Restart"
                }
            }
        }
    }
}
