use dioxus::prelude::*;
use quiz_core::SessionEvent;

use crate::vm::ReviewVm;

#[component]
pub fn ReviewScreen(vm: ReviewVm, on_event: EventHandler<SessionEvent>) -> Element {
    let position = vm.position_label();
    let answer_label = vm.answer_label();
    let answer_class = format!("review__answer review__answer--{}", vm.outcome.css_modifier());

    rsx! {
        section { class: "panel review",
            div { class: "review__header",
                h2 { "{position}" }
                nav { class: "review__markers",
                    for marker in vm.markers.clone() {
                        button {
                            key: "{marker.index}",
                            class: "{marker.class()}",
                            onclick: move |_| on_event.call(SessionEvent::ReviewJump(marker.index)),
                            "{marker.label}"
                        }
                    }
                }
            }
            h3 { class: "review__prompt", "{vm.prompt}" }
            ul { class: "review__options",
                for option in vm.options.clone() {
                    li { key: "{option.index}", class: "{option.review_class()}",
                        span { class: "option__text", "{option.text}" }
                        if option.is_correct {
                            span { class: "option__tag", "Correct answer" }
                        }
                        if option.was_chosen && !option.is_correct {
                            span { class: "option__tag", "Your choice" }
                        }
                    }
                }
            }
            p { class: "{answer_class}", "{answer_label}" }
            div { class: "review__nav",
                button {
                    id: "review-previous",
                    class: "btn",
                    disabled: !vm.can_previous,
                    onclick: move |_| on_event.call(SessionEvent::ReviewPrevious),
                    "Previous"
                }
                button {
                    id: "review-next",
                    class: "btn",
                    disabled: !vm.can_next,
                    onclick: move |_| on_event.call(SessionEvent::ReviewNext),
                    "Next"
                }
            }
            div { class: "review__actions",
                button {
                    id: "review-close",
                    class: "btn btn-secondary",
                    onclick: move |_| on_event.call(SessionEvent::ReviewClosed),
                    "Back to results"
                }
                button {
                    id: "review-restart",
                    class: "btn btn-secondary",
                    onclick: move |_| on_event.call(SessionEvent::Restart),
                    "Restart"
                }
            }
        }
    }
}
