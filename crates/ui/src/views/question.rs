use dioxus::prelude::*;
use quiz_core::SessionEvent;
use quiz_core::model::AnswerOption;

use crate::vm::ActiveVm;

#[component]
pub fn QuestionScreen(vm: ActiveVm, on_event: EventHandler<SessionEvent>) -> Element {
    let timer_class = if vm.timer_low {
        "question__timer question__timer--low"
    } else {
        "question__timer"
    };
    let progress_label = vm.progress_label();
    let points_label = vm.points_label();
    let choices: Vec<_> = vm
        .options
        .iter()
        .map(|option| {
            (
                option.clone(),
                AnswerOption::new(option.text.clone(), option.is_correct),
            )
        })
        .collect();

    rsx! {
        section { class: "panel question",
            div { class: "question__meta",
                span { class: "question__progress", "{progress_label}" }
                span { class: "question__points", "{points_label}" }
                if let Some(label) = vm.timer_label.as_deref() {
                    span { class: "{timer_class}", "{label}" }
                }
            }
            progress {
                class: "progress",
                max: "{vm.total}",
                value: "{vm.answered}",
            }
            h2 { class: "question__prompt", "{vm.prompt}" }
            div { class: "options",
                for (option, answer) in choices {
                    button {
                        key: "{option.index}",
                        id: "option-{option.index}",
                        class: "option",
                        onclick: move |_| on_event.call(SessionEvent::AnswerSubmitted(answer.clone())),
                        span { class: "option__key", "{option.key_hint}" }
                        span { class: "option__text", "{option.text}" }
                    }
                }
            }
            div { class: "question__actions",
                span { class: "hint", "Press 1-9 to answer" }
                button {
                    id: "question-finish",
                    class: "btn btn-secondary",
                    onclick: move |_| on_event.call(SessionEvent::FinishRequested),
                    "Finish"
                }
            }
        }
    }
}
