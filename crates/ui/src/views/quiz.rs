use dioxus::prelude::*;
use quiz_core::{SessionEvent, SessionPhase, SessionState};
use services::QuizSession;

use super::{ErrorPanel, Loader, QuestionScreen, ResultsScreen, ReviewScreen, StartScreen};
use crate::context::AppContext;
use crate::vm::{map_active, map_result, map_review};

#[cfg(test)]
use services::SessionHandle;
#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Map a key press to the session event it stands for in the current phase.
fn key_event(state: &SessionState, key: &Key) -> Option<SessionEvent> {
    match (state.phase(), key) {
        (SessionPhase::Active, Key::Character(value)) => {
            let digit = value.parse::<usize>().ok().filter(|d| (1..=9).contains(d))?;
            SessionEvent::answer(state.current_question()?, digit - 1)
        }
        (SessionPhase::Reviewing, Key::ArrowLeft) => Some(SessionEvent::ReviewPrevious),
        (SessionPhase::Reviewing, Key::ArrowRight) => Some(SessionEvent::ReviewNext),
        (SessionPhase::Reviewing, Key::Escape) => Some(SessionEvent::ReviewClosed),
        _ => None,
    }
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut snapshot = use_signal(SessionState::new);

    // One session per mounted view. The loop task owns the session and is
    // cancelled with the scope, which also aborts its effects.
    let handle = use_hook(move || {
        let mut session = QuizSession::new(ctx.question_provider());
        let handle = session.handle();
        spawn(async move {
            while let Some(state) = session.next().await {
                snapshot.set(state.clone());
            }
        });
        handle
    });

    #[cfg(test)]
    {
        if let Some(handles) = try_consume_context::<QuizTestHandles>() {
            handles.register(handle.clone());
        }
    }

    let dispatch = use_callback(move |event: SessionEvent| {
        tracing::debug!(event = event.name(), "quiz input");
        if !handle.send(event) {
            tracing::warn!("quiz session is no longer running");
        }
    });

    let on_key = move |evt: KeyboardEvent| {
        let event = key_event(&snapshot.read(), &evt.data.key());
        if let Some(event) = event {
            evt.prevent_default();
            dispatch.call(event);
        }
    };

    let state = snapshot();

    rsx! {
        div {
            id: "quiz-root",
            class: "page quiz",
            tabindex: "0",
            onmounted: move |evt: MountedEvent| async move {
                let _ = evt.set_focus(true).await;
            },
            onkeydown: on_key,
            match state.phase() {
                SessionPhase::AwaitingCount => rsx! {
                    StartScreen { on_event: dispatch }
                },
                SessionPhase::Loading => rsx! {
                    Loader {}
                },
                SessionPhase::Error => rsx! {
                    ErrorPanel { on_event: dispatch }
                },
                SessionPhase::Active => match map_active(&state) {
                    Some(vm) => rsx! {
                        QuestionScreen { vm, on_event: dispatch }
                    },
                    None => rsx! {
                        Loader {}
                    },
                },
                SessionPhase::Finished => rsx! {
                    ResultsScreen { vm: map_result(&state), on_event: dispatch }
                },
                SessionPhase::Reviewing => match map_review(&state) {
                    Some(vm) => rsx! {
                        ReviewScreen { vm, on_event: dispatch }
                    },
                    None => rsx! {
                        ResultsScreen { vm: map_result(&state), on_event: dispatch }
                    },
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    session: Rc<RefCell<Option<SessionHandle>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, handle: SessionHandle) {
        *self.session.borrow_mut() = Some(handle);
    }

    pub(crate) fn send(&self, event: SessionEvent) {
        let handle = self.session.borrow().clone().expect("quiz session registered");
        assert!(handle.send(event), "quiz session stopped");
    }
}
