//! Pure session transition function.
//!
//! Every phase × event pair has an outcome. Pairs not listed for a phase
//! return the input state untouched; `Restart` is handled before dispatch and
//! always yields the zero state.

use super::SECS_PER_QUESTION;
use super::event::SessionEvent;
use super::state::{SessionPhase, SessionState};

/// Compute the next session state for `event`.
///
/// Never panics and never applies a transition partially: the result is
/// either a fully updated state or `state` unchanged.
#[must_use]
pub fn apply(state: SessionState, event: SessionEvent) -> SessionState {
    if matches!(event, SessionEvent::Restart) {
        return SessionState::new();
    }

    match state.phase {
        SessionPhase::AwaitingCount => awaiting_count(state, event),
        SessionPhase::Loading => loading(state, event),
        SessionPhase::Active => active(state, event),
        SessionPhase::Finished => finished(state, event),
        SessionPhase::Reviewing => reviewing(state, event),
        SessionPhase::Error => state,
    }
}

fn awaiting_count(state: SessionState, event: SessionEvent) -> SessionState {
    match event {
        SessionEvent::CountSelected(count) if count > 0 => SessionState {
            phase: SessionPhase::Loading,
            requested_count: Some(count),
            ..state
        },
        _ => state,
    }
}

fn loading(state: SessionState, event: SessionEvent) -> SessionState {
    match event {
        SessionEvent::QuestionsLoaded(questions) if questions.is_empty() => SessionState {
            phase: SessionPhase::Error,
            ..state
        },
        SessionEvent::QuestionsLoaded(questions) => {
            let count = state.requested_count.unwrap_or_else(|| {
                u32::try_from(questions.len()).unwrap_or(u32::MAX)
            });
            SessionState {
                phase: SessionPhase::Active,
                questions,
                current_index: 0,
                score: 0,
                seconds_remaining: Some(count.saturating_mul(SECS_PER_QUESTION)),
                recorded_answers: Vec::new(),
                ..state
            }
        }
        SessionEvent::LoadFailed => SessionState {
            phase: SessionPhase::Error,
            ..state
        },
        _ => state,
    }
}

fn active(mut state: SessionState, event: SessionEvent) -> SessionState {
    match event {
        SessionEvent::AnswerSubmitted(option) => {
            if option.is_correct() {
                state.score = state.score.saturating_add(1);
            }
            state.recorded_answers.push(option);

            let is_last = state.current_index + 1 >= state.questions.len();
            if is_last {
                state.phase = SessionPhase::Finished;
            } else {
                state.current_index += 1;
            }
            state
        }
        SessionEvent::TimerTick => {
            let remaining = state.seconds_remaining.unwrap_or(0).saturating_sub(1);
            state.seconds_remaining = Some(remaining);
            if remaining == 0 {
                state.phase = SessionPhase::Finished;
            }
            state
        }
        SessionEvent::FinishRequested => SessionState {
            phase: SessionPhase::Finished,
            ..state
        },
        _ => state,
    }
}

fn finished(state: SessionState, event: SessionEvent) -> SessionState {
    match event {
        SessionEvent::ReviewRequested => SessionState {
            phase: SessionPhase::Reviewing,
            current_index: 0,
            ..state
        },
        _ => state,
    }
}

fn reviewing(state: SessionState, event: SessionEvent) -> SessionState {
    let last = state.questions.len().saturating_sub(1);
    match event {
        SessionEvent::ReviewPrevious => SessionState {
            current_index: state.current_index.saturating_sub(1),
            ..state
        },
        SessionEvent::ReviewNext => SessionState {
            current_index: (state.current_index + 1).min(last),
            ..state
        },
        SessionEvent::ReviewJump(index) if index < state.questions.len() => SessionState {
            current_index: index,
            ..state
        },
        SessionEvent::ReviewClosed => SessionState {
            phase: SessionPhase::Finished,
            ..state
        },
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerOption, Question, QuestionId};

    fn question(id: u64) -> Question {
        Question::new(
            QuestionId::new(id),
            format!("Question {id}"),
            vec![
                AnswerOption::new(format!("right {id}"), true),
                AnswerOption::new(format!("wrong {id}"), false),
            ],
        )
        .unwrap()
    }

    fn questions(n: u64) -> Vec<Question> {
        (0..n).map(question).collect()
    }

    fn right() -> SessionEvent {
        SessionEvent::AnswerSubmitted(AnswerOption::new("right", true))
    }

    fn wrong() -> SessionEvent {
        SessionEvent::AnswerSubmitted(AnswerOption::new("wrong", false))
    }

    fn run(events: impl IntoIterator<Item = SessionEvent>) -> SessionState {
        events.into_iter().fold(SessionState::new(), apply)
    }

    fn scenario_a() -> SessionState {
        run([
            SessionEvent::CountSelected(5),
            SessionEvent::QuestionsLoaded(questions(5)),
        ])
    }

    fn scenario_b() -> SessionState {
        let mut state = scenario_a();
        for _ in 0..4 {
            state = apply(state, right());
        }
        apply(state, wrong())
    }

    #[test]
    fn count_selected_moves_to_loading() {
        let state = run([SessionEvent::CountSelected(3)]);
        assert_eq!(state.phase(), SessionPhase::Loading);
        assert_eq!(state.requested_count(), Some(3));
        assert!(state.needs_questions());
    }

    #[test]
    fn zero_count_is_rejected() {
        let state = run([SessionEvent::CountSelected(0)]);
        assert_eq!(state, SessionState::new());
    }

    #[test]
    fn scenario_a_loads_and_starts_countdown() {
        let state = scenario_a();
        assert_eq!(state.phase(), SessionPhase::Active);
        assert_eq!(state.seconds_remaining(), Some(150));
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.score(), 0);
        assert!(state.recorded_answers().is_empty());
        assert_eq!(state.current_question().map(Question::id), Some(QuestionId::new(0)));
        assert!(state.is_timer_running());
        assert!(!state.needs_questions());
    }

    #[test]
    fn countdown_uses_requested_count() {
        let state = run([
            SessionEvent::CountSelected(4),
            SessionEvent::QuestionsLoaded(questions(2)),
        ]);
        assert_eq!(state.seconds_remaining(), Some(120));
        assert_eq!(state.num_questions(), 2);
    }

    #[test]
    fn empty_question_list_is_an_error() {
        let state = run([
            SessionEvent::CountSelected(2),
            SessionEvent::QuestionsLoaded(Vec::new()),
        ]);
        assert_eq!(state.phase(), SessionPhase::Error);
    }

    #[test]
    fn answers_advance_and_score() {
        let state = apply(scenario_a(), right());
        assert_eq!(state.current_index(), 1);
        assert_eq!(state.score(), 1);
        let state = apply(state, wrong());
        assert_eq!(state.current_index(), 2);
        assert_eq!(state.score(), 1);
        assert_eq!(state.answered_count(), 2);
    }

    #[test]
    fn scenario_b_finishes_after_last_answer() {
        let state = scenario_b();
        assert_eq!(state.score(), 4);
        assert_eq!(state.phase(), SessionPhase::Finished);
        assert_eq!(state.recorded_answers().len(), 5);
        assert_eq!(state.current_index(), 4);
        assert_eq!(state.score_percent(), 80);
    }

    #[test]
    fn finished_ignores_further_answers_and_ticks() {
        let finished = scenario_b();
        assert_eq!(apply(finished.clone(), right()), finished);
        assert_eq!(apply(finished.clone(), SessionEvent::TimerTick), finished);
    }

    #[test]
    fn scenario_c_times_out_without_answers() {
        let mut state = scenario_a();
        for _ in 0..149 {
            state = apply(state, SessionEvent::TimerTick);
            assert_eq!(state.phase(), SessionPhase::Active);
        }
        state = apply(state, SessionEvent::TimerTick);
        assert_eq!(state.phase(), SessionPhase::Finished);
        assert_eq!(state.seconds_remaining(), Some(0));
        assert!(state.recorded_answers().is_empty());
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn timeout_keeps_recorded_answers_short() {
        let mut state = run([
            SessionEvent::CountSelected(1),
            SessionEvent::QuestionsLoaded(questions(3)),
        ]);
        state = apply(state, right());
        for _ in 0..30 {
            state = apply(state, SessionEvent::TimerTick);
        }
        assert_eq!(state.phase(), SessionPhase::Finished);
        assert_eq!(state.recorded_answers().len(), 1);
        assert!(state.answer_for(1).is_none());
    }

    #[test]
    fn scenario_d_load_failure_is_terminal_until_restart() {
        let state = run([SessionEvent::CountSelected(3), SessionEvent::LoadFailed]);
        assert_eq!(state.phase(), SessionPhase::Error);

        let after_answer = apply(state.clone(), right());
        assert_eq!(after_answer, state);

        assert_eq!(apply(state, SessionEvent::Restart), SessionState::new());
    }

    #[test]
    fn scenario_e_review_navigation_clamps() {
        let state = [
            SessionEvent::ReviewRequested,
            SessionEvent::ReviewNext,
            SessionEvent::ReviewNext,
            SessionEvent::ReviewPrevious,
        ]
        .into_iter()
        .fold(scenario_b(), apply);
        assert_eq!(state.phase(), SessionPhase::Reviewing);
        assert_eq!(state.current_index(), 1);

        let at_end = apply(state, SessionEvent::ReviewJump(4));
        let clamped = apply(at_end, SessionEvent::ReviewNext);
        assert_eq!(clamped.current_index(), 4);
    }

    #[test]
    fn review_previous_clamps_at_zero() {
        let state = [SessionEvent::ReviewRequested, SessionEvent::ReviewPrevious]
            .into_iter()
            .fold(scenario_b(), apply);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn review_jump_out_of_range_is_rejected() {
        let reviewing = apply(scenario_b(), SessionEvent::ReviewRequested);
        let after = apply(reviewing.clone(), SessionEvent::ReviewJump(5));
        assert_eq!(after, reviewing);
    }

    #[test]
    fn review_does_not_touch_score() {
        let finished = scenario_b();
        let reviewing = [
            SessionEvent::ReviewRequested,
            SessionEvent::ReviewJump(3),
            right(),
        ]
        .into_iter()
        .fold(finished.clone(), apply);
        assert_eq!(reviewing.score(), finished.score());
        assert_eq!(reviewing.recorded_answers(), finished.recorded_answers());
    }

    #[test]
    fn finish_requested_ends_early() {
        let state = [right(), SessionEvent::FinishRequested]
            .into_iter()
            .fold(scenario_a(), apply);
        assert_eq!(state.phase(), SessionPhase::Finished);
        assert_eq!(state.recorded_answers().len(), 1);
        assert_eq!(state.score(), 1);
    }

    #[test]
    fn review_closed_returns_to_results() {
        let state = [
            SessionEvent::ReviewRequested,
            SessionEvent::ReviewNext,
            SessionEvent::ReviewClosed,
        ]
        .into_iter()
        .fold(scenario_b(), apply);
        assert_eq!(state.phase(), SessionPhase::Finished);
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn stale_load_result_is_ignored_after_restart() {
        let state = run([
            SessionEvent::CountSelected(2),
            SessionEvent::Restart,
            SessionEvent::QuestionsLoaded(questions(2)),
        ]);
        assert_eq!(state, SessionState::new());
    }

    #[test]
    fn second_count_selection_is_ignored_while_loading() {
        let state = run([SessionEvent::CountSelected(2), SessionEvent::CountSelected(9)]);
        assert_eq!(state.requested_count(), Some(2));
    }

    #[test]
    fn events_out_of_phase_leave_loading_and_reviewing_unchanged() {
        let loading = run([SessionEvent::CountSelected(2)]);
        for event in [
            right(),
            SessionEvent::TimerTick,
            SessionEvent::FinishRequested,
            SessionEvent::ReviewRequested,
            SessionEvent::ReviewNext,
            SessionEvent::ReviewJump(0),
            SessionEvent::ReviewClosed,
        ] {
            assert_eq!(apply(loading.clone(), event), loading);
        }

        let reviewing = apply(
            apply(scenario_b(), SessionEvent::ReviewRequested),
            SessionEvent::ReviewNext,
        );
        assert!(!reviewing.is_timer_running());
        for event in [
            right(),
            SessionEvent::TimerTick,
            SessionEvent::LoadFailed,
            SessionEvent::CountSelected(3),
            SessionEvent::QuestionsLoaded(questions(2)),
            SessionEvent::FinishRequested,
            SessionEvent::ReviewRequested,
        ] {
            assert_eq!(apply(reviewing.clone(), event), reviewing);
        }
    }

    #[test]
    fn restart_from_every_phase_is_zero_state() {
        let states = [
            SessionState::new(),
            run([SessionEvent::CountSelected(2)]),
            scenario_a(),
            run([SessionEvent::CountSelected(2), SessionEvent::LoadFailed]),
            scenario_b(),
            apply(scenario_b(), SessionEvent::ReviewRequested),
        ];
        for state in states {
            assert_eq!(apply(state, SessionEvent::Restart), SessionState::new());
        }
    }

    #[test]
    fn method_form_matches_function() {
        let via_method = SessionState::new().apply(SessionEvent::CountSelected(5));
        assert_eq!(via_method, run([SessionEvent::CountSelected(5)]));
    }
}
