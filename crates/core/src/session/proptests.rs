use proptest::prelude::*;

use super::*;
use crate::model::{AnswerOption, Question, QuestionId};

fn question(id: u64) -> Question {
    Question::new(
        QuestionId::new(id),
        format!("Q{id}"),
        vec![AnswerOption::new("yes", true), AnswerOption::new("no", false)],
    )
    .unwrap()
}

fn event_strategy() -> impl Strategy<Value = SessionEvent> {
    prop_oneof![
        (0u32..6).prop_map(SessionEvent::CountSelected),
        (0u64..6).prop_map(|n| SessionEvent::QuestionsLoaded((0..n).map(question).collect())),
        Just(SessionEvent::LoadFailed),
        any::<bool>().prop_map(|ok| SessionEvent::AnswerSubmitted(AnswerOption::new("a", ok))),
        Just(SessionEvent::TimerTick),
        Just(SessionEvent::TimerTick),
        Just(SessionEvent::TimerTick),
        Just(SessionEvent::FinishRequested),
        Just(SessionEvent::ReviewRequested),
        Just(SessionEvent::ReviewPrevious),
        Just(SessionEvent::ReviewNext),
        (0usize..8).prop_map(SessionEvent::ReviewJump),
        Just(SessionEvent::ReviewClosed),
        Just(SessionEvent::Restart),
    ]
}

fn check_invariants(state: &SessionState) -> Result<(), TestCaseError> {
    let correct = state
        .recorded_answers()
        .iter()
        .filter(|a| a.is_correct())
        .count();
    prop_assert_eq!(state.score() as usize, correct);
    prop_assert!(state.recorded_answers().len() <= state.questions().len());
    if state.recorded_answers().len() == state.questions().len() && !state.questions().is_empty() {
        prop_assert!(state.is_terminal_for_scoring());
    }
    prop_assert!(state.current_index() < state.questions().len().max(1));
    if state.seconds_remaining() == Some(0) {
        prop_assert!(state.phase() != SessionPhase::Active);
    }
    Ok(())
}

/// Events each phase reacts to. Everything else must leave the state as it was.
fn accepts(phase: SessionPhase, event: &SessionEvent) -> bool {
    use SessionEvent as E;
    if matches!(event, E::Restart) {
        return true;
    }
    match phase {
        SessionPhase::AwaitingCount => matches!(event, E::CountSelected(n) if *n > 0),
        SessionPhase::Loading => matches!(event, E::QuestionsLoaded(_) | E::LoadFailed),
        SessionPhase::Active => {
            matches!(event, E::AnswerSubmitted(_) | E::TimerTick | E::FinishRequested)
        }
        SessionPhase::Error => false,
        SessionPhase::Finished => matches!(event, E::ReviewRequested),
        SessionPhase::Reviewing => matches!(
            event,
            E::ReviewPrevious | E::ReviewNext | E::ReviewJump(_) | E::ReviewClosed
        ),
    }
}

proptest! {
    #[test]
    fn invariants_hold_after_every_transition(
        events in proptest::collection::vec(event_strategy(), 0..200)
    ) {
        let mut state = SessionState::new();
        for event in events {
            state = apply(state, event);
            check_invariants(&state)?;
        }
    }

    #[test]
    fn score_never_decreases_within_a_session(
        events in proptest::collection::vec(event_strategy(), 0..200)
    ) {
        let mut state = SessionState::new();
        for event in events {
            let restarting = matches!(event, SessionEvent::Restart);
            let before = state.score();
            state = apply(state, event);
            if !restarting {
                prop_assert!(state.score() >= before);
            }
        }
    }

    #[test]
    fn seconds_only_move_while_active(
        events in proptest::collection::vec(event_strategy(), 0..200)
    ) {
        let mut state = SessionState::new();
        for event in events {
            let was_active = state.phase() == SessionPhase::Active;
            let before = state.seconds_remaining();
            let loads = matches!(event, SessionEvent::QuestionsLoaded(_) | SessionEvent::Restart);
            state = apply(state, event);
            if !was_active && !loads {
                prop_assert_eq!(state.seconds_remaining(), before);
            }
        }
    }

    #[test]
    fn finished_never_records_more_answers(
        events in proptest::collection::vec(event_strategy(), 0..60)
    ) {
        let mut state = [
            SessionEvent::CountSelected(2),
            SessionEvent::QuestionsLoaded(vec![question(0), question(1)]),
            SessionEvent::FinishRequested,
        ]
        .into_iter()
        .fold(SessionState::new(), apply);
        let recorded = state.recorded_answers().to_vec();
        for event in events {
            if matches!(event, SessionEvent::Restart) {
                break;
            }
            state = apply(state, event);
            prop_assert_eq!(state.recorded_answers(), recorded.as_slice());
        }
    }

    #[test]
    fn events_invalid_for_the_phase_are_no_ops(
        prefix in proptest::collection::vec(event_strategy(), 0..60),
        event in event_strategy(),
    ) {
        let state = prefix.into_iter().fold(SessionState::new(), apply);
        if !accepts(state.phase(), &event) {
            prop_assert_eq!(apply(state.clone(), event), state);
        }
    }
}
