use std::fmt;

use crate::model::{AnswerOption, Question};

use super::progress::SessionProgress;

//
// ─── PHASE ────────────────────────────────────────────────────────────────────
//

/// Discrete stage of a quiz session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    /// Waiting for the user to pick a question count.
    #[default]
    AwaitingCount,
    /// Questions have been requested and not yet delivered.
    Loading,
    /// Questions are being answered and the countdown is running.
    Active,
    /// Retrieval failed. Only `Restart` leaves this phase.
    Error,
    /// All questions answered or time ran out.
    Finished,
    /// Stepping through answered questions after finishing.
    Reviewing,
}

impl SessionPhase {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SessionPhase::AwaitingCount => "awaiting_count",
            SessionPhase::Loading => "loading",
            SessionPhase::Active => "active",
            SessionPhase::Error => "error",
            SessionPhase::Finished => "finished",
            SessionPhase::Reviewing => "reviewing",
        }
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── STATE ────────────────────────────────────────────────────────────────────
//

/// The single aggregate for one quiz session.
///
/// Fields are only written by [`super::apply`]; consumers read them through
/// the accessors below.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub(super) phase: SessionPhase,
    pub(super) requested_count: Option<u32>,
    pub(super) questions: Vec<Question>,
    pub(super) current_index: usize,
    pub(super) score: u32,
    pub(super) seconds_remaining: Option<u32>,
    pub(super) recorded_answers: Vec<AnswerOption>,
}

impl SessionState {
    /// Fresh zero state in `AwaitingCount`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn requested_count(&self) -> Option<u32> {
        self.requested_count
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn seconds_remaining(&self) -> Option<u32> {
        self.seconds_remaining
    }

    #[must_use]
    pub fn recorded_answers(&self) -> &[AnswerOption] {
        &self.recorded_answers
    }

    #[must_use]
    pub fn num_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.recorded_answers.len()
    }

    /// The answer recorded for the question at `index`.
    ///
    /// `None` when the session ended before that question was answered.
    #[must_use]
    pub fn answer_for(&self, index: usize) -> Option<&AnswerOption> {
        self.recorded_answers.get(index)
    }

    /// Highest score reachable with the loaded questions.
    #[must_use]
    pub fn max_score(&self) -> u32 {
        u32::try_from(self.questions.len()).unwrap_or(u32::MAX)
    }

    /// Score as a whole percentage of `max_score`, 0 when nothing is loaded.
    #[must_use]
    pub fn score_percent(&self) -> u32 {
        let max = self.max_score();
        if max == 0 {
            return 0;
        }
        let percent = u64::from(self.score) * 100 / u64::from(max);
        u32::try_from(percent).unwrap_or(100)
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let total = self.num_questions();
        let answered = self.answered_count();
        SessionProgress {
            total,
            answered,
            remaining: total.saturating_sub(answered),
            is_complete: self.is_terminal_for_scoring(),
        }
    }

    /// True while the countdown should be ticking.
    #[must_use]
    pub fn is_timer_running(&self) -> bool {
        self.phase == SessionPhase::Active
    }

    /// True while the caller owes the state machine a retrieval result.
    #[must_use]
    pub fn needs_questions(&self) -> bool {
        self.phase == SessionPhase::Loading
    }

    /// True once no further answers can be recorded.
    #[must_use]
    pub fn is_terminal_for_scoring(&self) -> bool {
        matches!(self.phase, SessionPhase::Finished | SessionPhase::Reviewing)
    }

    /// Apply an event, consuming the current state.
    #[must_use]
    pub fn apply(self, event: super::SessionEvent) -> Self {
        super::apply(self, event)
    }
}
