use crate::model::{AnswerOption, Question};

/// Discrete inputs accepted by the session state machine.
///
/// Events that are not defined for the current phase are ignored, except
/// `Restart`, which always resets the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The user picked how many questions to answer.
    CountSelected(u32),
    /// The question provider resolved.
    QuestionsLoaded(Vec<Question>),
    /// The question provider failed.
    LoadFailed,
    /// The user answered the current question.
    AnswerSubmitted(AnswerOption),
    /// One second elapsed on the countdown.
    TimerTick,
    /// The user gave up on the remaining questions.
    FinishRequested,
    ReviewRequested,
    ReviewPrevious,
    ReviewNext,
    ReviewJump(usize),
    /// Leave review and return to the results.
    ReviewClosed,
    Restart,
}

impl SessionEvent {
    /// Build an `AnswerSubmitted` event for the option at `index` of `question`.
    #[must_use]
    pub fn answer(question: &Question, index: usize) -> Option<Self> {
        question
            .option(index)
            .cloned()
            .map(SessionEvent::AnswerSubmitted)
    }

    /// Short, payload-free name used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::CountSelected(_) => "count_selected",
            SessionEvent::QuestionsLoaded(_) => "questions_loaded",
            SessionEvent::LoadFailed => "load_failed",
            SessionEvent::AnswerSubmitted(_) => "answer_submitted",
            SessionEvent::TimerTick => "timer_tick",
            SessionEvent::FinishRequested => "finish_requested",
            SessionEvent::ReviewRequested => "review_requested",
            SessionEvent::ReviewPrevious => "review_previous",
            SessionEvent::ReviewNext => "review_next",
            SessionEvent::ReviewJump(_) => "review_jump",
            SessionEvent::ReviewClosed => "review_closed",
            SessionEvent::Restart => "restart",
        }
    }
}
