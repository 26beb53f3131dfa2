use quiz_core::model::{AnswerOption, Question};
use quiz_core::time::format_clock;
use quiz_core::{SessionPhase, SessionState};

/// Question counts offered on the start screen.
pub const COUNT_CHOICES: [u32; 4] = [5, 10, 15, 20];

/// Below this many seconds the countdown is rendered as a warning.
pub const TIMER_LOW_SECS: u32 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Wrong,
    Unanswered,
}

impl AnswerOutcome {
    fn of(answer: Option<&AnswerOption>) -> Self {
        match answer {
            Some(answer) if answer.is_correct() => Self::Correct,
            Some(_) => Self::Wrong,
            None => Self::Unanswered,
        }
    }

    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Wrong => "wrong",
            Self::Unanswered => "unanswered",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub key_hint: String,
    pub text: String,
    pub is_correct: bool,
    pub was_chosen: bool,
}

impl OptionVm {
    /// Class list for the review screen, where correctness is revealed.
    #[must_use]
    pub fn review_class(&self) -> &'static str {
        match (self.is_correct, self.was_chosen) {
            (true, true) => "option option--correct option--chosen",
            (true, false) => "option option--correct",
            (false, true) => "option option--wrong option--chosen",
            (false, false) => "option",
        }
    }
}

fn option_vms(question: &Question, chosen: Option<&AnswerOption>) -> Vec<OptionVm> {
    question
        .options()
        .iter()
        .enumerate()
        .map(|(index, option)| OptionVm {
            index,
            key_hint: (index + 1).to_string(),
            text: option.text().to_string(),
            is_correct: option.is_correct(),
            was_chosen: chosen == Some(option),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveVm {
    pub question_number: usize,
    pub total: usize,
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub answered: usize,
    pub score: u32,
    pub max_score: u32,
    pub timer_label: Option<String>,
    pub timer_low: bool,
}

impl ActiveVm {
    #[must_use]
    pub fn progress_label(&self) -> String {
        format!("Question {} / {}", self.question_number, self.total)
    }

    #[must_use]
    pub fn points_label(&self) -> String {
        format!("{} / {} points", self.score, self.max_score)
    }
}

/// `None` unless the session is answering and has a current question.
#[must_use]
pub fn map_active(state: &SessionState) -> Option<ActiveVm> {
    if state.phase() != SessionPhase::Active {
        return None;
    }
    let question = state.current_question()?;
    let seconds = state.seconds_remaining();

    Some(ActiveVm {
        question_number: state.current_index() + 1,
        total: state.num_questions(),
        prompt: question.prompt().to_string(),
        options: option_vms(question, None),
        answered: state.answered_count(),
        score: state.score(),
        max_score: state.max_score(),
        timer_label: seconds.map(|secs| format!("Time: {}", format_clock(secs))),
        timer_low: seconds.is_some_and(|secs| secs < TIMER_LOW_SECS),
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub score: u32,
    pub max_score: u32,
    pub percent: u32,
    pub answered: usize,
    pub total: usize,
    pub timed_out: bool,
}

impl ResultVm {
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "You scored {} out of {} ({}%)",
            self.score, self.max_score, self.percent
        )
    }

    #[must_use]
    pub fn headline(&self) -> &'static str {
        match self.percent {
            100 => "Perfect score!",
            50..=99 => "Well done.",
            _ => "Keep practicing.",
        }
    }

    #[must_use]
    pub fn unanswered(&self) -> usize {
        self.total.saturating_sub(self.answered)
    }
}

#[must_use]
pub fn map_result(state: &SessionState) -> ResultVm {
    ResultVm {
        score: state.score(),
        max_score: state.max_score(),
        percent: state.score_percent(),
        answered: state.answered_count(),
        total: state.num_questions(),
        timed_out: state.seconds_remaining() == Some(0),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewMarker {
    pub index: usize,
    pub label: String,
    pub outcome: AnswerOutcome,
    pub is_current: bool,
}

impl ReviewMarker {
    #[must_use]
    pub fn class(&self) -> String {
        let current = if self.is_current { " marker--current" } else { "" };
        format!("marker marker--{}{current}", self.outcome.css_modifier())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewVm {
    pub index: usize,
    pub total: usize,
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub your_answer: Option<String>,
    pub outcome: AnswerOutcome,
    pub can_previous: bool,
    pub can_next: bool,
    pub markers: Vec<ReviewMarker>,
}

impl ReviewVm {
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("Question {} of {}", self.index + 1, self.total)
    }

    #[must_use]
    pub fn answer_label(&self) -> String {
        self.your_answer
            .as_ref()
            .map_or_else(|| "Not answered".to_string(), |text| format!("Your answer: {text}"))
    }
}

/// `None` unless the session is reviewing.
#[must_use]
pub fn map_review(state: &SessionState) -> Option<ReviewVm> {
    if state.phase() != SessionPhase::Reviewing {
        return None;
    }
    let index = state.current_index();
    let question = state.current_question()?;
    let chosen = state.answer_for(index);
    let total = state.num_questions();

    let markers = (0..total)
        .map(|i| ReviewMarker {
            index: i,
            label: (i + 1).to_string(),
            outcome: AnswerOutcome::of(state.answer_for(i)),
            is_current: i == index,
        })
        .collect();

    Some(ReviewVm {
        index,
        total,
        prompt: question.prompt().to_string(),
        options: option_vms(question, chosen),
        your_answer: chosen.map(|answer| answer.text().to_string()),
        outcome: AnswerOutcome::of(chosen),
        can_previous: index > 0,
        can_next: index + 1 < total,
        markers,
    })
}
