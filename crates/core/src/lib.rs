#![forbid(unsafe_code)]

pub mod model;
pub mod session;
pub mod time;

pub use model::{AnswerOption, Question, QuestionError, QuestionId};
pub use session::{
    SECS_PER_QUESTION, SessionEvent, SessionPhase, SessionProgress, SessionState, apply,
};
