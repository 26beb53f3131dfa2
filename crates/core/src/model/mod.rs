mod ids;
mod question;
pub mod wire;

pub use ids::QuestionId;
pub use question::{AnswerOption, Question, QuestionError};
pub use wire::{WireAnswer, WireQuestion};
