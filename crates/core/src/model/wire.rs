//! JSON shape served by question sources.
//!
//! `[{ "id": 1, "questionText": "...", "answerOptions": [{ "answerText": "...", "isCorrect": true }] }]`

use serde::{Deserialize, Serialize};

use crate::model::ids::QuestionId;
use crate::model::question::{AnswerOption, Question, QuestionError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireQuestion {
    pub id: u64,
    pub question_text: String,
    pub answer_options: Vec<WireAnswer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireAnswer {
    pub answer_text: String,
    pub is_correct: bool,
}

impl WireQuestion {
    #[must_use]
    pub fn from_question(question: &Question) -> Self {
        Self {
            id: question.id().value(),
            question_text: question.prompt().to_owned(),
            answer_options: question
                .options()
                .iter()
                .map(|o| WireAnswer {
                    answer_text: o.text().to_owned(),
                    is_correct: o.is_correct(),
                })
                .collect(),
        }
    }
}

impl TryFrom<WireQuestion> for Question {
    type Error = QuestionError;

    fn try_from(wire: WireQuestion) -> Result<Self, Self::Error> {
        let options = wire
            .answer_options
            .into_iter()
            .map(|a| AnswerOption::new(a.answer_text, a.is_correct))
            .collect();
        Question::new(QuestionId::new(wire.id), wire.question_text, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_into_validated_question() {
        let wire = WireQuestion {
            id: 3,
            question_text: "2 + 2?".into(),
            answer_options: vec![
                WireAnswer {
                    answer_text: "4".into(),
                    is_correct: true,
                },
                WireAnswer {
                    answer_text: "5".into(),
                    is_correct: false,
                },
            ],
        };
        let question = Question::try_from(wire.clone()).unwrap();
        assert_eq!(question.id(), QuestionId::new(3));
        assert_eq!(WireQuestion::from_question(&question), wire);
    }

    #[test]
    fn invalid_wire_question_is_rejected() {
        let wire = WireQuestion {
            id: 1,
            question_text: "Q".into(),
            answer_options: Vec::new(),
        };
        assert_eq!(Question::try_from(wire), Err(QuestionError::NoOptions));
    }
}
