use std::sync::Arc;

use async_trait::async_trait;
use quiz_core::model::Question;
use storage::repository::QuestionRepository;

use super::QuestionProvider;
use crate::error::ProviderError;

/// Draws a random selection from a stored question bank.
#[derive(Clone)]
pub struct BankQuestionProvider {
    questions: Arc<dyn QuestionRepository>,
}

impl BankQuestionProvider {
    #[must_use]
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }
}

#[async_trait]
impl QuestionProvider for BankQuestionProvider {
    async fn fetch_questions(&self, count: u32) -> Result<Vec<Question>, ProviderError> {
        if count == 0 {
            return Err(ProviderError::ZeroCount);
        }
        let available = self.questions.count_questions().await?;
        if available < count {
            return Err(ProviderError::NotEnoughQuestions {
                requested: count,
                available,
            });
        }

        let questions = self.questions.sample_questions(count).await?;
        if questions.len() != usize::try_from(count).unwrap_or(usize::MAX) {
            return Err(ProviderError::CountMismatch {
                requested: count,
                received: questions.len(),
            });
        }
        Ok(questions)
    }
}
