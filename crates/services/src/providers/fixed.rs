use async_trait::async_trait;
use quiz_core::model::Question;

use super::QuestionProvider;
use crate::error::ProviderError;

/// Serves the first `count` questions of a fixed list.
#[derive(Debug, Clone, Default)]
pub struct StaticQuestionProvider {
    questions: Vec<Question>,
}

impl StaticQuestionProvider {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[async_trait]
impl QuestionProvider for StaticQuestionProvider {
    async fn fetch_questions(&self, count: u32) -> Result<Vec<Question>, ProviderError> {
        if count == 0 {
            return Err(ProviderError::ZeroCount);
        }
        let wanted = usize::try_from(count).unwrap_or(usize::MAX);
        if wanted > self.questions.len() {
            return Err(ProviderError::NotEnoughQuestions {
                requested: count,
                available: u32::try_from(self.questions.len()).unwrap_or(u32::MAX),
            });
        }
        Ok(self.questions[..wanted].to_vec())
    }
}
