//! Question retrieval collaborators.
//!
//! A provider turns a requested count into an ordered list of exactly that
//! many questions, or fails. One attempt per call; callers add their own
//! resilience if they want it.

mod bank;
mod fixed;
mod http;

use async_trait::async_trait;
use quiz_core::model::Question;

use crate::error::ProviderError;

pub use bank::BankQuestionProvider;
pub use fixed::StaticQuestionProvider;
pub use http::{DEFAULT_REQUEST_TIMEOUT, DEFAULT_SOURCE_URL, HttpQuestionProvider};

#[async_trait]
pub trait QuestionProvider: Send + Sync {
    /// Retrieve exactly `count` questions.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` when the source cannot produce `count` valid questions.
    async fn fetch_questions(&self, count: u32) -> Result<Vec<Question>, ProviderError>;
}
