use async_trait::async_trait;
use quiz_core::model::{AnswerOption, Question, QuestionError, QuestionId};
use rand::seq::SliceRandom;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted shape for a question and its ordered options.
///
/// This mirrors the domain `Question` so repositories can serialize/deserialize
/// without leaking storage concerns into the domain layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    pub id: QuestionId,
    pub prompt: String,
    pub options: Vec<(String, bool)>,
}

impl QuestionRecord {
    #[must_use]
    pub fn from_question(question: &Question) -> Self {
        Self {
            id: question.id(),
            prompt: question.prompt().to_owned(),
            options: question
                .options()
                .iter()
                .map(|o| (o.text().to_owned(), o.is_correct()))
                .collect(),
        }
    }

    /// Convert the record back into a domain `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the stored prompt or options fail validation.
    pub fn into_question(self) -> Result<Question, QuestionError> {
        let options = self
            .options
            .into_iter()
            .map(|(text, is_correct)| AnswerOption::new(text, is_correct))
            .collect();
        Question::new(self.id, self.prompt, options)
    }
}

/// Repository contract for the question bank.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Persist or replace a question and its options.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the question cannot be stored.
    async fn upsert_question(&self, question: &Question) -> Result<(), StorageError>;

    /// Fetch a question by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the lookup fails or the stored row is invalid.
    async fn get_question(&self, id: QuestionId) -> Result<Option<Question>, StorageError>;

    /// Number of questions in the bank.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the count cannot be read.
    async fn count_questions(&self) -> Result<u32, StorageError>;

    /// Random subset of at most `limit` questions, in random order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the bank cannot be read.
    async fn sample_questions(&self, limit: u32) -> Result<Vec<Question>, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    questions: Arc<Mutex<BTreeMap<QuestionId, Question>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository pre-filled with `questions`.
    #[must_use]
    pub fn with_questions(questions: impl IntoIterator<Item = Question>) -> Self {
        let map = questions.into_iter().map(|q| (q.id(), q)).collect();
        Self {
            questions: Arc::new(Mutex::new(map)),
        }
    }
}

#[async_trait]
impl QuestionRepository for InMemoryRepository {
    async fn upsert_question(&self, question: &Question) -> Result<(), StorageError> {
        let mut guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(question.id(), question.clone());
        Ok(())
    }

    async fn get_question(&self, id: QuestionId) -> Result<Option<Question>, StorageError> {
        let guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(&id).cloned())
    }

    async fn count_questions(&self) -> Result<u32, StorageError> {
        let guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        u32::try_from(guard.len()).map_err(|_| StorageError::Serialization("count overflow".into()))
    }

    async fn sample_questions(&self, limit: u32) -> Result<Vec<Question>, StorageError> {
        let mut all: Vec<Question> = {
            let guard = self
                .questions
                .lock()
                .map_err(|e| StorageError::Connection(e.to_string()))?;
            guard.values().cloned().collect()
        };
        all.shuffle(&mut rand::rng());
        all.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(all)
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let questions: Arc<dyn QuestionRepository> = Arc::new(InMemoryRepository::new());
        Self { questions }
    }
}
