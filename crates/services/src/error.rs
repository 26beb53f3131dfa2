//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::QuestionError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by a `QuestionProvider`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProviderError {
    #[error("requested question count must be positive")]
    ZeroCount,
    #[error("question source returned status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("question source returned malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("question source returned {received} questions, expected {requested}")]
    CountMismatch { requested: u32, received: usize },
    #[error("question bank holds {available} questions, {requested} requested")]
    NotEnoughQuestions { requested: u32, available: u32 },
    #[error("question {id} is invalid: {source}")]
    InvalidQuestion { id: u64, source: QuestionError },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("question source url must not be empty")]
    EmptySourceUrl,
}
