//! Loading a question bank from a JSON file in the provider wire shape.

use std::path::Path;

use quiz_core::model::{Question, QuestionError, WireQuestion};
use thiserror::Error;

use crate::repository::{QuestionRepository, StorageError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ImportError {
    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid question bank JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("question {id} is invalid: {source}")]
    InvalidQuestion { id: u64, source: QuestionError },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Parse a JSON array of wire questions into validated domain questions.
///
/// # Errors
///
/// Returns `ImportError::Json` for malformed JSON and
/// `ImportError::InvalidQuestion` for the first question failing validation.
pub fn parse_bank(json: &str) -> Result<Vec<Question>, ImportError> {
    let wire: Vec<WireQuestion> = serde_json::from_str(json)?;
    wire.into_iter()
        .map(|w| {
            let id = w.id;
            Question::try_from(w).map_err(|source| ImportError::InvalidQuestion { id, source })
        })
        .collect()
}

/// Read and parse a bank file.
///
/// # Errors
///
/// Returns `ImportError::Read` if the file cannot be read, otherwise see [`parse_bank`].
pub fn read_bank_file(path: &Path) -> Result<Vec<Question>, ImportError> {
    let json = std::fs::read_to_string(path).map_err(|source| ImportError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_bank(&json)
}

/// Upsert every question into `repo`, returning how many were written.
///
/// # Errors
///
/// Returns `ImportError::Storage` on the first failed write.
pub async fn import_questions(
    repo: &dyn QuestionRepository,
    questions: &[Question],
) -> Result<usize, ImportError> {
    for question in questions {
        repo.upsert_question(question).await?;
    }
    tracing::info!(count = questions.len(), "imported questions into bank");
    Ok(questions.len())
}
