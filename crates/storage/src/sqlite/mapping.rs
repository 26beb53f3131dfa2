use quiz_core::model::QuestionId;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::repository::StorageError;

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn question_id_from_i64(v: i64) -> Result<QuestionId, StorageError> {
    u64::try_from(v)
        .map(QuestionId::new)
        .map_err(|_| StorageError::Serialization("question_id sign overflow".into()))
}

pub(crate) fn question_id_to_i64(id: QuestionId) -> Result<i64, StorageError> {
    i64::try_from(id.value()).map_err(|_| StorageError::Serialization("question_id overflow".into()))
}

pub(crate) fn map_option_row(row: &SqliteRow) -> Result<(String, bool), StorageError> {
    let text: String = row.try_get("text").map_err(ser)?;
    let is_correct: i64 = row.try_get("is_correct").map_err(ser)?;
    match is_correct {
        0 => Ok((text, false)),
        1 => Ok((text, true)),
        other => Err(StorageError::Serialization(format!(
            "invalid is_correct value: {other}"
        ))),
    }
}
