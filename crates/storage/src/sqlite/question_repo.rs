use quiz_core::model::{Question, QuestionId};
use sqlx::Row;

use super::SqliteRepository;
use super::mapping::{map_option_row, question_id_from_i64, question_id_to_i64, ser};
use crate::repository::{QuestionRecord, QuestionRepository, StorageError};

fn conn<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

impl SqliteRepository {
    async fn load_record(&self, id: i64) -> Result<Option<QuestionRecord>, StorageError> {
        let row = sqlx::query("SELECT id, prompt FROM questions WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(conn)?;
        let Some(row) = row else {
            return Ok(None);
        };

        let prompt: String = row.try_get("prompt").map_err(ser)?;
        let option_rows = sqlx::query(
            r"
            SELECT text, is_correct
            FROM answer_options
            WHERE question_id = ?1
            ORDER BY position ASC
            ",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(conn)?;

        let mut options = Vec::with_capacity(option_rows.len());
        for row in &option_rows {
            options.push(map_option_row(row)?);
        }

        Ok(Some(QuestionRecord {
            id: question_id_from_i64(id)?,
            prompt,
            options,
        }))
    }
}

#[async_trait::async_trait]
impl QuestionRepository for SqliteRepository {
    async fn upsert_question(&self, question: &Question) -> Result<(), StorageError> {
        let record = QuestionRecord::from_question(question);
        let id = question_id_to_i64(record.id)?;

        let mut tx = self.pool.begin().await.map_err(conn)?;

        sqlx::query(
            r"
            INSERT INTO questions (id, prompt)
            VALUES (?1, ?2)
            ON CONFLICT(id) DO UPDATE SET
                prompt = excluded.prompt
            ",
        )
        .bind(id)
        .bind(&record.prompt)
        .execute(&mut *tx)
        .await
        .map_err(conn)?;

        sqlx::query("DELETE FROM answer_options WHERE question_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(conn)?;

        for (position, (text, is_correct)) in record.options.iter().enumerate() {
            let position = i64::try_from(position)
                .map_err(|_| StorageError::Serialization("position overflow".into()))?;
            sqlx::query(
                r"
                INSERT INTO answer_options (question_id, position, text, is_correct)
                VALUES (?1, ?2, ?3, ?4)
                ",
            )
            .bind(id)
            .bind(position)
            .bind(text)
            .bind(i64::from(*is_correct))
            .execute(&mut *tx)
            .await
            .map_err(conn)?;
        }

        tx.commit().await.map_err(conn)?;
        Ok(())
    }

    async fn get_question(&self, id: QuestionId) -> Result<Option<Question>, StorageError> {
        let record = self.load_record(question_id_to_i64(id)?).await?;
        record
            .map(|record| record.into_question().map_err(ser))
            .transpose()
    }

    async fn count_questions(&self) -> Result<u32, StorageError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM questions")
            .fetch_one(&self.pool)
            .await
            .map_err(conn)?;
        let total: i64 = row.try_get("total").map_err(ser)?;
        u32::try_from(total).map_err(|_| StorageError::Serialization("count overflow".into()))
    }

    async fn sample_questions(&self, limit: u32) -> Result<Vec<Question>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT id
            FROM questions
            ORDER BY RANDOM()
            LIMIT ?1
            ",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(conn)?;

        let mut questions = Vec::with_capacity(rows.len());
        for row in rows {
            let id: i64 = row.try_get("id").map_err(ser)?;
            // Deleted between the two queries.
            let Some(record) = self.load_record(id).await? else {
                continue;
            };
            questions.push(record.into_question().map_err(ser)?);
        }
        Ok(questions)
    }
}
