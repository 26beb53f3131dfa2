#![forbid(unsafe_code)]

pub mod import;
pub mod repository;
pub mod sqlite;

pub use repository::{InMemoryRepository, QuestionRecord, QuestionRepository, Storage, StorageError};
