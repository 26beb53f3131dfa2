use std::sync::Arc;

use storage::repository::Storage;

use crate::config::{ProviderConfig, ProviderSource};
use crate::error::AppServicesError;
use crate::providers::{BankQuestionProvider, HttpQuestionProvider, QuestionProvider};

/// Assembles app-facing services from a resolved configuration.
#[derive(Clone)]
pub struct AppServices {
    provider: Arc<dyn QuestionProvider>,
    source_label: String,
}

impl AppServices {
    /// Build the question provider selected by `config`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the bank cannot be opened or the source URL is blank.
    pub async fn from_config(config: &ProviderConfig) -> Result<Self, AppServicesError> {
        match &config.source {
            ProviderSource::Http { base_url } => {
                if base_url.trim().is_empty() {
                    return Err(AppServicesError::EmptySourceUrl);
                }
                tracing::info!(%base_url, "using remote question source");
                Ok(Self::new(
                    Arc::new(HttpQuestionProvider::new(base_url.clone())),
                    base_url.clone(),
                ))
            }
            ProviderSource::Bank { db_url } => {
                let storage = Storage::sqlite(db_url).await?;
                let available = storage.questions.count_questions().await?;
                tracing::info!(%db_url, available, "using local question bank");
                Ok(Self::new(
                    Arc::new(BankQuestionProvider::new(storage.questions)),
                    db_url.clone(),
                ))
            }
        }
    }

    #[must_use]
    pub fn new(provider: Arc<dyn QuestionProvider>, source_label: impl Into<String>) -> Self {
        Self {
            provider,
            source_label: source_label.into(),
        }
    }

    #[must_use]
    pub fn provider(&self) -> Arc<dyn QuestionProvider> {
        Arc::clone(&self.provider)
    }

    /// Human readable description of where questions come from.
    #[must_use]
    pub fn source_label(&self) -> &str {
        &self.source_label
    }
}
