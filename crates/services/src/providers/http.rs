use std::time::Duration;

use async_trait::async_trait;
use quiz_core::model::{Question, WireQuestion};
use reqwest::Client;

use super::QuestionProvider;
use crate::error::ProviderError;

pub const DEFAULT_SOURCE_URL: &str = "https://quiz-master-data.cyclic.cloud";

/// Upper bound for one retrieval, connect through body.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Fetches questions from `GET {base_url}/questions/{count}`.
#[derive(Clone, Debug)]
pub struct HttpQuestionProvider {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpQuestionProvider {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn questions_url(&self, count: u32) -> String {
        format!("{}/questions/{count}", self.base_url.trim_end_matches('/'))
    }
}

/// Decode a response body and hold it to the "exactly `count`" contract.
pub(crate) fn parse_questions(body: &str, count: u32) -> Result<Vec<Question>, ProviderError> {
    let wire: Vec<WireQuestion> = serde_json::from_str(body)?;
    if wire.len() != usize::try_from(count).unwrap_or(usize::MAX) {
        return Err(ProviderError::CountMismatch {
            requested: count,
            received: wire.len(),
        });
    }
    wire.into_iter()
        .map(|w| {
            let id = w.id;
            Question::try_from(w).map_err(|source| ProviderError::InvalidQuestion { id, source })
        })
        .collect()
}

#[async_trait]
impl QuestionProvider for HttpQuestionProvider {
    async fn fetch_questions(&self, count: u32) -> Result<Vec<Question>, ProviderError> {
        if count == 0 {
            return Err(ProviderError::ZeroCount);
        }

        let url = self.questions_url(count);
        tracing::debug!(%url, "fetching questions");
        let response = self.client.get(url).timeout(self.timeout).send().await?;

        if !response.status().is_success() {
            return Err(ProviderError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        parse_questions(&body, count)
    }
}
