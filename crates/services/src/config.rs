use std::env;

use crate::providers::DEFAULT_SOURCE_URL;

/// Where questions come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProviderSource {
    /// Remote JSON endpoint serving `/questions/{count}`.
    Http { base_url: String },
    /// Local `SQLite` question bank.
    Bank { db_url: String },
}

/// Provider selection resolved from the environment, then CLI overrides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderConfig {
    pub source: ProviderSource,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            source: ProviderSource::Http {
                base_url: DEFAULT_SOURCE_URL.to_string(),
            },
        }
    }
}

impl ProviderConfig {
    /// Reads `QUIZ_DB_URL` and `QUIZ_SOURCE_URL`. A bank URL wins over the HTTP source.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(db_url) = non_empty("QUIZ_DB_URL") {
            return Self {
                source: ProviderSource::Bank { db_url },
            };
        }
        let base_url = non_empty("QUIZ_SOURCE_URL").unwrap_or_else(|| DEFAULT_SOURCE_URL.into());
        Self {
            source: ProviderSource::Http { base_url },
        }
    }

    #[must_use]
    pub fn with_source_url(mut self, base_url: impl Into<String>) -> Self {
        self.source = ProviderSource::Http {
            base_url: base_url.into(),
        };
        self
    }

    #[must_use]
    pub fn with_bank(mut self, db_url: impl Into<String>) -> Self {
        self.source = ProviderSource::Bank {
            db_url: db_url.into(),
        };
        self
    }
}
