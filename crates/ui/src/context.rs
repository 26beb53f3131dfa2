use std::sync::Arc;

use services::QuestionProvider;

pub trait UiApp: Send + Sync {
    fn question_provider(&self) -> Arc<dyn QuestionProvider>;
    fn source_label(&self) -> String;
}

/// Collaborators handed to the views. Each mounted quiz builds its own
/// session from the provider; nothing here holds session state.
#[derive(Clone)]
pub struct AppContext {
    question_provider: Arc<dyn QuestionProvider>,
    source_label: String,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            question_provider: app.question_provider(),
            source_label: app.source_label(),
        }
    }

    #[must_use]
    pub fn question_provider(&self) -> Arc<dyn QuestionProvider> {
        Arc::clone(&self.question_provider)
    }

    #[must_use]
    pub fn source_label(&self) -> &str {
        &self.source_label
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
