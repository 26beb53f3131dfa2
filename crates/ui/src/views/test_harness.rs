use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::Router;
use quiz_core::model::{AnswerOption, Question, QuestionId};
use services::{ProviderError, QuestionProvider, StaticQuestionProvider};

use super::quiz::QuizTestHandles;
use crate::context::{UiApp, build_app_context};
use crate::routes::Route;

struct TestApp {
    provider: Arc<dyn QuestionProvider>,
}

impl UiApp for TestApp {
    fn question_provider(&self) -> Arc<dyn QuestionProvider> {
        Arc::clone(&self.provider)
    }

    fn source_label(&self) -> String {
        "test bank".to_string()
    }
}

/// Provider whose every retrieval fails.
pub struct UnreachableProvider;

#[async_trait]
impl QuestionProvider for UnreachableProvider {
    async fn fetch_questions(&self, count: u32) -> Result<Vec<Question>, ProviderError> {
        Err(ProviderError::CountMismatch {
            requested: count,
            received: 0,
        })
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarnessRoot(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<Route> {} }
}

pub struct QuizHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl QuizHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        self.dom.process_events();
        self.dom.render_immediate(&mut NoOpMutations);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive the dom until `needle` shows up in the rendered html.
    pub async fn drive_until(&mut self, needle: &str) -> String {
        for _ in 0..40 {
            self.drive_async().await;
            let html = self.render();
            if html.contains(needle) {
                return html;
            }
        }
        let html = self.render();
        panic!("never rendered {needle:?} in {html}");
    }

    pub fn send(&self, event: quiz_core::SessionEvent) {
        self.handles.send(event);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn sample_questions(count: u64) -> Vec<Question> {
    (1..=count)
        .map(|id| {
            Question::new(
                QuestionId::new(id),
                format!("Sample question {id}?"),
                vec![
                    AnswerOption::new(format!("Right {id}"), true),
                    AnswerOption::new(format!("Wrong {id}"), false),
                ],
            )
            .expect("valid sample question")
        })
        .collect()
}

pub fn setup_quiz_harness(provider: Arc<dyn QuestionProvider>) -> QuizHarness {
    let handles = QuizTestHandles::default();
    let app = Arc::new(TestApp { provider });
    let dom = VirtualDom::new_with_props(
        QuizHarnessRoot,
        HarnessProps {
            app,
            handles: handles.clone(),
        },
    );
    let mut harness = QuizHarness { dom, handles };
    harness.rebuild();
    harness
}

pub fn setup_static_harness(count: u64) -> QuizHarness {
    setup_quiz_harness(Arc::new(StaticQuestionProvider::new(sample_questions(count))))
}
