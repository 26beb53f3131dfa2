#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod error;
pub mod providers;
pub mod sessions;

pub use app_services::AppServices;
pub use config::{ProviderConfig, ProviderSource};
pub use error::{AppServicesError, ProviderError};
pub use providers::{
    BankQuestionProvider, HttpQuestionProvider, QuestionProvider, StaticQuestionProvider,
};
pub use sessions::{DEFAULT_TICK_INTERVAL, QuizSession, SessionHandle};
