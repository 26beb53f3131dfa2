mod question;
mod quiz;
mod results;
mod review;
mod start;
mod status;

pub use question::QuestionScreen;
pub use quiz::QuizView;
pub use results::ResultsScreen;
pub use review::ReviewScreen;
pub use start::StartScreen;
pub use status::{ErrorPanel, Loader};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
