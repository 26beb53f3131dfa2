mod driver;

// Public API of the session subsystem.
pub use driver::{DEFAULT_TICK_INTERVAL, QuizSession, SessionHandle};
