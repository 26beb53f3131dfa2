//! Quiz session state machine.
//!
//! `apply` is the only way a `SessionState` changes. Retrieval and timer
//! ticks are driven by the caller watching the resulting phase.

mod event;
mod progress;
mod state;
mod transition;

#[cfg(test)]
mod proptests;

pub use event::SessionEvent;
pub use progress::SessionProgress;
pub use state::{SessionPhase, SessionState};
pub use transition::apply;

/// Countdown budget granted per requested question.
pub const SECS_PER_QUESTION: u32 = 30;
