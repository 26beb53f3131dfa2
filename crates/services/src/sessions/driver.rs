use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use quiz_core::{SessionEvent, SessionState, apply};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::providers::QuestionProvider;

/// Period of the countdown tick source.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Queue entry. Effect events carry the epoch they were started in so late
/// deliveries from a previous phase can be dropped.
#[derive(Debug)]
enum Envelope {
    User(SessionEvent),
    Effect { epoch: u64, event: SessionEvent },
}

/// Cloneable sender the Presenter uses to push user events into a session.
#[derive(Clone)]
pub struct SessionHandle {
    tx: mpsc::UnboundedSender<Envelope>,
}

impl SessionHandle {
    /// Queue a user event. Returns `false` once the session has been dropped.
    pub fn send(&self, event: SessionEvent) -> bool {
        self.tx.send(Envelope::User(event)).is_ok()
    }
}

impl fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionHandle")
            .field("closed", &self.tx.is_closed())
            .finish()
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Runs one quiz session: a single serialized event queue feeding the pure
/// transition function, plus the retrieval and countdown effects that the
/// resulting phase calls for.
///
/// Effects are scoped to the phase that started them. Every phase change
/// (and every `Restart`) aborts running effects and invalidates anything they
/// already queued.
pub struct QuizSession {
    state: SessionState,
    provider: Arc<dyn QuestionProvider>,
    tick_interval: Duration,
    tx: mpsc::UnboundedSender<Envelope>,
    rx: mpsc::UnboundedReceiver<Envelope>,
    epoch: u64,
    fetch: Option<JoinHandle<()>>,
    ticker: Option<JoinHandle<()>>,
}

impl QuizSession {
    #[must_use]
    pub fn new(provider: Arc<dyn QuestionProvider>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: SessionState::new(),
            provider,
            tick_interval: DEFAULT_TICK_INTERVAL,
            tx,
            rx,
            epoch: 0,
            fetch: None,
            ticker: None,
        }
    }

    #[must_use]
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn handle(&self) -> SessionHandle {
        SessionHandle {
            tx: self.tx.clone(),
        }
    }

    /// Apply `event` immediately and start or stop effects for the new phase.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn dispatch(&mut self, event: SessionEvent) -> &SessionState {
        self.step(event);
        &self.state
    }

    /// Wait for the next queued event (user, retrieval or tick), apply it and
    /// return the new state.
    ///
    /// Stale effect events are discarded without being applied.
    pub async fn next(&mut self) -> Option<&SessionState> {
        let event = loop {
            match self.rx.recv().await? {
                Envelope::User(event) => break event,
                Envelope::Effect { epoch, event } if epoch == self.epoch => break event,
                Envelope::Effect { epoch, event } => {
                    debug!(
                        event = event.name(),
                        stale_epoch = epoch,
                        epoch = self.epoch,
                        "discarding stale session effect"
                    );
                }
            }
        };
        self.step(event);
        Some(&self.state)
    }

    fn step(&mut self, event: SessionEvent) {
        let name = event.name();
        let restart = matches!(event, SessionEvent::Restart);
        let before = self.state.phase();

        let state = std::mem::take(&mut self.state);
        self.state = apply(state, event);
        let after = self.state.phase();

        if before != after || restart {
            self.epoch += 1;
            self.cancel_effects();
            info!(from = %before, to = %after, event = name, "session phase changed");
        } else {
            debug!(phase = %after, event = name, "session event applied");
        }

        self.start_effects();
    }

    fn start_effects(&mut self) {
        if self.state.needs_questions() && self.fetch.is_none() {
            self.spawn_fetch();
        }
        if self.state.is_timer_running() && self.ticker.is_none() {
            self.spawn_ticker();
        }
    }

    fn spawn_fetch(&mut self) {
        let Some(count) = self.state.requested_count() else {
            return;
        };
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        let epoch = self.epoch;

        self.fetch = Some(tokio::spawn(async move {
            let event = match provider.fetch_questions(count).await {
                Ok(questions) => SessionEvent::QuestionsLoaded(questions),
                Err(err) => {
                    warn!(error = %err, count, "question retrieval failed");
                    SessionEvent::LoadFailed
                }
            };
            let _ = tx.send(Envelope::Effect { epoch, event });
        }));
    }

    fn spawn_ticker(&mut self) {
        let period = self.tick_interval;
        let tx = self.tx.clone();
        let epoch = self.epoch;

        self.ticker = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                let tick = Envelope::Effect {
                    epoch,
                    event: SessionEvent::TimerTick,
                };
                if tx.send(tick).is_err() {
                    break;
                }
            }
        }));
    }

    fn cancel_effects(&mut self) {
        if let Some(task) = self.fetch.take() {
            task.abort();
        }
        if let Some(task) = self.ticker.take() {
            task.abort();
        }
    }
}

impl Drop for QuizSession {
    fn drop(&mut self) {
        self.cancel_effects();
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("phase", &self.state.phase())
            .field("epoch", &self.epoch)
            .field("fetch_running", &self.fetch.is_some())
            .field("ticker_running", &self.ticker.is_some())
            .finish_non_exhaustive()
    }
}
