//! Session controller: owns the debate run lifecycle.
//!
//! ```text
//!            start()                 Ok(payload)
//!   Idle ──────────────> Running ─────────────────> Succeeded(transcript)
//!    ▲                      │  ▲        Err(e)
//!    │                      │  └──────── start() ── Failed(message)
//!    └── (initial)          └──────────────────────> Failed(message)
//! ```
//!
//! The controller is the only writer of [`SessionState`]. It runs inside a
//! single event loop: [`SessionController::start`] spawns the gateway call
//! and the loop feeds the resulting [`RunCompletion`] back through
//! [`SessionController::complete`]. [`SessionController::run`] is the
//! inline variant for callers that simply await the outcome.

use crate::config::SessionConfig;
use crate::ports::debate_gateway::{DebateGateway, GatewayError, RunRequest};
use crate::ports::session_observer::{NoObserver, SessionObserver};
use crate::use_cases::failure_message::failure_message;
use simulacra_domain::{DebatePayload, SessionState, TriggerPolicy};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Identifier of one `start()` invocation
pub type RunId = u64;

/// Result of a spawned run, delivered back to the event loop
#[derive(Debug)]
pub struct RunCompletion {
    pub run_id: RunId,
    pub result: Result<DebatePayload, GatewayError>,
}

/// What a call to `start()` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// A new run was issued
    Started(RunId),
    /// A run was already in flight; nothing was issued
    AlreadyRunning,
}

/// Drives the `Idle → Running → Succeeded | Failed` state machine
pub struct SessionController<G: DebateGateway + 'static> {
    gateway: Arc<G>,
    config: SessionConfig,
    observer: Arc<dyn SessionObserver>,
    state: SessionState,
    in_flight: Option<RunId>,
    next_run_id: RunId,
    mounted: bool,
    completion_tx: mpsc::UnboundedSender<RunCompletion>,
}

impl<G: DebateGateway + 'static> SessionController<G> {
    /// Create a controller plus the receiver its spawned runs report to.
    pub fn new(
        gateway: Arc<G>,
        config: SessionConfig,
    ) -> (Self, mpsc::UnboundedReceiver<RunCompletion>) {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        let controller = Self {
            gateway,
            config,
            observer: Arc::new(NoObserver),
            state: SessionState::Idle,
            in_flight: None,
            next_run_id: 1,
            mounted: false,
            completion_tx,
        };
        (controller, completion_rx)
    }

    pub fn with_observer(mut self, observer: Arc<dyn SessionObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn trigger(&self) -> TriggerPolicy {
        self.config.trigger
    }

    /// Signal that the view came up.
    ///
    /// Under [`TriggerPolicy::AutoStart`] the first call starts a run;
    /// later calls and manual mode do nothing.
    pub fn mount(&mut self) -> Option<StartOutcome> {
        if self.mounted {
            return None;
        }
        self.mounted = true;

        match self.config.trigger {
            TriggerPolicy::AutoStart => {
                info!("Auto-starting debate on mount");
                Some(self.start())
            }
            TriggerPolicy::Manual => None,
        }
    }

    /// Issue a run in the background.
    ///
    /// No-op while a run is in flight. Must be called from within a tokio
    /// runtime; the outcome arrives on the completion receiver.
    pub fn start(&mut self) -> StartOutcome {
        let Some(run_id) = self.begin() else {
            return StartOutcome::AlreadyRunning;
        };

        let gateway = Arc::clone(&self.gateway);
        let request = self.request();
        let completion_tx = self.completion_tx.clone();

        tokio::spawn(async move {
            let result = gateway.run_debate(&request).await;
            // Receiver gone means the view shut down; the result is dropped
            if completion_tx.send(RunCompletion { run_id, result }).is_err() {
                debug!("Run {} completed after the session closed", run_id);
            }
        });

        StartOutcome::Started(run_id)
    }

    /// Issue a run and wait for its outcome.
    ///
    /// Returns the resulting state. If a spawned run is already in flight,
    /// nothing is issued and the current (`Running`) state is returned.
    pub async fn run(&mut self) -> &SessionState {
        let Some(run_id) = self.begin() else {
            return &self.state;
        };

        let result = self.gateway.run_debate(&self.request()).await;
        self.finish(run_id, result);
        &self.state
    }

    /// Apply a completion produced by [`start`](Self::start).
    ///
    /// Returns `false` (and leaves state untouched) for completions that do
    /// not belong to the in-flight run.
    pub fn complete(&mut self, completion: RunCompletion) -> bool {
        self.finish(completion.run_id, completion.result)
    }

    fn request(&self) -> RunRequest {
        RunRequest {
            max_exchange_rounds: self.config.max_exchange_rounds,
        }
    }

    fn begin(&mut self) -> Option<RunId> {
        if self.state.is_running() {
            debug!("Debate already running; start ignored");
            self.observer.on_start_rejected();
            return None;
        }

        let run_id = self.next_run_id;
        self.next_run_id += 1;
        self.in_flight = Some(run_id);

        info!("Starting debate run {}", run_id);
        self.transition(SessionState::Running);
        Some(run_id)
    }

    fn finish(&mut self, run_id: RunId, result: Result<DebatePayload, GatewayError>) -> bool {
        if self.in_flight != Some(run_id) {
            warn!("Ignoring completion for stale run {}", run_id);
            self.observer.on_stale_completion(run_id);
            return false;
        }
        self.in_flight = None;

        let next = match result {
            Ok(payload) => {
                let transcript = payload.into_transcript(self.config.closing);
                info!(
                    "Debate run {} succeeded with {} turns",
                    run_id,
                    transcript.len()
                );
                SessionState::Succeeded(transcript)
            }
            Err(e) => {
                let message = failure_message(&e);
                warn!("Debate run {} failed: {}", run_id, message);
                SessionState::Failed(message)
            }
        };

        self.transition(next);
        true
    }

    fn transition(&mut self, next: SessionState) {
        let from = self.state.phase();
        self.state = next;
        let to = self.state.phase();
        debug!("Session transition: {} -> {}", from, to);
        self.observer.on_transition(from, to);
    }
}
