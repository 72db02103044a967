//! TUI session bridge: SessionObserver → TuiEvent channel
//!
//! Converts controller callbacks into TuiEvents. No println!, no
//! indicatif; everything goes through the channel for ratatui rendering.

use super::event::TuiEvent;
use simulacra_application::SessionObserver;
use simulacra_domain::SessionPhase;
use tokio::sync::mpsc;

/// Bridge from SessionObserver callbacks to the TuiEvent channel
pub struct TuiSessionBridge {
    tx: mpsc::UnboundedSender<TuiEvent>,
}

impl TuiSessionBridge {
    pub fn new(tx: mpsc::UnboundedSender<TuiEvent>) -> Self {
        Self { tx }
    }

    fn emit(&self, event: TuiEvent) {
        let _ = self.tx.send(event);
    }
}

impl SessionObserver for TuiSessionBridge {
    fn on_transition(&self, from: SessionPhase, to: SessionPhase) {
        self.emit(TuiEvent::Transition { from, to });
    }

    fn on_start_rejected(&self) {
        self.emit(TuiEvent::StartRejected);
    }

    fn on_stale_completion(&self, run_id: u64) {
        self.emit(TuiEvent::StaleCompletion(run_id));
    }
}
