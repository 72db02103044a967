//! Session observer port
//!
//! Defines the interface for watching session state transitions.

use simulacra_domain::SessionPhase;

/// Callback for session lifecycle events
///
/// Implementations live in the presentation layer (status flashes,
/// spinners) or in tests (transition recording).
pub trait SessionObserver: Send + Sync {
    /// Called after every state transition
    fn on_transition(&self, from: SessionPhase, to: SessionPhase);

    /// Called when `start()` is rejected because a run is in flight
    fn on_start_rejected(&self) {}

    /// Called when a completion arrives for a run that is no longer current
    fn on_stale_completion(&self, _run_id: u64) {}
}

/// No-op observer for when nobody is watching
pub struct NoObserver;

impl SessionObserver for NoObserver {
    fn on_transition(&self, _from: SessionPhase, _to: SessionPhase) {}
}
