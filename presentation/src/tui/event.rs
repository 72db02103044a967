//! TUI event types
//!
//! Events produced outside the key handler that the main loop applies to
//! [`TuiState`](super::state::TuiState).

use simulacra_domain::SessionPhase;

/// Events emitted by the session bridge for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// The session moved between phases
    Transition { from: SessionPhase, to: SessionPhase },
    /// A start request arrived while a run was in flight
    StartRejected,
    /// A completion for a superseded run was dropped
    StaleCompletion(u64),
}
