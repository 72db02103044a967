//! Session parameters: trigger policy and run request shaping.

use simulacra_domain::{ClosingKind, TriggerPolicy};

/// Static parameters of the session controller.
///
/// Resolved once at startup (file config + CLI flags) and injected into
/// [`SessionController`](crate::use_cases::session_controller::SessionController).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    /// When the run is issued
    pub trigger: TriggerPolicy,
    /// Which closing-text field the deployment fills in
    pub closing: ClosingKind,
    /// Optional cap on exchange rounds, passed through to the service
    pub max_exchange_rounds: Option<u32>,
}

impl SessionConfig {
    pub fn new(trigger: TriggerPolicy) -> Self {
        Self {
            trigger,
            ..Default::default()
        }
    }

    pub fn with_closing(mut self, closing: ClosingKind) -> Self {
        self.closing = closing;
        self
    }

    pub fn with_max_exchange_rounds(mut self, rounds: Option<u32>) -> Self {
        self.max_exchange_rounds = rounds;
        self
    }
}
