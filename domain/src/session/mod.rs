//! Session subdomain: the run lifecycle.

pub mod state;
pub mod trigger;

pub use state::{SessionPhase, SessionState};
pub use trigger::TriggerPolicy;
