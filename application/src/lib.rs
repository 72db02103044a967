//! Application layer for simulacra-debate
//!
//! This crate contains the session controller, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SessionConfig;
pub use ports::{
    debate_gateway::{DebateGateway, GatewayError, RunRequest},
    session_observer::{NoObserver, SessionObserver},
};
pub use use_cases::failure_message::{FALLBACK_MESSAGE, failure_message, status_message};
pub use use_cases::session_controller::{RunCompletion, RunId, SessionController, StartOutcome};
