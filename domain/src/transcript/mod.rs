//! Transcript subdomain: what the debate service returns.
//!
//! - [`entities`]: [`Turn`], [`ClosingText`], [`ClosingKind`], [`DebateTranscript`]
//! - [`payload`]: the optional-field wire schema ([`DebatePayload`])

pub mod entities;
pub mod payload;

pub use entities::{ClosingKind, ClosingText, DebateTranscript, Turn};
pub use payload::DebatePayload;
