//! Domain layer for simulacra-debate
//!
//! This crate contains the personas, the transcript model, the pure
//! renderers and the session state machine. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Turn**: one persona's utterance; a transcript is an ordered list of
//!   turns plus optional closing text (summary or consensus)
//! - **Persona**: a fixed named participant with a display icon
//! - **SessionState**: `Idle → Running → Succeeded | Failed`, one run at a time

pub mod config;
pub mod core;
pub mod persona;
pub mod render;
pub mod session;
pub mod transcript;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use persona::{DEFAULT_ICON, PersonaId, icon_for, placeholder_transcript};
pub use render::{ClosingBlock, RenderUnit, render_closing, render_transcript};
pub use session::{SessionPhase, SessionState, TriggerPolicy};
pub use transcript::{ClosingKind, ClosingText, DebatePayload, DebateTranscript, Turn};
