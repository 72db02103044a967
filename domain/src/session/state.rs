//! Session state machine: the lifecycle of one debate run.

use crate::transcript::DebateTranscript;
use serde::{Deserialize, Serialize};
use std::fmt;

/// State of the debate session
///
/// Exactly one variant holds at a time. `Running` carries nothing, so a
/// stale transcript or error cannot survive into a new run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No request issued yet
    #[default]
    Idle,
    /// A request is in flight
    Running,
    /// The run finished; holds the transcript it produced
    Succeeded(DebateTranscript),
    /// The run failed; holds the user-facing message
    Failed(String),
}

impl SessionState {
    pub fn phase(&self) -> SessionPhase {
        match self {
            SessionState::Idle => SessionPhase::Idle,
            SessionState::Running => SessionPhase::Running,
            SessionState::Succeeded(_) => SessionPhase::Succeeded,
            SessionState::Failed(_) => SessionPhase::Failed,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, SessionState::Running)
    }

    pub fn transcript(&self) -> Option<&DebateTranscript> {
        match self {
            SessionState::Succeeded(transcript) => Some(transcript),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SessionState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Discriminant of [`SessionState`], used for transition reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    Idle,
    Running,
    Succeeded,
    Failed,
}

impl SessionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::Idle => "idle",
            SessionPhase::Running => "running",
            SessionPhase::Succeeded => "succeeded",
            SessionPhase::Failed => "failed",
        }
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
