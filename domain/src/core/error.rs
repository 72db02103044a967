//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown persona: {0}")]
    UnknownPersona(String),

    #[error("Invalid trigger policy: {0} (expected 'auto' or 'manual')")]
    InvalidTriggerPolicy(String),

    #[error("Invalid closing kind: {0} (expected 'summary' or 'consensus')")]
    InvalidClosingKind(String),

    #[error("Invalid output format: {0} (expected 'text' or 'json')")]
    InvalidOutputFormat(String),
}
