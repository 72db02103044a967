//! Debate gateway port
//!
//! Defines the interface for talking to the debate-generation service.

use async_trait::async_trait;
use simulacra_domain::DebatePayload;
use thiserror::Error;

/// Errors that can occur during debate gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The service answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request could not be completed (connect, timeout, I/O)
    #[error("{0}")]
    Transport(String),

    /// A success response whose body could not be decoded
    #[error("{0}")]
    Decode(String),
}

impl GatewayError {
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }
}

/// Parameters of one debate run
///
/// The service needs no body; the round cap is forwarded verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunRequest {
    pub max_exchange_rounds: Option<u32>,
}

/// Gateway to the debate service
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait DebateGateway: Send + Sync {
    /// Run a full debate and return the service's payload
    async fn run_debate(&self, request: &RunRequest) -> Result<DebatePayload, GatewayError>;

    /// Liveness probe; returns the reported status string
    async fn health(&self) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            GatewayError::status(503, "unavailable").to_string(),
            "HTTP 503: unavailable"
        );
        assert_eq!(
            GatewayError::Transport("connection refused".to_string()).to_string(),
            "connection refused"
        );
    }
}
