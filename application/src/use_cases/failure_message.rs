//! Failure normalization: every failed run becomes one user-facing string.
//!
//! Precedence for a non-success status:
//! 1. the body parsed as JSON with a truthy `detail` (stringified if not a string)
//! 2. the raw body text
//! 3. `HTTP <status>`
//!
//! Transport and decode failures use the error's own message, or
//! [`FALLBACK_MESSAGE`] when it is empty.

use crate::ports::debate_gateway::GatewayError;
use serde_json::Value;

/// Message used when a failure carries no text at all
pub const FALLBACK_MESSAGE: &str = "Failed to run debate";

/// Convert a gateway error into the message shown to the user
pub fn failure_message(error: &GatewayError) -> String {
    match error {
        GatewayError::Status { status, body } => status_message(*status, body),
        GatewayError::Transport(message) | GatewayError::Decode(message) => {
            if message.is_empty() {
                FALLBACK_MESSAGE.to_string()
            } else {
                message.clone()
            }
        }
    }
}

/// Extract the message for a non-success response
pub fn status_message(status: u16, body: &str) -> String {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| detail_of(&json))
        .unwrap_or_else(|| body.to_string());

    if message.is_empty() {
        format!("HTTP {}", status)
    } else {
        message
    }
}

/// `detail` field of a JSON object, if present and truthy
fn detail_of(json: &Value) -> Option<String> {
    let detail = json.get("detail")?;
    match detail {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
