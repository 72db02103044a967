//! Error types for the HTTP adapter

use thiserror::Error;

/// Result type alias for HTTP adapter setup
pub type Result<T> = std::result::Result<T, HttpError>;

/// Errors that can occur while setting up the HTTP gateway
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}
