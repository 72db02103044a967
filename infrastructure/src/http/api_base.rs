//! API base resolution
//!
//! The API base is resolved once at startup and injected into the gateway.
//! An empty value means "the default origin", i.e. a debate service running
//! locally on its default port.

use super::error::{HttpError, Result};
use reqwest::Url;
use std::fmt;

/// Origin used when no API base is configured
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Validated API base URL (Value Object)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase {
    base: String,
}

impl ApiBase {
    /// Resolve a configured value, falling back to [`DEFAULT_API_BASE`].
    pub fn resolve(raw: Option<&str>) -> Result<Self> {
        let trimmed = raw.map(str::trim).unwrap_or("");
        let candidate = if trimmed.is_empty() {
            DEFAULT_API_BASE
        } else {
            trimmed
        };

        let url = Url::parse(candidate).map_err(|e| HttpError::InvalidBaseUrl {
            url: candidate.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(HttpError::InvalidBaseUrl {
                url: candidate.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        Ok(Self {
            base: candidate.trim_end_matches('/').to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.base
    }

    /// Full URL of an endpoint below the base, keeping any base path prefix
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let joined = format!("{}/{}", self.base, path.trim_start_matches('/'));
        Url::parse(&joined).map_err(|e| HttpError::InvalidBaseUrl {
            url: joined,
            reason: e.to_string(),
        })
    }
}

impl Default for ApiBase {
    fn default() -> Self {
        Self {
            base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl fmt::Display for ApiBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)
    }
}
