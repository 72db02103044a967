//! API configuration from TOML (`[api]` section)

use serde::{Deserialize, Serialize};

/// Default whole-request timeout; a full debate takes a minute or more
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Raw API configuration from TOML
///
/// # Example
///
/// ```toml
/// [api]
/// base_url = "http://127.0.0.1:8000"
/// timeout_secs = 300
/// max_exchange_rounds = 4
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Base URL of the debate service (empty: default local origin)
    pub base_url: String,
    /// Whole-request timeout in seconds (0 disables the timeout)
    pub timeout_secs: u64,
    /// Cap on exchange rounds forwarded to the service
    pub max_exchange_rounds: Option<u32>,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_exchange_rounds: None,
        }
    }
}

impl FileApiConfig {
    /// Timeout as a duration, `None` when disabled
    pub fn timeout(&self) -> Option<std::time::Duration> {
        (self.timeout_secs > 0).then(|| std::time::Duration::from_secs(self.timeout_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout() {
        assert_eq!(
            FileApiConfig::default().timeout(),
            Some(std::time::Duration::from_secs(300))
        );
        let disabled = FileApiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(disabled.timeout(), None);
    }
}
