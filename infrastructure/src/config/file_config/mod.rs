//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod api;
mod output;
mod session;

pub use api::{DEFAULT_TIMEOUT_SECS, FileApiConfig};
pub use output::FileOutputConfig;
pub use session::FileSessionConfig;

use serde::{Deserialize, Serialize};
use simulacra_domain::DomainError;
use std::fmt;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Debate service endpoint settings
    pub api: FileApiConfig,
    /// Session trigger and closing-text settings
    pub session: FileSessionConfig,
    /// Console output settings
    pub output: FileOutputConfig,
}

/// A non-fatal problem found in the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub field: String,
    pub value: String,
    pub message: String,
}

impl ConfigIssue {
    pub fn invalid_value(field: &str, value: &str, error: DomainError) -> Self {
        Self {
            field: field.to_string(),
            value: value.to_string(),
            message: format!("{}: {}, falling back to default", field, error),
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.session.parse_trigger().1);
        issues.extend(self.session.parse_closing().1);

        if self.api.max_exchange_rounds == Some(0) {
            issues.push(ConfigIssue {
                field: "api.max_exchange_rounds".to_string(),
                value: "0".to_string(),
                message: "api.max_exchange_rounds: must be at least 1, ignoring".to_string(),
            });
        }

        issues
    }

    /// Round cap with invalid values (0) dropped
    pub fn max_exchange_rounds(&self) -> Option<u32> {
        self.api.max_exchange_rounds.filter(|&rounds| rounds > 0)
    }
}
