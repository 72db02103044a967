//! Session configuration from TOML (`[session]` section)

use super::ConfigIssue;
use serde::{Deserialize, Serialize};
use simulacra_domain::{ClosingKind, TriggerPolicy};

/// Raw session configuration from TOML
///
/// Values are kept as strings so a typo degrades to a warning instead of
/// refusing to start.
///
/// # Example
///
/// ```toml
/// [session]
/// trigger = "manual"     # "auto" | "manual"
/// closing = "consensus"  # "summary" | "consensus"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    pub trigger: String,
    pub closing: String,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            trigger: TriggerPolicy::default().to_string(),
            closing: ClosingKind::default().to_string(),
        }
    }
}

impl FileSessionConfig {
    /// Parse the trigger policy, falling back to the default on error
    pub fn parse_trigger(&self) -> (TriggerPolicy, Option<ConfigIssue>) {
        match self.trigger.parse() {
            Ok(policy) => (policy, None),
            Err(e) => (
                TriggerPolicy::default(),
                Some(ConfigIssue::invalid_value("session.trigger", &self.trigger, e)),
            ),
        }
    }

    /// Parse the closing kind, falling back to the default on error
    pub fn parse_closing(&self) -> (ClosingKind, Option<ConfigIssue>) {
        match self.closing.parse() {
            Ok(kind) => (kind, None),
            Err(e) => (
                ClosingKind::default(),
                Some(ConfigIssue::invalid_value("session.closing", &self.closing, e)),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse_cleanly() {
        let config = FileSessionConfig::default();
        assert_eq!(config.parse_trigger(), (TriggerPolicy::AutoStart, None));
        assert_eq!(config.parse_closing(), (ClosingKind::Summary, None));
    }

    #[test]
    fn test_invalid_values_fall_back_with_issue() {
        let config = FileSessionConfig {
            trigger: "eventually".to_string(),
            closing: "verdict".to_string(),
        };

        let (policy, issue) = config.parse_trigger();
        assert_eq!(policy, TriggerPolicy::AutoStart);
        assert_eq!(issue.unwrap().field, "session.trigger");

        let (kind, issue) = config.parse_closing();
        assert_eq!(kind, ClosingKind::Summary);
        assert_eq!(issue.unwrap().value, "verdict");
    }
}
