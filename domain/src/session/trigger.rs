//! Trigger policy: when a debate run starts.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// When the session controller issues its run
///
/// - **AutoStart** (default): once per mount, without user action.
///   Placeholder greetings are shown while waiting.
/// - **Manual**: only when the user asks for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerPolicy {
    #[default]
    #[serde(rename = "auto", alias = "autostart", alias = "auto_start")]
    AutoStart,
    Manual,
}

impl TriggerPolicy {
    pub fn is_auto(&self) -> bool {
        matches!(self, TriggerPolicy::AutoStart)
    }
}

impl fmt::Display for TriggerPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriggerPolicy::AutoStart => write!(f, "auto"),
            TriggerPolicy::Manual => write!(f, "manual"),
        }
    }
}

impl std::str::FromStr for TriggerPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" | "autostart" | "auto_start" => Ok(TriggerPolicy::AutoStart),
            "manual" => Ok(TriggerPolicy::Manual),
            _ => Err(DomainError::InvalidTriggerPolicy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_auto() {
        assert_eq!(TriggerPolicy::default(), TriggerPolicy::AutoStart);
        assert!(TriggerPolicy::default().is_auto());
    }

    #[test]
    fn test_parse() {
        assert_eq!("auto".parse::<TriggerPolicy>().unwrap(), TriggerPolicy::AutoStart);
        assert_eq!("MANUAL".parse::<TriggerPolicy>().unwrap(), TriggerPolicy::Manual);
        assert!("sometimes".parse::<TriggerPolicy>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&TriggerPolicy::Manual).unwrap(), "\"manual\"");
        let policy: TriggerPolicy = serde_json::from_str("\"autostart\"").unwrap();
        assert_eq!(policy, TriggerPolicy::AutoStart);
    }
}
