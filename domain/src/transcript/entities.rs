//! Transcript entities: turns and the optional closing text

use crate::core::error::DomainError;
use crate::core::string::is_present;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One utterance in the debate (Entity)
///
/// Every field except `content` may be missing on the wire. Turns are never
/// mutated after they are received; the transcript is replaced wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    #[serde(default)]
    pub phase: Option<String>,
}

impl Turn {
    pub fn new(
        author_id: impl Into<String>,
        author_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            author_id: Some(author_id.into()),
            author_name: Some(author_name.into()),
            content: content.into(),
            phase: None,
        }
    }

    pub fn with_phase(mut self, phase: impl Into<String>) -> Self {
        self.phase = Some(phase.into());
        self
    }

    /// Display name, empty when absent
    pub fn author_name_or_empty(&self) -> &str {
        self.author_name.as_deref().unwrap_or("")
    }
}

/// Optional trailing text (summary or consensus)
///
/// Absent and empty are the same thing: no closing block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClosingText(String);

impl ClosingText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Present iff non-empty. Whitespace-only text is present.
    pub fn is_present(&self) -> bool {
        is_present(&self.0)
    }
}

impl From<Option<String>> for ClosingText {
    fn from(value: Option<String>) -> Self {
        Self(value.unwrap_or_default())
    }
}

/// Which kind of closing text a deployment produces (Value Object)
///
/// Determines both the wire field the text is read from and the block title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClosingKind {
    /// `summary` field, written by the Summariser
    #[default]
    Summary,
    /// `arbitration` field, written by the Arbitrator
    Consensus,
}

impl ClosingKind {
    /// Title of the rendered block
    pub fn title(&self) -> &'static str {
        match self {
            ClosingKind::Summary => "Summary",
            ClosingKind::Consensus => "⚖️ Final Consensus",
        }
    }
}

impl fmt::Display for ClosingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClosingKind::Summary => write!(f, "summary"),
            ClosingKind::Consensus => write!(f, "consensus"),
        }
    }
}

impl std::str::FromStr for ClosingKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summary" => Ok(ClosingKind::Summary),
            "consensus" | "arbitration" => Ok(ClosingKind::Consensus),
            _ => Err(DomainError::InvalidClosingKind(s.to_string())),
        }
    }
}

/// A complete debate result: ordered turns plus closing text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateTranscript {
    pub turns: Vec<Turn>,
    pub closing: ClosingText,
}

impl DebateTranscript {
    pub fn new(turns: Vec<Turn>, closing: ClosingText) -> Self {
        Self { turns, closing }
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_deserialize_full() {
        let json = r#"{"author_id":"napoleon","author_name":"Napoleon","content":"Hello.","phase":"opening","round_index":0}"#;
        let turn: Turn = serde_json::from_str(json).unwrap();
        assert_eq!(turn.author_id.as_deref(), Some("napoleon"));
        assert_eq!(turn.author_name_or_empty(), "Napoleon");
        assert_eq!(turn.content, "Hello.");
        assert_eq!(turn.phase.as_deref(), Some("opening"));
    }

    #[test]
    fn test_turn_deserialize_sparse() {
        let turn: Turn = serde_json::from_str(r#"{"content": null}"#).unwrap();
        assert_eq!(turn, Turn::default());
        assert_eq!(turn.author_name_or_empty(), "");
    }

    #[test]
    fn test_closing_text_presence() {
        assert!(!ClosingText::empty().is_present());
        assert!(!ClosingText::from(None).is_present());
        assert!(ClosingText::new("  ").is_present());
        assert!(ClosingText::from(Some("Done.".to_string())).is_present());
    }

    #[test]
    fn test_closing_kind_parse_and_title() {
        assert_eq!("summary".parse::<ClosingKind>().unwrap(), ClosingKind::Summary);
        assert_eq!("Consensus".parse::<ClosingKind>().unwrap(), ClosingKind::Consensus);
        assert_eq!("arbitration".parse::<ClosingKind>().unwrap(), ClosingKind::Consensus);
        assert!("verdict".parse::<ClosingKind>().is_err());

        assert_eq!(ClosingKind::Consensus.title(), "⚖️ Final Consensus");
    }
}
