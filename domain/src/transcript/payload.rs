//! Wire schema of a successful debate run.
//!
//! The server returns its whole debate state; only `messages` and the
//! closing-text field matter here. Every field is optional and `null` is
//! treated like absence:
//!
//! | field         | default |
//! |---------------|---------|
//! | `messages`    | `[]`    |
//! | `summary`     | `""`    |
//! | `arbitration` | `""`    |

use super::entities::{ClosingKind, ClosingText, DebateTranscript, Turn};
use serde::{Deserialize, Serialize};

/// Raw success payload (unknown fields are ignored)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebatePayload {
    #[serde(default)]
    pub messages: Option<Vec<Turn>>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub arbitration: Option<String>,
}

impl DebatePayload {
    /// Resolve defaults and pick the closing text for the given kind.
    pub fn into_transcript(self, kind: ClosingKind) -> DebateTranscript {
        let closing = match kind {
            ClosingKind::Summary => self.summary,
            ClosingKind::Consensus => self.arbitration,
        };
        DebateTranscript::new(self.messages.unwrap_or_default(), ClosingText::from(closing))
    }
}
