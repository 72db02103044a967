//! Persona registry: the fixed debate participants and their icons.
//!
//! The registry is a static lookup: author id → glyph. Anything the server
//! sends that is not a known persona renders with [`DEFAULT_ICON`].

mod placeholder;

pub use placeholder::placeholder_transcript;

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Icon used for turns whose author is missing or unknown.
pub const DEFAULT_ICON: &str = "💬";

/// Identifies each debate persona (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonaId {
    Napoleon,
    Gandhi,
    Alexander,
    Arbitrator,
    Summariser,
}

impl PersonaId {
    /// All personas known to the registry
    pub const ALL: [PersonaId; 5] = [
        PersonaId::Napoleon,
        PersonaId::Gandhi,
        PersonaId::Alexander,
        PersonaId::Arbitrator,
        PersonaId::Summariser,
    ];

    /// The three debaters (excludes the neutral roles)
    pub const DEBATERS: [PersonaId; 3] =
        [PersonaId::Napoleon, PersonaId::Gandhi, PersonaId::Alexander];

    /// Wire identifier, as sent in `author_id`
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonaId::Napoleon => "napoleon",
            PersonaId::Gandhi => "gandhi",
            PersonaId::Alexander => "alexander",
            PersonaId::Arbitrator => "arbitrator",
            PersonaId::Summariser => "summariser",
        }
    }

    /// Glyph shown next to this persona's turns
    pub fn icon(&self) -> &'static str {
        match self {
            PersonaId::Napoleon => "⚔️",
            PersonaId::Gandhi => "🕊️",
            PersonaId::Alexander => "👑",
            PersonaId::Arbitrator => "⚖️",
            PersonaId::Summariser => "📋",
        }
    }

    /// Short display name, as the server labels turns
    pub fn display_name(&self) -> &'static str {
        match self {
            PersonaId::Napoleon => "Napoleon",
            PersonaId::Gandhi => "Gandhi",
            PersonaId::Alexander => "Alexander",
            PersonaId::Arbitrator => "Arbitrator",
            PersonaId::Summariser => "Summariser",
        }
    }

    /// Full historical name, used in greetings
    pub fn full_name(&self) -> &'static str {
        match self {
            PersonaId::Napoleon => "Napoleon Bonaparte",
            PersonaId::Gandhi => "Mahatma Gandhi",
            PersonaId::Alexander => "Alexander the Great",
            PersonaId::Arbitrator => "the Arbitrator",
            PersonaId::Summariser => "the Summariser",
        }
    }
}

impl fmt::Display for PersonaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PersonaId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PersonaId::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| DomainError::UnknownPersona(s.to_string()))
    }
}

/// Resolve the icon for an author id, falling back to [`DEFAULT_ICON`].
///
/// Lookup is exact (case-sensitive), matching the wire identifiers.
pub fn icon_for(author_id: Option<&str>) -> &'static str {
    author_id
        .and_then(|id| id.parse::<PersonaId>().ok())
        .map(|p| p.icon())
        .unwrap_or(DEFAULT_ICON)
}
