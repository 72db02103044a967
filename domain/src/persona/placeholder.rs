//! Static greeting turns shown before the real transcript arrives.

use super::PersonaId;
use crate::transcript::Turn;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Vec<Turn>> = LazyLock::new(|| {
    PersonaId::DEBATERS
        .into_iter()
        .map(|persona| Turn {
            author_id: Some(persona.as_str().to_string()),
            author_name: Some(persona.display_name().to_string()),
            content: greeting(persona).to_string(),
            phase: Some("greeting".to_string()),
        })
        .collect()
});

fn greeting(persona: PersonaId) -> &'static str {
    match persona {
        PersonaId::Napoleon => {
            "Hi, I am Napoleon Bonaparte. One kingdom leaves no room for wars between kingdoms."
        }
        PersonaId::Gandhi => {
            "Hi, I am Mahatma Gandhi. Peace begins with expecting less and harming no one."
        }
        PersonaId::Alexander => {
            "Hi, I am Alexander the Great. Greatness belongs to those who dare to conquer."
        }
        PersonaId::Arbitrator | PersonaId::Summariser => "",
    }
}

/// The fixed placeholder transcript: one greeting per debater.
///
/// Display-only; never sent to or received from the server.
pub fn placeholder_transcript() -> &'static [Turn] {
    &PLACEHOLDER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_greeting_per_debater_in_order() {
        let turns = placeholder_transcript();
        assert_eq!(turns.len(), 3);

        let ids: Vec<_> = turns.iter().filter_map(|t| t.author_id.as_deref()).collect();
        assert_eq!(ids, vec!["napoleon", "gandhi", "alexander"]);
    }

    #[test]
    fn test_greetings_introduce_full_names() {
        for (turn, persona) in placeholder_transcript().iter().zip(PersonaId::DEBATERS) {
            assert!(turn.content.starts_with(&format!("Hi, I am {}", persona.full_name())));
            assert_eq!(turn.phase.as_deref(), Some("greeting"));
        }
    }

    #[test]
    fn test_placeholder_is_stable() {
        assert_eq!(placeholder_transcript(), placeholder_transcript());
    }
}
