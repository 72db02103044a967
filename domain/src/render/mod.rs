//! Transcript and closing-text rendering.
//!
//! Both renderers are pure: the same input always yields the same output,
//! and neither holds state between calls. Widgets and formatters in the
//! presentation layer consume the units produced here.

use crate::persona::icon_for;
use crate::transcript::{ClosingKind, ClosingText, Turn};
use serde::Serialize;

/// One rendered message, decorated with its persona icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderUnit {
    pub icon: &'static str,
    pub author_name: String,
    pub phase: Option<String>,
    pub content: String,
    pub author_id: Option<String>,
}

impl RenderUnit {
    fn from_turn(turn: &Turn) -> Self {
        Self {
            icon: icon_for(turn.author_id.as_deref()),
            author_name: turn.author_name_or_empty().to_string(),
            phase: turn.phase.clone(),
            content: turn.content.clone(),
            author_id: turn.author_id.clone(),
        }
    }
}

/// Map turns onto render units, one per turn, in input order.
///
/// No sorting, deduplication or filtering happens here.
pub fn render_transcript(turns: &[Turn]) -> Vec<RenderUnit> {
    turns.iter().map(RenderUnit::from_turn).collect()
}

/// The titled block appended after the last turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClosingBlock {
    pub title: &'static str,
    pub text: String,
}

/// Render the closing text, or nothing when it is empty.
///
/// Text is carried verbatim (no trimming, truncation or markup).
pub fn render_closing(closing: &ClosingText, kind: ClosingKind) -> Option<ClosingBlock> {
    closing.is_present().then(|| ClosingBlock {
        title: kind.title(),
        text: closing.as_str().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::DEFAULT_ICON;

    fn turn(id: Option<&str>, name: &str, content: &str) -> Turn {
        Turn {
            author_id: id.map(str::to_string),
            author_name: Some(name.to_string()),
            content: content.to_string(),
            phase: None,
        }
    }

    #[test]
    fn test_empty_transcript_renders_nothing() {
        assert!(render_transcript(&[]).is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let turns = vec![
            turn(Some("gandhi"), "Gandhi", "Peace."),
            turn(Some("alexander"), "Alexander", "Glory."),
            turn(Some("napoleon"), "Napoleon", "Opening."),
            turn(Some("gandhi"), "Gandhi", "Peace."),
        ];
        let units = render_transcript(&turns);

        let contents: Vec<_> = units.iter().map(|u| u.content.as_str()).collect();
        assert_eq!(contents, vec!["Peace.", "Glory.", "Opening.", "Peace."]);
        let ids: Vec<_> = units.iter().map(|u| u.author_id.as_deref()).collect();
        assert_eq!(
            ids,
            vec![Some("gandhi"), Some("alexander"), Some("napoleon"), Some("gandhi")]
        );
    }

    #[test]
    fn test_icons_and_fallback() {
        let turns = vec![
            turn(Some("napoleon"), "Napoleon", "a"),
            turn(Some("caesar"), "Caesar", "b"),
            turn(None, "Anonymous", "c"),
        ];
        let units = render_transcript(&turns);
        assert_eq!(units[0].icon, "⚔️");
        assert_eq!(units[1].icon, DEFAULT_ICON);
        assert_eq!(units[2].icon, DEFAULT_ICON);
        assert_eq!(units[2].author_id, None);
    }

    #[test]
    fn test_missing_name_and_phase() {
        let units = render_transcript(&[Turn {
            content: "Hello.".to_string(),
            ..Default::default()
        }]);
        assert_eq!(units[0].author_name, "");
        assert_eq!(units[0].phase, None);
    }

    #[test]
    fn test_render_is_deterministic() {
        let turns = vec![
            turn(Some("napoleon"), "Napoleon", "One kingdom, one peace.").with_phase("opening"),
            turn(Some("summariser"), "Summariser", "Summary.").with_phase("summary"),
        ];
        assert_eq!(render_transcript(&turns), render_transcript(&turns.clone()));
    }

    #[test]
    fn test_many_turns() {
        let turns: Vec<_> = (0..500)
            .map(|i| turn(Some("gandhi"), "Gandhi", &i.to_string()))
            .collect();
        let units = render_transcript(&turns);
        assert_eq!(units.len(), 500);
        assert_eq!(units[499].content, "499");
    }

    #[test]
    fn test_closing_block_iff_non_empty() {
        assert_eq!(render_closing(&ClosingText::empty(), ClosingKind::Summary), None);

        let block = render_closing(&ClosingText::new("Test summary."), ClosingKind::Summary).unwrap();
        assert_eq!(block.title, "Summary");
        assert_eq!(block.text, "Test summary.");

        let block = render_closing(
            &ClosingText::new("All three perspectives can be unified."),
            ClosingKind::Consensus,
        )
        .unwrap();
        assert_eq!(block.title, "⚖️ Final Consensus");
    }

    #[test]
    fn test_whitespace_closing_renders_verbatim() {
        let block = render_closing(&ClosingText::new("  \n"), ClosingKind::Summary).unwrap();
        assert_eq!(block.text, "  \n");
    }
}
