//! View composer: maps session state onto what the screen shows.
//!
//! | State          | Transcript                        | Extra UI                               |
//! |----------------|-----------------------------------|----------------------------------------|
//! | Idle (manual)  | none, instruction                 | run control                            |
//! | Idle (auto)    | placeholder                       | waiting message                        |
//! | Running        | placeholder (auto) / instruction  | loading message, control disabled      |
//! | Succeeded      | real transcript                   | closing block when present             |
//! | Failed         | placeholder (auto) / none         | error in header and body               |
//!
//! Both the TUI widgets and the console formatter draw from [`Screen`].

use serde::Serialize;
use simulacra_domain::{
    ClosingBlock, ClosingKind, RenderUnit, SessionState, TriggerPolicy, placeholder_transcript,
    render_closing, render_transcript,
};

pub const APP_TITLE: &str = "Simulacra Debate";
pub const RUN_LABEL: &str = "Run debate";
pub const RUNNING_LABEL: &str = "Running debate…";
pub const WAITING_MESSAGE: &str = "Starting debate…";
pub const LOADING_MESSAGE: &str = "Running debate (this may take a minute)…";
pub const FAILURE_HEADLINE: &str = "❌ Failed to start debate";
pub const MANUAL_INSTRUCTION: &str =
    "Napoleon, Gandhi and Alexander are ready. Run the debate to hear them argue.";

/// Status line shown in the body above the transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "lowercase")]
pub enum StatusLine {
    /// Auto-start is about to fire
    Waiting,
    /// A run is in flight
    Loading,
    /// The last run failed
    Error(String),
}

impl StatusLine {
    pub fn text(&self) -> &str {
        match self {
            StatusLine::Waiting => WAITING_MESSAGE,
            StatusLine::Loading => LOADING_MESSAGE,
            StatusLine::Error(message) => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, StatusLine::Error(_))
    }
}

/// The run control (button) and whether it accepts input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionControl {
    pub label: &'static str,
    pub enabled: bool,
}

impl ActionControl {
    fn ready() -> Self {
        Self {
            label: RUN_LABEL,
            enabled: true,
        }
    }

    fn busy() -> Self {
        Self {
            label: RUNNING_LABEL,
            enabled: false,
        }
    }
}

/// Failure notice for the header slot: a fixed headline beside the message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderError {
    pub headline: &'static str,
    pub message: String,
}

/// Everything a frontend needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screen {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_error: Option<HeaderError>,
    /// Instructional text shown instead of a transcript
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusLine>,
    pub transcript: Vec<RenderUnit>,
    /// Whether `transcript` is the static greeting rather than a real run
    pub placeholder: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closing: Option<ClosingBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionControl>,
}

impl Screen {
    fn blank() -> Self {
        Self {
            header_error: None,
            instruction: None,
            status: None,
            transcript: Vec::new(),
            placeholder: false,
            closing: None,
            action: None,
        }
    }

    fn with_placeholder(mut self) -> Self {
        self.transcript = render_transcript(placeholder_transcript());
        self.placeholder = true;
        self
    }
}

/// Compose the screen for a session state.
///
/// Pure: the same inputs always produce the same screen.
pub fn compose(state: &SessionState, trigger: TriggerPolicy, closing: ClosingKind) -> Screen {
    let auto = trigger.is_auto();

    match state {
        SessionState::Idle if auto => Screen {
            status: Some(StatusLine::Waiting),
            ..Screen::blank().with_placeholder()
        },
        SessionState::Idle => Screen {
            instruction: Some(MANUAL_INSTRUCTION),
            action: Some(ActionControl::ready()),
            ..Screen::blank()
        },
        SessionState::Running if auto => Screen {
            status: Some(StatusLine::Loading),
            ..Screen::blank().with_placeholder()
        },
        SessionState::Running => Screen {
            instruction: Some(MANUAL_INSTRUCTION),
            status: Some(StatusLine::Loading),
            action: Some(ActionControl::busy()),
            ..Screen::blank()
        },
        SessionState::Succeeded(transcript) => Screen {
            transcript: render_transcript(&transcript.turns),
            closing: render_closing(&transcript.closing, closing),
            action: Some(ActionControl::ready()),
            ..Screen::blank()
        },
        SessionState::Failed(message) => {
            let screen = Screen {
                header_error: Some(HeaderError {
                    headline: FAILURE_HEADLINE,
                    message: message.clone(),
                }),
                status: Some(StatusLine::Error(message.clone())),
                action: Some(ActionControl::ready()),
                ..Screen::blank()
            };
            if auto { screen.with_placeholder() } else { screen }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simulacra_domain::{ClosingText, DebateTranscript, Turn};

    fn succeeded(closing: &str) -> SessionState {
        SessionState::Succeeded(DebateTranscript::new(
            vec![
                Turn::new("napoleon", "Napoleon", "Test opening.").with_phase("opening"),
                Turn {
                    author_id: Some("stranger".to_string()),
                    content: "Who am I?".to_string(),
                    ..Turn::default()
                },
            ],
            ClosingText::new(closing),
        ))
    }

    #[test]
    fn test_idle_manual_shows_instruction_and_control() {
        let screen = compose(&SessionState::Idle, TriggerPolicy::Manual, ClosingKind::Summary);
        assert!(screen.transcript.is_empty());
        assert_eq!(screen.instruction, Some(MANUAL_INSTRUCTION));
        assert_eq!(screen.action, Some(ActionControl::ready()));
        assert!(screen.status.is_none());
        assert!(screen.header_error.is_none());
    }

    #[test]
    fn test_idle_auto_shows_placeholder_and_waiting() {
        let screen = compose(&SessionState::Idle, TriggerPolicy::AutoStart, ClosingKind::Summary);
        assert!(screen.placeholder);
        assert_eq!(screen.transcript.len(), placeholder_transcript().len());
        assert_eq!(screen.status, Some(StatusLine::Waiting));
        assert_eq!(screen.status.unwrap().text(), WAITING_MESSAGE);
        assert!(screen.action.is_none());
    }

    #[test]
    fn test_running_manual_disables_control() {
        let screen = compose(&SessionState::Running, TriggerPolicy::Manual, ClosingKind::Summary);
        assert_eq!(screen.status, Some(StatusLine::Loading));
        assert_eq!(screen.instruction, Some(MANUAL_INSTRUCTION));
        let action = screen.action.unwrap();
        assert!(!action.enabled);
        assert_eq!(action.label, RUNNING_LABEL);
    }

    #[test]
    fn test_running_auto_keeps_placeholder() {
        let screen = compose(&SessionState::Running, TriggerPolicy::AutoStart, ClosingKind::Summary);
        assert!(screen.placeholder);
        assert_eq!(screen.status.as_ref().map(StatusLine::text), Some(LOADING_MESSAGE));
    }

    #[test]
    fn test_succeeded_shows_real_transcript_and_closing() {
        let screen = compose(&succeeded("Test summary."), TriggerPolicy::AutoStart, ClosingKind::Summary);
        assert!(!screen.placeholder);
        assert_eq!(screen.transcript.len(), 2);
        assert_eq!(screen.transcript[0].content, "Test opening.");
        assert_eq!(screen.transcript[0].icon, "⚔️");
        assert_eq!(screen.transcript[1].icon, "💬");
        assert!(screen.status.is_none());

        let closing = screen.closing.unwrap();
        assert_eq!(closing.title, "Summary");
        assert_eq!(closing.text, "Test summary.");
    }

    #[test]
    fn test_succeeded_without_closing_text() {
        let screen = compose(&succeeded(""), TriggerPolicy::Manual, ClosingKind::Consensus);
        assert!(screen.closing.is_none());
        assert!(screen.instruction.is_none());
    }

    #[test]
    fn test_consensus_title() {
        let screen = compose(&succeeded("Agreed."), TriggerPolicy::Manual, ClosingKind::Consensus);
        assert_eq!(screen.closing.unwrap().title, "⚖️ Final Consensus");
    }

    #[test]
    fn test_failed_shows_error_in_header_and_body() {
        let state = SessionState::Failed("Server error".to_string());

        let manual = compose(&state, TriggerPolicy::Manual, ClosingKind::Summary);
        assert!(manual.transcript.is_empty());
        let header = manual.header_error.as_ref().unwrap();
        assert_eq!(header.headline, "❌ Failed to start debate");
        assert_eq!(header.message, "Server error");
        assert_eq!(manual.status, Some(StatusLine::Error("Server error".to_string())));
        assert!(manual.closing.is_none());

        let auto = compose(&state, TriggerPolicy::AutoStart, ClosingKind::Summary);
        assert!(auto.placeholder);
        assert!(auto.status.unwrap().is_error());
    }

    #[test]
    fn test_compose_is_deterministic() {
        let state = succeeded("Test summary.");
        assert_eq!(
            compose(&state, TriggerPolicy::Manual, ClosingKind::Summary),
            compose(&state, TriggerPolicy::Manual, ClosingKind::Summary)
        );
    }

    #[test]
    fn test_screen_serializes_without_empty_slots() {
        let screen = compose(&succeeded(""), TriggerPolicy::Manual, ClosingKind::Summary);
        let json = serde_json::to_value(&screen).unwrap();
        assert!(json.get("closing").is_none());
        assert!(json.get("header_error").is_none());
        assert_eq!(json["transcript"][0]["author_id"], "napoleon");
    }

    #[test]
    fn test_failed_screen_serializes_headline_apart_from_message() {
        let state = SessionState::Failed("Server error".to_string());
        let screen = compose(&state, TriggerPolicy::Manual, ClosingKind::Summary);
        let json = serde_json::to_value(&screen).unwrap();
        assert_eq!(json["header_error"]["headline"], FAILURE_HEADLINE);
        assert_eq!(json["header_error"]["message"], "Server error");
    }
}
