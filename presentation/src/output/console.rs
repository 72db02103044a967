//! Console output formatter for debate results

use crate::view::composer::{APP_TITLE, Screen};
use colored::Colorize;
use simulacra_domain::RenderUnit;

/// Formats a composed screen for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Force colors off (`[output] color = false`)
    pub fn disable_color() {
        colored::control::set_override(false);
    }

    /// Format the screen as a chat log
    pub fn format(screen: &Screen) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(APP_TITLE));
        output.push('\n');

        if let Some(error) = &screen.header_error {
            output.push_str(&format!(
                "\n{}\n{}\n",
                error.headline.red().bold(),
                error.message.red()
            ));
        }

        if let Some(instruction) = screen.instruction {
            output.push_str(&format!("\n{}\n", instruction.dimmed()));
        }

        for unit in &screen.transcript {
            output.push_str(&Self::message(unit));
        }

        if let Some(closing) = &screen.closing {
            output.push_str(&Self::section_header(closing.title));
            output.push_str(&format!("{}\n", closing.text));
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(screen: &Screen) -> String {
        serde_json::to_string_pretty(screen).unwrap_or_else(|_| "{}".to_string())
    }

    fn message(unit: &RenderUnit) -> String {
        let mut heading = format!("{} {}", unit.icon, unit.author_name.yellow().bold());
        if let Some(phase) = &unit.phase {
            heading.push_str(&format!(" {}", format!("[{}]", phase).dimmed()));
        }
        format!("\n{}\n{}\n", heading, Self::indent(&unit.content, "  "))
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::compose;
    use simulacra_domain::{
        ClosingKind, ClosingText, DebateTranscript, SessionState, TriggerPolicy, Turn,
    };

    fn screen(state: SessionState) -> Screen {
        compose(&state, TriggerPolicy::Manual, ClosingKind::Summary)
    }

    fn plain(text: String) -> String {
        // Strip ANSI so assertions don't depend on terminal detection
        let mut out = String::new();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_format_transcript_in_order_with_closing() {
        let state = SessionState::Succeeded(DebateTranscript::new(
            vec![
                Turn::new("napoleon", "Napoleon", "Test opening.").with_phase("opening"),
                Turn::new("gandhi", "Gandhi", "A reply."),
            ],
            ClosingText::new("Test summary."),
        ));
        let text = plain(ConsoleFormatter::format(&screen(state)));

        let first = text.find("⚔️ Napoleon [opening]").unwrap();
        let second = text.find("🕊️ Gandhi").unwrap();
        assert!(first < second);
        assert!(text.contains("  Test opening."));
        assert!(text.contains("Summary"));
        assert!(text.contains("Test summary."));
    }

    #[test]
    fn test_format_failure_shows_header_error() {
        let text = plain(ConsoleFormatter::format(&screen(SessionState::Failed(
            "boom".to_string(),
        ))));
        assert!(text.contains("❌ Failed to start debate\nboom\n"));
    }

    #[test]
    fn test_format_json() {
        let state = SessionState::Succeeded(DebateTranscript::new(
            vec![Turn::new("alexander", "Alexander", "Glory.")],
            ClosingText::empty(),
        ));
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&screen(state))).unwrap();
        assert_eq!(json["transcript"][0]["icon"], "👑");
        assert_eq!(json["placeholder"], false);
        assert!(json.get("closing").is_none());
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "> "), "> a\n> b");
    }
}
