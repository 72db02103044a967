//! Header widget: title, trigger mode and session phase, or the run error

use crate::view::composer::{APP_TITLE, Screen};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use simulacra_domain::{SessionPhase, TriggerPolicy};

pub struct HeaderWidget<'a> {
    screen: &'a Screen,
    phase: SessionPhase,
    trigger: TriggerPolicy,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(screen: &'a Screen, phase: SessionPhase, trigger: TriggerPolicy) -> Self {
        Self {
            screen,
            phase,
            trigger,
        }
    }

    fn phase_label(phase: SessionPhase) -> (&'static str, Color) {
        match phase {
            SessionPhase::Idle => ("Ready", Color::White),
            SessionPhase::Running => ("Running", Color::Yellow),
            SessionPhase::Succeeded => ("Finished", Color::Green),
            SessionPhase::Failed => ("Failed", Color::Red),
        }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = if let Some(error) = &self.screen.header_error {
            Line::from(vec![
                Span::styled(
                    error.headline,
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(error.message.as_str(), Style::default().fg(Color::Red)),
            ])
        } else {
            let (phase_text, phase_color) = Self::phase_label(self.phase);
            let mode_color = if self.trigger.is_auto() {
                Color::Magenta
            } else {
                Color::Cyan
            };

            Line::from(vec![
                Span::styled("◉ ", Style::default().fg(phase_color)),
                Span::styled(
                    self.trigger.to_string(),
                    Style::default().fg(mode_color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" | "),
                Span::styled(phase_text, Style::default().fg(phase_color)),
            ])
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", APP_TITLE))
            .style(Style::default().fg(Color::White));

        Paragraph::new(line).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::compose;
    use simulacra_domain::{ClosingKind, SessionState};

    fn render(state: &SessionState, trigger: TriggerPolicy) -> String {
        let screen = compose(state, trigger, ClosingKind::Summary);
        let area = Rect::new(0, 0, 70, 3);
        let mut buf = Buffer::empty(area);
        HeaderWidget::new(&screen, state.phase(), trigger).render(area, &mut buf);
        (0..area.width)
            .map(|x| buf[(x, 1)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_shows_mode_and_phase() {
        let text = render(&SessionState::Running, TriggerPolicy::Manual);
        assert!(text.contains("manual"));
        assert!(text.contains("Running"));
    }

    #[test]
    fn test_error_replaces_status() {
        let text = render(&SessionState::Failed("boom".to_string()), TriggerPolicy::AutoStart);
        assert!(text.contains("Failed to start debate"));
        assert!(text.contains("boom"));
        assert!(!text.contains("auto |"));
    }
}
