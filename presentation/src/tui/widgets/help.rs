//! Help overlay widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

const BINDINGS: [(&str, &str); 6] = [
    ("r / Enter", "Run the debate"),
    ("j / k", "Scroll down / up"),
    ("g / G", "Scroll to top / bottom"),
    ("?", "Toggle this help"),
    ("Esc", "Close this help"),
    ("q / Ctrl+C", "Quit"),
];

/// Widget for rendering help overlay
pub struct HelpWidget;

impl HelpWidget {
    fn build_help_text() -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                "Keyboard Shortcuts",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (keys, description) in BINDINGS {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<12}", keys), Style::default().fg(Color::Yellow)),
                Span::raw(description),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press ? or Esc to close",
            Style::default().fg(Color::DarkGray),
        )));
        lines
    }
}

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .style(Style::default().fg(Color::Cyan));

        Paragraph::new(Self::build_help_text())
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_binding() {
        let text: Vec<String> = HelpWidget::build_help_text()
            .iter()
            .map(|line| line.to_string())
            .collect();
        for (keys, description) in BINDINGS {
            assert!(text.iter().any(|l| l.contains(keys) && l.contains(description)));
        }
    }
}
