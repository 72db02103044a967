//! Transcript widget: persona messages, status line and closing block

use crate::view::composer::{Screen, StatusLine};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use simulacra_domain::{PersonaId, RenderUnit};

/// Accent color for a persona's name
pub fn persona_color(author_id: Option<&str>) -> Color {
    match author_id.and_then(|id| id.parse::<PersonaId>().ok()) {
        Some(PersonaId::Napoleon) => Color::Blue,
        Some(PersonaId::Gandhi) => Color::Green,
        Some(PersonaId::Alexander) => Color::Yellow,
        Some(PersonaId::Arbitrator) => Color::Magenta,
        Some(PersonaId::Summariser) => Color::Cyan,
        None => Color::White,
    }
}

pub struct TranscriptWidget<'a> {
    screen: &'a Screen,
    scroll_offset: usize,
}

impl<'a> TranscriptWidget<'a> {
    pub fn new(screen: &'a Screen, scroll_offset: usize) -> Self {
        Self {
            screen,
            scroll_offset,
        }
    }

    fn status_line(status: &StatusLine) -> Line<'_> {
        let style = match status {
            StatusLine::Error(_) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            StatusLine::Loading => Style::default().fg(Color::Yellow),
            StatusLine::Waiting => Style::default().fg(Color::DarkGray),
        };
        Line::from(Span::styled(status.text(), style))
    }

    fn push_unit(lines: &mut Vec<Line<'a>>, unit: &'a RenderUnit, dimmed: bool) {
        let name_style = Style::default()
            .fg(persona_color(unit.author_id.as_deref()))
            .add_modifier(Modifier::BOLD);

        let mut heading = vec![
            Span::raw(format!("{} ", unit.icon)),
            Span::styled(unit.author_name.as_str(), name_style),
        ];
        if let Some(phase) = &unit.phase {
            heading.push(Span::styled(
                format!("  {}", phase),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(heading));

        let body_style = if dimmed {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        for content_line in unit.content.lines() {
            lines.push(Line::from(Span::styled(format!("   {}", content_line), body_style)));
        }
        lines.push(Line::from(""));
    }

    fn format_screen(&self) -> Text<'a> {
        let screen = self.screen;
        let mut lines: Vec<Line> = Vec::new();

        if let Some(instruction) = screen.instruction {
            lines.push(Line::from(Span::styled(
                instruction,
                Style::default().add_modifier(Modifier::ITALIC),
            )));
            lines.push(Line::from(""));
        }

        if let Some(status) = &screen.status {
            lines.push(Self::status_line(status));
            lines.push(Line::from(""));
        }

        for unit in &screen.transcript {
            Self::push_unit(&mut lines, unit, screen.placeholder);
        }

        if let Some(closing) = &screen.closing {
            lines.push(Line::from(Span::styled(
                closing.title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
            for text_line in closing.text.lines() {
                lines.push(Line::from(text_line));
            }
        }

        Text::from(lines)
    }

    fn paragraph(&self) -> Paragraph<'a> {
        Self::wrapped(self.format_screen())
    }

    fn wrapped(text: Text<'a>) -> Paragraph<'a> {
        Paragraph::new(text).wrap(Wrap { trim: false })
    }

    /// Drop whole leading lines covering up to `rows` wrapped rows.
    ///
    /// Returns the remaining text and the rows still left to scroll.
    fn skip_rows(text: Text<'a>, rows: usize, width: u16) -> (Text<'a>, usize) {
        let mut skipped = 0;
        let mut lines = text.lines.into_iter().peekable();
        while let Some(line) = lines.peek() {
            let height = Self::wrapped(Text::from(line.clone())).line_count(width);
            if skipped + height > rows {
                break;
            }
            skipped += height;
            lines.next();
        }
        (Text::from(lines.collect::<Vec<_>>()), rows - skipped)
    }

    /// Largest useful scroll offset for the given area
    pub fn max_scroll(&self, area: Rect) -> usize {
        let visible_height = area.height.saturating_sub(2) as usize;
        let content_width = area.width.saturating_sub(2);
        self.paragraph()
            .line_count(content_width)
            .saturating_sub(visible_height)
    }
}

impl<'a> Widget for TranscriptWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible_height = area.height.saturating_sub(2) as usize; // borders
        let content_width = area.width.saturating_sub(2); // borders

        // Built without block so line_count returns pure content lines
        let text = self.format_screen();
        let total_lines = Self::wrapped(text.clone()).line_count(content_width);

        // scroll_offset=0 means "show bottom"
        let max_scroll = total_lines.saturating_sub(visible_height);
        let scroll = max_scroll - self.scroll_offset.min(max_scroll);

        // Paragraph scroll is u16; very long transcripts drop leading lines instead
        let (text, scroll) = if scroll > u16::MAX as usize {
            Self::skip_rows(text, scroll, content_width)
        } else {
            (text, scroll)
        };
        let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

        let title = if self.screen.placeholder {
            " Debate (waiting) "
        } else {
            " Debate "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(Style::default().fg(Color::White));

        Self::wrapped(text)
            .block(block)
            .scroll((scroll, 0))
            .render(area, buf);
    }
}
