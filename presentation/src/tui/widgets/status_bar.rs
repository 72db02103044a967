//! Status bar widget: run control + key hints + flash messages

use crate::tui::state::TuiState;
use crate::view::composer::Screen;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

const HINTS: &str = "r/Enter:run  j/k:scroll  ?:help  q:quit";

pub struct StatusBarWidget<'a> {
    screen: &'a Screen,
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(screen: &'a Screen, state: &'a TuiState) -> Self {
        Self { screen, state }
    }

    fn right_text(&self) -> String {
        if let Some((flash, _)) = &self.state.flash_message {
            return flash.clone();
        }
        match &self.state.last_completed {
            Some(at) => format!("{}  last run {}", HINTS, at.format("%H:%M:%S")),
            None => HINTS.to_string(),
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        // Left: run control, if this screen offers one
        let mut left_width = 0;
        if let Some(action) = self.screen.action {
            let style = if action.enabled {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray).bg(Color::Black)
            };
            let label = format!(" {} ", action.label);
            left_width = label.chars().count() as u16;
            let left_line = Line::from(Span::styled(label, style));
            buf.set_line(area.x, area.y, &left_line, left_width.min(area.width));
        }

        // Right: flash message or key hints, right-aligned
        let right_text = self.right_text();
        let right_width = right_text.chars().count() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + left_width {
            let right_line = Line::from(Span::styled(
                right_text,
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ));
            buf.set_line(right_x, area.y, &right_line, right_width + 1);
        }
    }
}
