//! Key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User action derived from key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Start a debate run
    Start,
    /// Quit application
    Quit,
    ScrollUp,
    ScrollDown,
    ScrollTop,
    ScrollBottom,
    /// Toggle the help overlay
    ToggleHelp,
    /// Close the help overlay
    CloseHelp,
    /// No action
    None,
}

/// Maps key events to actions
pub struct KeyHandler;

impl KeyHandler {
    pub fn handle(key: KeyEvent) -> Action {
        // Windows reports releases too
        if key.kind == KeyEventKind::Release {
            return Action::None;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
            (KeyCode::Char('q'), _) => Action::Quit,
            (KeyCode::Char('r'), KeyModifiers::NONE) | (KeyCode::Enter, _) => Action::Start,
            (KeyCode::Char('k'), _) | (KeyCode::Up, _) => Action::ScrollUp,
            (KeyCode::Char('j'), _) | (KeyCode::Down, _) => Action::ScrollDown,
            (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, _) => Action::ScrollTop,
            (KeyCode::Char('G'), _) | (KeyCode::End, _) => Action::ScrollBottom,
            (KeyCode::Char('?'), _) | (KeyCode::F(1), _) => Action::ToggleHelp,
            (KeyCode::Esc, _) => Action::CloseHelp,
            _ => Action::None,
        }
    }
}
