//! TUI state: everything the widgets need besides the session itself

use super::event::TuiEvent;
use crate::view::AutoScroll;
use chrono::{DateTime, Local};
use simulacra_domain::SessionPhase;
use std::time::{Duration, Instant};

/// How long a flash message stays in the status bar
pub const FLASH_TTL: Duration = Duration::from_secs(5);

/// View-local state of the TUI
///
/// The session state lives in the controller; this holds scrolling,
/// overlays and transient messages.
pub struct TuiState {
    /// Lines scrolled up from the bottom (0 = newest visible)
    pub scroll_offset: usize,
    pub auto_scroll: AutoScroll,
    pub flash_message: Option<(String, Instant)>,
    pub show_help: bool,
    pub should_quit: bool,
    /// When the last run reached an outcome
    pub last_completed: Option<DateTime<Local>>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            scroll_offset: 0,
            auto_scroll: AutoScroll::new(),
            flash_message: None,
            show_help: false,
            should_quit: false,
            last_completed: None,
        }
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Scrolling --

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = usize::MAX; // Clamped during render
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
    }

    /// Keep the offset within what the content allows
    pub fn clamp_scroll(&mut self, max_scroll: usize) {
        self.scroll_offset = self.scroll_offset.min(max_scroll);
    }

    /// Jump to the newest turn when the displayed transcript length changed
    pub fn follow_transcript(&mut self, len: usize, viewport_height: u16) {
        if self.auto_scroll.observe(len, viewport_height) {
            self.scroll_to_bottom();
        }
    }

    // -- Flash messages --

    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), Instant::now()));
    }

    /// Clear flash if older than the given duration
    pub fn expire_flash(&mut self, max_age: Duration) {
        if let Some((_, created)) = &self.flash_message
            && created.elapsed() > max_age
        {
            self.flash_message = None;
        }
    }

    // -- Session events --

    pub fn apply(&mut self, event: &TuiEvent) {
        match event {
            TuiEvent::Transition { to, .. } => match to {
                SessionPhase::Running => self.set_flash("Debate started"),
                SessionPhase::Succeeded => {
                    self.last_completed = Some(Local::now());
                    self.set_flash("Debate finished");
                }
                SessionPhase::Failed => {
                    self.last_completed = Some(Local::now());
                    self.set_flash("Debate failed");
                }
                SessionPhase::Idle => {}
            },
            TuiEvent::StartRejected => self.set_flash("A debate is already running"),
            TuiEvent::StaleCompletion(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_behavior() {
        let mut state = TuiState::new();
        state.scroll_up();
        state.scroll_up();
        assert_eq!(state.scroll_offset, 2);

        state.scroll_down();
        assert_eq!(state.scroll_offset, 1);

        state.scroll_to_bottom();
        state.scroll_down();
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_scroll_to_top_is_clamped() {
        let mut state = TuiState::new();
        state.scroll_to_top();
        state.clamp_scroll(7);
        assert_eq!(state.scroll_offset, 7);
    }

    #[test]
    fn test_follow_transcript_resets_scroll_on_change() {
        let mut state = TuiState::new();
        state.follow_transcript(3, 10);
        state.scroll_up();

        // Same length: the user's scroll position is kept
        state.follow_transcript(3, 10);
        assert_eq!(state.scroll_offset, 1);

        state.follow_transcript(8, 10);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_flash_message() {
        let mut state = TuiState::new();
        state.set_flash("test");
        assert!(state.flash_message.is_some());

        // Should not expire immediately
        state.expire_flash(FLASH_TTL);
        assert!(state.flash_message.is_some());

        state.expire_flash(Duration::ZERO);
        std::thread::sleep(Duration::from_millis(5));
        state.expire_flash(Duration::ZERO);
        assert!(state.flash_message.is_none());
    }

    #[test]
    fn test_transition_events() {
        let mut state = TuiState::new();
        state.apply(&TuiEvent::Transition {
            from: SessionPhase::Idle,
            to: SessionPhase::Running,
        });
        assert!(state.last_completed.is_none());
        assert_eq!(state.flash_message.as_ref().unwrap().0, "Debate started");

        state.apply(&TuiEvent::Transition {
            from: SessionPhase::Running,
            to: SessionPhase::Failed,
        });
        assert!(state.last_completed.is_some());
        assert_eq!(state.flash_message.as_ref().unwrap().0, "Debate failed");
    }

    #[test]
    fn test_start_rejected_flashes() {
        let mut state = TuiState::new();
        state.apply(&TuiEvent::StartRejected);
        assert_eq!(
            state.flash_message.as_ref().unwrap().0,
            "A debate is already running"
        );
    }
}
