//! TUI application: main loop
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)                  spawned run (tokio::spawn)
//!   ├─ crossterm EventStream               └─ gateway.run_debate()
//!   ├─ completion_rx (RunCompletion) <──────────┘
//!   ├─ tui_event_rx (TuiEvent from session bridge)
//!   └─ tick_interval
//! ```
//!
//! The loop is the only place session transitions happen: key presses call
//! `start()`, completions call `complete()`.

use super::event::TuiEvent;
use super::keys::{Action, KeyHandler};
use super::progress::TuiSessionBridge;
use super::state::{FLASH_TTL, TuiState};
use super::widgets::{
    MainLayout, header::HeaderWidget, help::HelpWidget, status_bar::StatusBarWidget,
    transcript::TranscriptWidget,
};
use crate::view::{Screen, compose};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use simulacra_application::{DebateGateway, RunCompletion, SessionConfig, SessionController};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Main TUI application
pub struct TuiApp<G: DebateGateway + 'static> {
    controller: SessionController<G>,
    completion_rx: mpsc::UnboundedReceiver<RunCompletion>,
    tui_event_rx: mpsc::UnboundedReceiver<TuiEvent>,
}

impl<G: DebateGateway + 'static> TuiApp<G> {
    /// Create a new TUI application wired to a session controller
    pub fn new(gateway: Arc<G>, config: SessionConfig) -> Self {
        let (tui_event_tx, tui_event_rx) = mpsc::unbounded_channel::<TuiEvent>();
        let (controller, completion_rx) = SessionController::new(gateway, config);
        let controller = controller.with_observer(Arc::new(TuiSessionBridge::new(tui_event_tx)));

        Self {
            controller,
            completion_rx,
            tui_event_rx,
        }
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let mut state = TuiState::new();
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(250));

        self.controller.mount();

        loop {
            terminal.draw(|frame| {
                self.render(frame, &mut state);
            })?;

            if state.should_quit {
                break;
            }

            tokio::select! {
                // Terminal events (keyboard, resize)
                Some(Ok(term_event)) = event_stream.next() => {
                    self.handle_terminal_event(&mut state, term_event);
                }

                // Outcomes of spawned runs
                Some(completion) = self.completion_rx.recv() => {
                    self.controller.complete(completion);
                }

                // TuiEvents from the session bridge
                Some(tui_event) = self.tui_event_rx.recv() => {
                    state.apply(&tui_event);
                }

                // Tick for flash expiry
                _ = tick.tick() => {
                    state.expire_flash(FLASH_TTL);
                }
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Screen for the current session state
    pub fn screen(&self) -> Screen {
        let config = self.controller.config();
        compose(self.controller.state(), config.trigger, config.closing)
    }

    /// Render all widgets
    fn render(&self, frame: &mut ratatui::Frame, state: &mut TuiState) {
        let screen = self.screen();
        let layout = MainLayout::compute(frame.area());

        state.follow_transcript(screen.transcript.len(), layout.transcript_viewport());
        let transcript = TranscriptWidget::new(&screen, state.scroll_offset);
        state.clamp_scroll(transcript.max_scroll(layout.transcript));

        frame.render_widget(
            HeaderWidget::new(
                &screen,
                self.controller.state().phase(),
                self.controller.trigger(),
            ),
            layout.header,
        );
        frame.render_widget(
            TranscriptWidget::new(&screen, state.scroll_offset),
            layout.transcript,
        );
        frame.render_widget(StatusBarWidget::new(&screen, state), layout.status_bar);

        if state.show_help {
            let help_area = MainLayout::centered_overlay(60, 50, frame.area());
            frame.render_widget(HelpWidget, help_area);
        }
    }

    fn handle_terminal_event(&mut self, state: &mut TuiState, event: Event) {
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
        {
            self.handle_action(state, KeyHandler::handle(key));
        }
    }

    fn handle_action(&mut self, state: &mut TuiState, action: Action) {
        match action {
            Action::Start => {
                self.controller.start();
            }
            Action::Quit => state.should_quit = true,
            Action::ScrollUp => state.scroll_up(),
            Action::ScrollDown => state.scroll_down(),
            Action::ScrollTop => state.scroll_to_top(),
            Action::ScrollBottom => state.scroll_to_bottom(),
            Action::ToggleHelp => state.show_help = !state.show_help,
            Action::CloseHelp => state.show_help = false,
            Action::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use simulacra_application::{GatewayError, RunRequest};
    use simulacra_domain::{DebatePayload, SessionPhase, TriggerPolicy};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CannedGateway {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl DebateGateway for CannedGateway {
        async fn run_debate(&self, _request: &RunRequest) -> Result<DebatePayload, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(serde_json::from_str(
                r#"{"messages":[{"author_id":"napoleon","author_name":"Napoleon","content":"Test opening."}],"summary":"Test summary."}"#,
            )
            .unwrap())
        }

        async fn health(&self) -> Result<String, GatewayError> {
            Ok("ok".to_string())
        }
    }

    fn app(trigger: TriggerPolicy) -> (TuiApp<CannedGateway>, Arc<CannedGateway>) {
        let gateway = Arc::new(CannedGateway {
            calls: AtomicUsize::new(0),
        });
        let app = TuiApp::new(Arc::clone(&gateway), SessionConfig::new(trigger));
        (app, gateway)
    }

    #[tokio::test]
    async fn test_start_key_runs_debate_to_completion() {
        let (mut app, gateway) = app(TriggerPolicy::Manual);
        let mut state = TuiState::new();
        assert!(app.screen().instruction.is_some());

        app.handle_action(&mut state, Action::Start);
        assert!(app.controller.state().is_running());

        // A second press while running issues nothing
        app.handle_action(&mut state, Action::Start);

        let completion = app.completion_rx.recv().await.unwrap();
        assert!(app.controller.complete(completion));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);

        let screen = app.screen();
        assert_eq!(screen.transcript.len(), 1);
        assert_eq!(screen.closing.unwrap().text, "Test summary.");
    }

    #[tokio::test]
    async fn test_bridge_events_reach_state() {
        let (mut app, _gateway) = app(TriggerPolicy::Manual);
        let mut state = TuiState::new();

        app.handle_action(&mut state, Action::Start);
        app.handle_action(&mut state, Action::Start);

        let first = app.tui_event_rx.recv().await.unwrap();
        assert_eq!(
            first,
            TuiEvent::Transition {
                from: SessionPhase::Idle,
                to: SessionPhase::Running
            }
        );
        let second = app.tui_event_rx.recv().await.unwrap();
        assert_eq!(second, TuiEvent::StartRejected);

        state.apply(&second);
        assert!(state.flash_message.is_some());
    }

    #[tokio::test]
    async fn test_auto_start_shows_placeholder_until_done() {
        let (mut app, _gateway) = app(TriggerPolicy::AutoStart);
        assert!(app.screen().placeholder);

        app.controller.mount();
        assert!(app.screen().placeholder);

        let completion = app.completion_rx.recv().await.unwrap();
        app.controller.complete(completion);
        assert!(!app.screen().placeholder);
    }

    #[test]
    fn test_quit_and_help_actions() {
        let (mut app, _gateway) = app(TriggerPolicy::Manual);
        let mut state = TuiState::new();

        app.handle_action(&mut state, Action::ToggleHelp);
        assert!(state.show_help);
        app.handle_action(&mut state, Action::CloseHelp);
        assert!(!state.show_help);

        app.handle_action(&mut state, Action::Quit);
        assert!(state.should_quit);
    }
}
