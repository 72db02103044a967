//! TUI (Text User Interface) module for simulacra-debate
//!
//! A single-pane chat view of the debate built on ratatui. The session
//! controller runs inside the TUI event loop; spawned runs report back
//! over a channel.

mod app;
mod event;
mod keys;
mod progress;
mod state;
mod widgets;

pub use app::TuiApp;
pub use event::TuiEvent;
pub use keys::{Action, KeyHandler};
pub use progress::TuiSessionBridge;
pub use state::TuiState;
