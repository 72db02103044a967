//! Presentation layer for simulacra-debate
//!
//! This crate contains the CLI definition, the view composer shared by
//! every frontend, the ratatui TUI, the console formatter and the
//! progress reporters.

pub mod cli;
pub mod output;
pub mod progress;
pub mod tui;
pub mod view;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use tui::TuiApp;
pub use view::{AutoScroll, Screen, compose};
