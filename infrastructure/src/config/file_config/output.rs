//! `[output]` section: how `--plain` runs print the finished debate
//!
//! The TUI ignores this section; it always draws in the terminal.

use serde::{Deserialize, Serialize};
use simulacra_domain::OutputFormat;

/// Console output settings for plain runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Chat log (`text`) or the composed screen as `json`
    pub format: Option<OutputFormat>,
    /// `false` prints the chat log without ANSI colors
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// Format for a plain run; `--output` wins over the file
    pub fn format_for(&self, cli_override: Option<OutputFormat>) -> OutputFormat {
        cli_override.or(self.format).unwrap_or_default()
    }
}
