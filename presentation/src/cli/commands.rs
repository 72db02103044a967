//! CLI command definitions

use clap::Parser;
use simulacra_domain::{ClosingKind, OutputFormat, TriggerPolicy};
use std::path::PathBuf;

/// CLI arguments for simulacra-debate
#[derive(Parser, Debug)]
#[command(name = "simulacra-debate")]
#[command(author, version, about = "Watch Napoleon, Gandhi and Alexander debate in your terminal")]
#[command(long_about = r#"
Simulacra Debate asks a debate service to run a debate between historical
personas and shows the transcript as a chat log.

By default the debate starts as soon as the interface opens. Use --manual
to wait for a key press instead, or --plain to print the result to stdout.

Configuration files are loaded from (in priority order):
1. SIMULACRA_* environment variables (e.g. SIMULACRA_API__BASE_URL)
2. --config <path>        Explicit config file
3. ./simulacra.toml       Project-level config
4. ~/.config/simulacra-debate/config.toml   Global config

Example:
  simulacra-debate
  simulacra-debate --manual --api-base http://localhost:8000
  simulacra-debate --plain --rounds 2 --output json
"#)]
pub struct Cli {
    /// Wait for the user to start the debate instead of starting on launch
    #[arg(long)]
    pub manual: bool,

    /// Print the finished debate to stdout instead of opening the TUI
    #[arg(long)]
    pub plain: bool,

    /// Output format for --plain (text, json)
    #[arg(short, long, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Base URL of the debate service
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,

    /// Maximum number of exchange rounds the server should run
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub rounds: Option<u32>,

    /// Closing text to show after the transcript (summary, consensus)
    #[arg(long, value_name = "KIND")]
    pub closing: Option<ClosingKind>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Check that the debate service is reachable and exit
    #[arg(long)]
    pub health: bool,
}

impl Cli {
    /// Trigger policy forced by flags, if any
    pub fn trigger_override(&self) -> Option<TriggerPolicy> {
        self.manual.then_some(TriggerPolicy::Manual)
    }
}
