//! Configuration file loading for simulacra-debate
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SIMULACRA_*` environment variables (`SIMULACRA_API__BASE_URL`, ...)
//! 2. `--config <path>` specified file
//! 3. Project root: `./simulacra.toml` or `./.simulacra.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/simulacra-debate/config.toml`
//! 5. Default values
//!
//! CLI flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, DEFAULT_TIMEOUT_SECS, FileApiConfig, FileConfig, FileOutputConfig,
    FileSessionConfig,
};
pub use loader::ConfigLoader;
