//! Application-level configuration.
//!
//! - [`SessionConfig`]: how the session controller triggers and interprets runs

pub mod session_config;

pub use session_config::SessionConfig;
