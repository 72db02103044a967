//! Infrastructure layer for simulacra-debate
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, DEFAULT_TIMEOUT_SECS, FileApiConfig, FileConfig, FileOutputConfig,
    FileSessionConfig,
};
pub use http::{ApiBase, DEFAULT_API_BASE, HttpDebateGateway, HttpError};
