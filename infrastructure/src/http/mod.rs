//! HTTP adapter for the debate service
//!
//! - `POST {base}/debate/run[?max_exchange_rounds=N]` with body `{}`
//! - `GET {base}/health`

pub mod api_base;
pub mod error;
pub mod gateway;

pub use api_base::{ApiBase, DEFAULT_API_BASE};
pub use error::HttpError;
pub use gateway::HttpDebateGateway;
