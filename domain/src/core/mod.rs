//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: display helpers for transcript text

pub mod error;
pub mod string;
