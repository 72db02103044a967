//! Use cases (application services)

pub mod failure_message;
pub mod session_controller;
