//! Process-level setup: configuration loading and tracing.

pub mod config;
pub mod logger;
