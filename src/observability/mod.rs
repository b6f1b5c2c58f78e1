//! # Observability
//!
//! Structured logging for the service. One log line = one event, JSON,
//! synchronous, deterministic key ordering.

mod logger;

pub use logger::{Logger, Severity};
