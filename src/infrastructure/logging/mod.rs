//! Logging infrastructure
//!
//! Structured logging to stderr using tracing and tracing-subscriber.

pub mod logger;

pub use logger::{parse_log_level, Logger, LOG_LEVELS};
