//! Infrastructure layer: filesystem-backed configuration and logging setup.

pub mod config;
pub mod logging;
