//! Configuration management infrastructure
//!
//! - Active file resolution (system, user, session, `--config` override)
//! - YAML section loading
//! - Tool settings from defaults and `SPACEMAN_*` environment variables

pub mod loader;
pub mod resolver;
pub mod settings;

pub use loader::{ConfigError, ConfigLoader};
pub use resolver::{expand_tilde, file_exists, ConfigResolver};
pub use settings::{SettingsError, SettingsLoader};
