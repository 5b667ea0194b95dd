//! Spaceman - configuration resolution and console labels
//!
//! Resolves which configuration file applies to an invocation (system-wide,
//! per-user, session, or an explicit `--config` override), loads the
//! requested top-level sections from it, and renders field names as
//! readable, optionally colored labels.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): configuration values and settings types
//! - **Infrastructure Layer** (`infrastructure`): file resolution, YAML
//!   loading, tool settings, logging setup
//! - **CLI Layer** (`cli`): argument parsing, commands, labels, and the
//!   single fatal-error exit path
//!
//! # Example
//!
//! ```no_run
//! use spaceman::{ConfigLoader, ConfigResolver};
//!
//! let mut resolver = ConfigResolver::new("spaceman");
//! let sections = ConfigLoader::load_active(&mut resolver, "", &["server"])?;
//! println!("{:?}", sections.get("server"));
//! # Ok::<(), spaceman::ConfigError>(())
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use cli::display::{format_label, LabelFormatter, LabelStyle};
pub use cli::ConsoleReporter;
pub use domain::models::{AppSettings, ConfigPaths, ConfigValue, SectionMap};
pub use infrastructure::config::{ConfigError, ConfigLoader, ConfigResolver};
