pub mod config;
pub mod settings;

pub use config::{ConfigCandidate, ConfigPaths, ConfigValue, SectionMap};
pub use settings::{AppSettings, ColorChoice, LogConfig, LogFormat};
