use anyhow::{Context, Result};
use figment::providers::{Env, Serialized};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::settings::AppSettings;
use crate::infrastructure::logging::{parse_log_level, LOG_LEVELS};

/// Environment prefix for tool settings, e.g. `SPACEMAN_LOG__LEVEL=debug`.
pub const ENV_PREFIX: &str = "SPACEMAN_";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Invalid log level: {0}. Must be one of: {names}", names = level_names())]
    InvalidLogLevel(String),
}

fn level_names() -> String {
    LOG_LEVELS.map(|(name, _)| name).join(", ")
}

/// Loads [`AppSettings`] with hierarchical merging.
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. Environment variables (`SPACEMAN_*` prefix, `__` separates nesting)
    pub fn load() -> Result<AppSettings> {
        let settings: AppSettings = Figment::new()
            .merge(Serialized::defaults(AppSettings::default()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract settings from environment")?;

        Self::validate(&settings)?;
        Ok(settings)
    }

    /// Validate settings after loading
    pub fn validate(settings: &AppSettings) -> Result<(), SettingsError> {
        if parse_log_level(&settings.log.level).is_err() {
            return Err(SettingsError::InvalidLogLevel(settings.log.level.clone()));
        }

        Ok(())
    }
}
