//! Layered configuration loading.
//!
//! Sources in priority order, highest wins:
//! 1. Environment variables (`TASKBOARD_*` prefix, `__` between sections)
//! 2. `taskboard.toml` in the working directory
//! 3. Built-in defaults
//!
//! `TASKBOARD_BOARD__RETRY=none` maps to `board.retry`, and
//! `TASKBOARD_DATABASE__URL` to `database.url`.

mod board;
mod database;
mod error;

pub use board::{BoardConfig, RetryPolicy};
pub use database::DatabaseConfig;
pub use error::ConfigError;

use chrono::format::{Item, StrftimeItems};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// File name of the optional project-local configuration file.
pub const CONFIG_FILE: &str = "taskboard.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Database settings.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Board settings.
    #[serde(default)]
    pub board: BoardConfig,
}

impl AppConfig {
    /// Loads configuration from defaults, `taskboard.toml` and the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source cannot be parsed or a value is
    /// invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Builds the provider chain used by [`AppConfig::load`].
    #[must_use]
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed("TASKBOARD_").split("__"))
    }

    /// Extracts and validates configuration from `figment`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when extraction fails or a value is invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.database.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                field: "database.max_connections",
                reason: "must be at least 1".to_owned(),
            });
        }

        let format = self.board.date_format.as_str();
        if format.trim().is_empty()
            || StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
        {
            return Err(ConfigError::InvalidValue {
                field: "board.date_format",
                reason: format!("'{format}' is not a valid date format"),
            });
        }
        Ok(())
    }
}
