//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML.

use serde::{Deserialize, Serialize};

use crate::config::loader::ConfigError;
use crate::taxonomy::LogLevel;

/// Environment variable overriding the configured minimum level.
pub const LEVEL_ENV: &str = "LOG_FACADE_LEVEL";

/// Root logger configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LoggerConfig {
    /// Minimum level written by the engine (default: verbose).
    pub level: LogLevel,

    /// Where rendered lines go.
    pub transport: TransportKind,
}

/// Output transport selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    #[default]
    Stdout,
    Stderr,
    /// Re-emit lines as `tracing` events.
    Tracing,
}

impl LoggerConfig {
    /// Apply `LOG_FACADE_LEVEL` when it is set.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        let value = std::env::var(LEVEL_ENV).ok();
        self.with_level_override(value.as_deref())
    }

    /// Replace the level with `value`, if given.
    pub fn with_level_override(mut self, value: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(value) = value {
            self.level = value.parse().map_err(|source| ConfigError::InvalidLevel {
                var: LEVEL_ENV,
                source,
            })?;
        }
        Ok(self)
    }
}
