//! Process-level settings for the extension
//!
//! Values are read from environment variables with fallback defaults. These
//! settings shape the generated Dockerfiles and the log output; the `BP_*`
//! build configuration declared in `extension.toml` is handled separately by
//! [`crate::extension::ConfigurationResolver`].
//!
//! # Environment Variables
//!
//! - `CNB_USER_ID`: uid the build image switches back to - default: `1000`
//! - `CNB_GROUP_ID`: gid the build image switches back to - default: `1000`
//! - `BP_LOG_LEVEL`: logging level - default: `info`

use std::collections::HashMap;
use std::env;
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_CNB_USER_ID: u32 = 1000;
pub const DEFAULT_CNB_GROUP_ID: u32 = 1000;
const DEFAULT_LOG_LEVEL: &str = "info";
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

/// Snapshot of environment variables
///
/// Phases read variables through this instead of `std::env` so a context can
/// be assembled in tests without touching the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    pub fn from_process() -> Self {
        Self {
            vars: env::vars().collect(),
        }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionConfig {
    pub cnb_user_id: u32,
    pub cnb_group_id: u32,
    pub log_level: String,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            cnb_user_id: DEFAULT_CNB_USER_ID,
            cnb_group_id: DEFAULT_CNB_GROUP_ID,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ExtensionConfig {
    pub fn from_env(environment: &Environment) -> Result<Self, ConfigError> {
        let cnb_user_id = parse_id(environment, "CNB_USER_ID", DEFAULT_CNB_USER_ID)?;
        let cnb_group_id = parse_id(environment, "CNB_GROUP_ID", DEFAULT_CNB_GROUP_ID)?;

        let log_level = parse_log_level(environment.get("BP_LOG_LEVEL"));

        let config = Self {
            cnb_user_id,
            cnb_group_id,
            log_level,
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects a root uid/gid: the build image must drop back to an
    /// unprivileged user after installing packages. The log level only
    /// shapes output and is normalised by `from_env` instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cnb_user_id == 0 {
            return Err(ConfigError::ValidationFailed(
                "CNB_USER_ID must not be 0".to_string(),
            ));
        }
        if self.cnb_group_id == 0 {
            return Err(ConfigError::ValidationFailed(
                "CNB_GROUP_ID must not be 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn debug_enabled(&self) -> bool {
        matches!(self.log_level.as_str(), "debug" | "trace")
    }
}

/// Unknown levels fall back to `info`, matching the diagnostic logger.
fn parse_log_level(raw: Option<&str>) -> String {
    let level = match raw.map(str::trim) {
        None | Some("") => return DEFAULT_LOG_LEVEL.to_string(),
        Some(level) => level.to_lowercase(),
    };
    if LOG_LEVELS.contains(&level.as_str()) {
        level
    } else {
        warn!(level = %level, "unknown BP_LOG_LEVEL, using {}", DEFAULT_LOG_LEVEL);
        DEFAULT_LOG_LEVEL.to_string()
    }
}

fn parse_id(environment: &Environment, field: &str, default: u32) -> Result<u32, ConfigError> {
    match environment.get(field).map(str::trim) {
        None | Some("") => Ok(default),
        Some(raw) => raw.parse::<u32>().map_err(|e| ConfigError::ParseError {
            field: field.to_string(),
            error: e.to_string(),
        }),
    }
}
