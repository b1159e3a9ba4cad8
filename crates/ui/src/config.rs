//! Application configuration from environment variables.
//!
//! | variable                     | values             | default         |
//! |------------------------------|--------------------|-----------------|
//! | `STOCKROOM_LOG_FORMAT`       | `json`, `pretty`   | `pretty`        |
//! | `STOCKROOM_LOG_FILTER`       | `EnvFilter` syntax | `info`          |
//! | `STOCKROOM_CREATE_MODE`      | `stub`, `persist`  | `stub`          |
//! | `STOCKROOM_SEED_SAMPLE_DATA` | boolean            | `true`          |
//! | `STOCKROOM_USERNAME`         | text               | `admin`         |
//! | `STOCKROOM_PASSWORD`         | text               | `admin123`      |
//! | `STOCKROOM_ROLE`             | text               | `Administrator` |

use thiserror::Error;

use stockroom_auth::{Credentials, Role};
use stockroom_infra::CreateMode;
use stockroom_observability::LogFormat;

pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";
pub const LOG_FILTER_VAR: &str = "STOCKROOM_LOG_FILTER";
pub const CREATE_MODE_VAR: &str = "STOCKROOM_CREATE_MODE";
pub const SEED_SAMPLE_DATA_VAR: &str = "STOCKROOM_SEED_SAMPLE_DATA";
pub const USERNAME_VAR: &str = "STOCKROOM_USERNAME";
pub const PASSWORD_VAR: &str = "STOCKROOM_PASSWORD";
pub const ROLE_VAR: &str = "STOCKROOM_ROLE";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {message}")]
    Invalid { var: &'static str, message: String },
}

impl ConfigError {
    fn invalid(var: &'static str, message: impl ToString) -> Self {
        Self::Invalid {
            var,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_format: LogFormat,
    pub log_filter: String,
    /// Whether confirmed drafts are stored or only logged.
    pub create_mode: CreateMode,
    pub seed_sample_data: bool,
    pub credentials: Credentials,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::default(),
            log_filter: "info".to_string(),
            create_mode: CreateMode::default(),
            seed_sample_data: true,
            credentials: Credentials {
                username: "admin".to_string(),
                password: "admin123".to_string(),
                role: Role::administrator(),
            },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            config.log_format = raw
                .parse()
                .map_err(|e| ConfigError::invalid(LOG_FORMAT_VAR, e))?;
        }
        if let Some(raw) = lookup(LOG_FILTER_VAR) {
            if !raw.trim().is_empty() {
                config.log_filter = raw;
            }
        }
        if let Some(raw) = lookup(CREATE_MODE_VAR) {
            config.create_mode = raw
                .parse()
                .map_err(|e| ConfigError::invalid(CREATE_MODE_VAR, e))?;
        }
        if let Some(raw) = lookup(SEED_SAMPLE_DATA_VAR) {
            config.seed_sample_data = parse_bool(SEED_SAMPLE_DATA_VAR, &raw)?;
        }
        if let Some(username) = lookup(USERNAME_VAR) {
            config.credentials.username = username;
        }
        if let Some(password) = lookup(PASSWORD_VAR) {
            config.credentials.password = password;
        }
        if let Some(role) = lookup(ROLE_VAR) {
            config.credentials.role = Role::new(role);
        }

        Ok(config)
    }
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::invalid(var, format!("expected a boolean, got {other:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.create_mode, CreateMode::Stub);
        assert!(config.seed_sample_data);
    }

    #[test]
    fn reads_every_variable() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (LOG_FORMAT_VAR, "json"),
            (LOG_FILTER_VAR, "stockroom_ui=debug"),
            (CREATE_MODE_VAR, "persist"),
            (SEED_SAMPLE_DATA_VAR, "no"),
            (USERNAME_VAR, "storekeeper"),
            (PASSWORD_VAR, "s3cret"),
            (ROLE_VAR, "Store Officer"),
        ]))
        .unwrap();

        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_filter, "stockroom_ui=debug");
        assert_eq!(config.create_mode, CreateMode::Persist);
        assert!(!config.seed_sample_data);
        assert_eq!(config.credentials.username, "storekeeper");
        assert_eq!(config.credentials.password, "s3cret");
        assert_eq!(config.credentials.role.as_str(), "Store Officer");
    }

    #[test]
    fn blank_filter_keeps_default() {
        let config = AppConfig::from_lookup(lookup_from(&[(LOG_FILTER_VAR, "  ")])).unwrap();
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn invalid_values_name_the_variable() {
        let err = AppConfig::from_lookup(lookup_from(&[(CREATE_MODE_VAR, "database")])).unwrap_err();
        let ConfigError::Invalid { var, .. } = &err;
        assert_eq!(*var, CREATE_MODE_VAR);
        assert!(err.to_string().contains("STOCKROOM_CREATE_MODE"));

        let err = AppConfig::from_lookup(lookup_from(&[(SEED_SAMPLE_DATA_VAR, "maybe")])).unwrap_err();
        assert!(err.to_string().contains("boolean"));
    }
}
