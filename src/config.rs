//! Configuration management for the searchable fields service.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is read if present; stdout is never written to, since the service
//! uses it for responses.

use crate::domain::SearchMode;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the searchable fields service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Modes applied to index requests that omit `searchType`
    /// (default: fullTextSearch, autoComplete)
    pub default_modes: Vec<SearchMode>,

    /// Strictness applied to full-text queries that omit `strict` (default: true)
    pub default_strict: bool,

    /// Longest accepted value, in characters (default: 10000)
    pub max_value_chars: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `SEARCHABLE_DEFAULT_MODES`: Comma-separated mode names (default: both modes)
    /// - `SEARCHABLE_DEFAULT_STRICT`: `true` or `false` (default: true)
    /// - `SEARCHABLE_MAX_VALUE_CHARS`: Maximum value length (default: 10000)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let default_modes = match env::var("SEARCHABLE_DEFAULT_MODES") {
            Ok(val) => Self::parse_modes("SEARCHABLE_DEFAULT_MODES", &val)?,
            Err(_) => defaults.default_modes,
        };
        let default_strict =
            Self::parse_env_bool("SEARCHABLE_DEFAULT_STRICT", defaults.default_strict)?;
        let max_value_chars =
            Self::parse_env_usize("SEARCHABLE_MAX_VALUE_CHARS", defaults.max_value_chars)?;

        if max_value_chars == 0 {
            return Err(ConfigError::InvalidValue {
                var: "SEARCHABLE_MAX_VALUE_CHARS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            default_modes,
            default_strict,
            max_value_chars,
            log_level,
        })
    }

    /// Parse a comma-separated list of mode names.
    ///
    /// Blank entries are skipped; unknown names are rejected.
    fn parse_modes(var_name: &str, val: &str) -> ConfigResult<Vec<SearchMode>> {
        let mut modes = Vec::new();
        for name in val.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let mode: SearchMode = name.parse().map_err(|e| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("{}", e),
            })?;
            if !modes.contains(&mode) {
                modes.push(mode);
            }
        }
        Ok(modes)
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_modes: SearchMode::ALL.to_vec(),
            default_strict: true,
            max_value_chars: 10_000,
            log_level: "error".to_string(),
        }
    }
}
