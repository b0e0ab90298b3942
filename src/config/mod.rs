//! Configuration management for the journal-life application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. The core engines take every
//! tunable as a parameter; configuration only decides the defaults the binary
//! and the coordinator pass in.
//!
//! # Environment Variables
//!
//! - `JOURNAL_LIFE_LOOKAHEAD_DAYS`: Default upcoming-capsule window in days (defaults to 7)
//! - `JOURNAL_LIFE_LOG_FORMAT`: `text` or `json` (defaults to `text`)
//! - `JOURNAL_LIFE_LOG_LEVEL`: Default log level (defaults to `info`)
//! - `JOURNAL_LIFE_INPUT`: Path of the input document; `~` and `$VARS` are expanded

use crate::constants::{
    DEFAULT_LOG_LEVEL, DEFAULT_LOOKAHEAD_DAYS, ENV_VAR_INPUT, ENV_VAR_LOG_FORMAT,
    ENV_VAR_LOG_LEVEL, ENV_VAR_LOOKAHEAD_DAYS, LOG_FORMAT_JSON, LOG_FORMAT_TEXT,
    REDACTED_PLACEHOLDER, VALID_LOG_LEVELS,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the journal-life application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use journal_life::Config;
///
/// let config = Config {
///     lookahead_days: 14,
///     ..Config::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
pub struct Config {
    /// Default number of days ahead considered "upcoming" for time capsules.
    pub lookahead_days: i64,

    /// Log output format, `text` or `json`.
    pub log_format: String,

    /// Default log level; `RUST_LOG` still takes precedence at runtime.
    pub log_level: String,

    /// Input document used when the CLI is not given `--input`.
    pub input_path: Option<PathBuf>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("lookahead_days", &self.lookahead_days)
            .field("log_format", &self.log_format)
            .field("log_level", &self.log_level)
            .field(
                "input_path",
                &self.input_path.as_ref().map(|_| REDACTED_PLACEHOLDER),
            )
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            lookahead_days: DEFAULT_LOOKAHEAD_DAYS,
            log_format: LOG_FORMAT_TEXT.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            input_path: None,
        }
    }
}

impl Config {
    fn parse_lookahead_days(raw: &str) -> AppResult<i64> {
        let days: i64 = raw.trim().parse().map_err(|_| {
            AppError::Config(format!(
                "{} must be a whole number of days, got '{}'",
                ENV_VAR_LOOKAHEAD_DAYS, raw
            ))
        })?;
        if days < 0 {
            return Err(AppError::Config(format!(
                "{} cannot be negative, got {}",
                ENV_VAR_LOOKAHEAD_DAYS, days
            )));
        }
        Ok(days)
    }

    /// Expands `~` and environment variable references in an input path.
    pub fn expand_path(raw: &str) -> AppResult<PathBuf> {
        let expanded = shellexpand::full(raw)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
        let path = PathBuf::from(expanded.into_owned());
        if path.as_os_str().is_empty() {
            return Err(AppError::Config("Input path is empty".to_string()));
        }
        Ok(path)
    }

    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - `JOURNAL_LIFE_LOOKAHEAD_DAYS` is not a non-negative integer
    /// - `JOURNAL_LIFE_INPUT` cannot be expanded
    /// - the resulting configuration fails `validate`
    pub fn load() -> AppResult<Self> {
        let lookahead_days = match env::var(ENV_VAR_LOOKAHEAD_DAYS) {
            Ok(raw) => Config::parse_lookahead_days(&raw)?,
            Err(_) => DEFAULT_LOOKAHEAD_DAYS,
        };

        let log_format = env::var(ENV_VAR_LOG_FORMAT)
            .map(|format| format.trim().to_lowercase())
            .unwrap_or_else(|_| LOG_FORMAT_TEXT.to_string());

        let log_level = env::var(ENV_VAR_LOG_LEVEL)
            .map(|level| level.trim().to_lowercase())
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        let input_path = match env::var(ENV_VAR_INPUT) {
            Ok(raw) if !raw.trim().is_empty() => Some(Config::expand_path(&raw)?),
            _ => None,
        };

        let config = Config {
            lookahead_days,
            log_format,
            log_level,
            input_path,
        };
        config.validate()?;

        Ok(config)
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the window is negative or the log format
    /// or level is unknown.
    ///
    /// # Examples
    ///
    /// ```
    /// use journal_life::Config;
    ///
    /// let invalid = Config {
    ///     log_format: "xml".to_string(),
    ///     ..Config::default()
    /// };
    /// assert!(invalid.validate().is_err());
    /// ```
    pub fn validate(&self) -> AppResult<()> {
        if self.lookahead_days < 0 {
            return Err(AppError::Config(
                "Look-ahead window cannot be negative".to_string(),
            ));
        }

        if self.log_format != LOG_FORMAT_TEXT && self.log_format != LOG_FORMAT_JSON {
            return Err(AppError::Config(format!(
                "Invalid log format '{}': expected '{}' or '{}'",
                self.log_format, LOG_FORMAT_TEXT, LOG_FORMAT_JSON
            )));
        }

        if !VALID_LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(AppError::Config(format!(
                "Invalid log level '{}': expected one of {}",
                self.log_level,
                VALID_LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}
