//! Error handling utilities for the journal-life application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, the
//! engine-specific `ScheduleError` and `TemplateError` types, and the
//! convenience type alias `AppResult`.

use chrono::NaiveDate;
use std::io;
use thiserror::Error;

/// Represents errors raised while scheduling a time capsule.
///
/// These are caller input errors: they are surfaced unmodified and never
/// retried.
///
/// # Examples
///
/// ```
/// use journal_life::errors::ScheduleError;
/// use chrono::NaiveDate;
///
/// let error = ScheduleError::InvalidSchedule {
///     target_date: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
///     earliest: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
/// };
///
/// assert!(format!("{}", error).contains("2023-12-31"));
/// assert!(format!("{}", error).contains("2024-01-01"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The target date precedes the earliest allowed opening date.
    #[error("Cannot schedule a time capsule for {target_date}: the earliest allowed date is {earliest}. A capsule opens no earlier than the day its entry was written or the day it is sealed, whichever is later.")]
    InvalidSchedule {
        /// The rejected target date
        target_date: NaiveDate,
        /// The earliest date the capsule could have been scheduled for
        earliest: NaiveDate,
    },
}

/// Represents errors raised by the template manager.
///
/// # Examples
///
/// ```
/// use journal_life::errors::TemplateError;
///
/// let error = TemplateError::EmptyCatalog;
/// assert!(format!("{}", error).contains("empty"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The template catalog has no templates to recommend.
    #[error("Template catalog is empty. Supply at least one template, ideally one tagged 'custom' as a catch-all.")]
    EmptyCatalog,

    /// A template id was requested that the catalog does not contain.
    #[error("Template not found: {0}")]
    NotFound(String),
}

/// Represents all possible errors that can occur in the journal-life application.
///
/// Engine errors convert into this type through `From`, so `?` works across
/// module boundaries.
///
/// # Examples
///
/// ```
/// use journal_life::errors::{AppError, TemplateError};
///
/// let error: AppError = TemplateError::EmptyCatalog.into();
/// assert!(format!("{}", error).starts_with("Template error"));
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from reading the input document.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors in journal logic (e.g., unknown entry ids, invalid dates).
    #[error("Journal logic error: {0}")]
    Journal(String),

    /// Malformed input or output documents.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors raised while scheduling time capsules.
    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    /// Errors raised by the template manager.
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

        let app_error: AppError = io_error.into();

        match app_error {
            AppError::Io(inner) => {
                assert_eq!(inner.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected AppError::Io variant"),
        }
    }

    #[test]
    fn test_app_error_display() {
        let config_error = AppError::Config("Invalid configuration".to_string());
        assert_eq!(
            format!("{}", config_error),
            "Configuration error: Invalid configuration"
        );

        let journal_error = AppError::Journal("Unknown entry".to_string());
        assert_eq!(
            format!("{}", journal_error),
            "Journal logic error: Unknown entry"
        );

        let template_error = AppError::Template(TemplateError::NotFound("x".to_string()));
        assert_eq!(
            format!("{}", template_error),
            "Template error: Template not found: x"
        );
    }

    #[test]
    fn test_schedule_error_conversion_to_app_error() {
        let schedule_error = ScheduleError::InvalidSchedule {
            target_date: date(2023, 12, 31),
            earliest: date(2024, 1, 1),
        };

        let app_error: AppError = schedule_error.clone().into();

        match app_error {
            AppError::Schedule(inner) => assert_eq!(inner, schedule_error),
            _ => panic!("Expected AppError::Schedule variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let app_error: AppError = json_error.into();
        assert!(format!("{}", app_error).starts_with("JSON error"));
    }

    #[test]
    fn test_error_display_includes_resolution_hints() {
        let message = format!("{}", TemplateError::EmptyCatalog);
        assert!(message.contains("custom"));

        let message = format!(
            "{}",
            ScheduleError::InvalidSchedule {
                target_date: date(2023, 12, 31),
                earliest: date(2024, 1, 1),
            }
        );
        assert!(message.contains("whichever is later"));
        assert!(message.contains("2024-01-01"));
    }
}
