//! Constants used throughout the application.
//!
//! Scoring weights, analysis thresholds and look-ahead defaults live here so
//! they can be tuned in one place. Lexicons and the built-in template catalog
//! are tables in their own modules.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "journal-life";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str =
    "Content analysis, time capsules and template recommendations for journal entries";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Log levels accepted by the configuration.
pub const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

// Configuration Keys & Environment Variables
/// Environment variable overriding the default upcoming-capsule window.
pub const ENV_VAR_LOOKAHEAD_DAYS: &str = "JOURNAL_LIFE_LOOKAHEAD_DAYS";
/// Environment variable selecting the log format (`text` or `json`).
pub const ENV_VAR_LOG_FORMAT: &str = "JOURNAL_LIFE_LOG_FORMAT";
/// Environment variable selecting the default log level.
pub const ENV_VAR_LOG_LEVEL: &str = "JOURNAL_LIFE_LOG_LEVEL";
/// Environment variable naming the default CLI input document.
pub const ENV_VAR_INPUT: &str = "JOURNAL_LIFE_INPUT";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";
/// Default number of days ahead considered "upcoming" for time capsules.
pub const DEFAULT_LOOKAHEAD_DAYS: i64 = 7;

// Content Analysis
/// Below this many words an entry gets an "add more detail" suggestion.
pub const SHORT_TEXT_WORD_COUNT: usize = 20;
/// Word count at which the length component of the score saturates.
pub const FULL_LENGTH_WORD_COUNT: usize = 200;
/// Theme count at which the theme component of the score saturates.
pub const FULL_THEME_COUNT: usize = 3;
/// Share of the score contributed by text length.
pub const LENGTH_SCORE_WEIGHT: f64 = 0.6;
/// Share of the score contributed by detected themes.
pub const THEME_SCORE_WEIGHT: f64 = 0.4;
/// Lower bound of the analysis score.
pub const MIN_ANALYSIS_SCORE: f64 = 0.0;
/// Upper bound of the analysis score.
pub const MAX_ANALYSIS_SCORE: f64 = 1.0;

// Template Scoring
/// Points awarded when a template is tagged with the requested writing context.
pub const CONTEXT_MATCH_WEIGHT: u32 = 10;
/// Points awarded per keyword hint found in the content.
pub const KEYWORD_HIT_WEIGHT: u32 = 1;

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "journal-life";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
