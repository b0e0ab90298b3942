//! The coordinator that ties the engines together.
//!
//! `JournalLifeCore` is the single entry point callers use. It forwards each
//! request to the content analysis engine, the time capsule functions or the
//! template manager, and assembles the combined `JournalInsights` for an
//! entry. It holds no logic of its own beyond that wiring.

use crate::analysis::{self, ContentAnalysis};
use crate::capsule::{self, TimeCapsule};
use crate::config::Config;
use crate::constants::DEFAULT_LOOKAHEAD_DAYS;
use crate::errors::{AppResult, ScheduleError, TemplateError};
use crate::journal_core::{JournalEntry, WritingContext};
use crate::templates::{self, JournalTemplate, TemplateManager};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Everything the assistant knows about one entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalInsights {
    pub content_analysis: ContentAnalysis,
    pub recommended_template: JournalTemplate,
    /// Same as `content_analysis.suggestions`.
    pub suggestions: Vec<String>,
}

/// Composes content analysis, time capsules and template recommendation.
///
/// # Examples
///
/// ```
/// use journal_life::assistant::JournalLifeCore;
/// use journal_life::journal_core::{Block, JournalEntry, WritingContext};
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let core = JournalLifeCore::default();
/// let entry = JournalEntry::new(
///     Uuid::new_v4(),
///     "Lisbon",
///     vec![Block::text_block("Our flight was late but the beach made up for it.")],
///     Utc::now(),
/// );
///
/// let insights = core
///     .intelligent_journal_assistant(&entry, WritingContext::Travel)
///     .unwrap();
/// assert_eq!(insights.recommended_template.id, "travel-log");
/// assert_eq!(insights.suggestions, insights.content_analysis.suggestions);
/// ```
#[derive(Debug, Clone)]
pub struct JournalLifeCore {
    templates: TemplateManager,
    lookahead_days: i64,
}

impl JournalLifeCore {
    /// Creates a coordinator over `templates` with the given default
    /// upcoming-capsule window.
    pub fn new(templates: TemplateManager, lookahead_days: i64) -> Self {
        JournalLifeCore {
            templates,
            lookahead_days,
        }
    }

    /// Creates a coordinator with the built-in catalog and the configured window.
    pub fn from_config(config: &Config) -> Self {
        JournalLifeCore::new(TemplateManager::with_default_catalog(), config.lookahead_days)
    }

    /// The template manager backing recommendations.
    pub fn template_manager(&self) -> &TemplateManager {
        &self.templates
    }

    /// The window used when `get_upcoming_time_capsules` gets no explicit one.
    pub fn lookahead_days(&self) -> i64 {
        self.lookahead_days
    }

    pub fn analyze_journal_content(&self, entry: &JournalEntry) -> ContentAnalysis {
        analysis::analyze_content(entry)
    }

    pub fn recommend_template(
        &self,
        context: WritingContext,
        content: &str,
    ) -> Result<&JournalTemplate, TemplateError> {
        self.templates.recommend_template(context, content)
    }

    pub fn create_time_capsule(
        &self,
        entry: &JournalEntry,
        target_date: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<TimeCapsule, ScheduleError> {
        capsule::create_capsule(entry, target_date, now)
    }

    pub fn check_due_time_capsules(
        &self,
        capsules: &[TimeCapsule],
        current_date: NaiveDate,
    ) -> Vec<TimeCapsule> {
        capsule::check_due_capsules(capsules, current_date)
    }

    /// Upcoming capsules within `days_ahead`, or the default window if `None`.
    pub fn get_upcoming_time_capsules(
        &self,
        capsules: &[TimeCapsule],
        current_date: NaiveDate,
        days_ahead: Option<i64>,
    ) -> Vec<TimeCapsule> {
        let window = days_ahead.unwrap_or(self.lookahead_days);
        capsule::get_upcoming_capsules(capsules, current_date, window)
    }

    pub fn get_anniversary_entries(
        &self,
        entries: &[JournalEntry],
        current_date: NaiveDate,
    ) -> Vec<JournalEntry> {
        capsule::get_anniversary_entries(entries, current_date)
    }

    /// Recommends a template for `entry` in `context` and applies it.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::EmptyCatalog` if there is nothing to apply.
    pub fn apply_template_to_entry(
        &self,
        entry: &JournalEntry,
        context: WritingContext,
    ) -> Result<JournalEntry, TemplateError> {
        let template = self
            .templates
            .recommend_template(context, &entry.matching_text())?;
        Ok(templates::apply_template(template, entry))
    }

    /// Applies the catalog template with id `template_id` to `entry`.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::NotFound` if the catalog has no such template.
    pub fn apply_named_template(
        &self,
        entry: &JournalEntry,
        template_id: &str,
    ) -> Result<JournalEntry, TemplateError> {
        let template = self.templates.get(template_id)?;
        Ok(templates::apply_template(template, entry))
    }

    /// Analyzes `entry` and recommends a template for it in one call.
    ///
    /// Template keywords are matched against the entry's title followed by
    /// its text.
    ///
    /// # Errors
    ///
    /// Returns an `AppError::Template` if the catalog is empty.
    pub fn intelligent_journal_assistant(
        &self,
        entry: &JournalEntry,
        context: WritingContext,
    ) -> AppResult<JournalInsights> {
        let content_analysis = self.analyze_journal_content(entry);
        let recommended_template = self
            .recommend_template(context, &entry.matching_text())?
            .clone();

        info!(
            "Insights for entry {}: sentiment {:?}, template '{}'",
            entry.id, content_analysis.sentiment, recommended_template.id
        );

        Ok(JournalInsights {
            suggestions: content_analysis.suggestions.clone(),
            content_analysis,
            recommended_template,
        })
    }
}

impl Default for JournalLifeCore {
    fn default() -> Self {
        JournalLifeCore::new(TemplateManager::with_default_catalog(), DEFAULT_LOOKAHEAD_DAYS)
    }
}
