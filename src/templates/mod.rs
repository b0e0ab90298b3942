//! Journal template catalog, recommendation and application.
//!
//! Templates are tagged with the writing contexts they suit and a set of
//! keyword hints. Recommendation scores every template against a context and
//! some content and picks the best one; ties go to the smallest template id,
//! so the answer never depends on catalog order.

use crate::constants::{CONTEXT_MATCH_WEIGHT, KEYWORD_HIT_WEIGHT};
use crate::errors::TemplateError;
use crate::journal_core::{Block, JournalEntry, WritingContext};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// A reusable block skeleton for a particular writing situation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalTemplate {
    /// Stable identifier; also the tie-break key for recommendations.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Writing contexts this template is designed for.
    #[serde(default)]
    pub context_tags: BTreeSet<WritingContext>,
    /// Words that suggest the template fits the content being written.
    #[serde(default)]
    pub keyword_hints: BTreeSet<String>,
    /// Blocks appended to an entry when the template is applied.
    #[serde(default)]
    pub block_skeleton: Vec<Block>,
}

/// Built-in catalog: id, name, contexts, keyword hints, prompts.
type TemplateRow = (
    &'static str,
    &'static str,
    &'static [WritingContext],
    &'static [&'static str],
    &'static [&'static str],
);

const DEFAULT_CATALOG: &[TemplateRow] = &[
    (
        "custom-freeform",
        "Freeform",
        &[WritingContext::Custom],
        &[],
        &["What's on your mind?"],
    ),
    (
        "evening-wind-down",
        "Evening Wind-Down",
        &[WritingContext::Evening, WritingContext::Reflection],
        &["tired", "tonight", "sleep", "day"],
        &[
            "What was the best part of today?",
            "What drained your energy?",
            "What will you let go of before bed?",
        ],
    ),
    (
        "gratitude-list",
        "Three Good Things",
        &[WritingContext::Gratitude],
        &["grateful", "thankful", "thanks", "appreciate"],
        &[
            "Name three things you're grateful for.",
            "Who made a difference to you today?",
        ],
    ),
    (
        "morning-pages",
        "Morning Pages",
        &[WritingContext::Morning],
        &["morning", "coffee", "plan", "today", "woke"],
        &[
            "How did you sleep?",
            "What is your one priority for today?",
            "What are you looking forward to?",
        ],
    ),
    (
        "reflection-deep-dive",
        "Deep Reflection",
        &[WritingContext::Reflection],
        &["feel", "felt", "think", "lesson", "why", "decision"],
        &[
            "What happened, in plain facts?",
            "How did it make you feel?",
            "What would you do differently next time?",
        ],
    ),
    (
        "travel-log",
        "Travel Log",
        &[WritingContext::Travel],
        &["beach", "flight", "hotel", "trip", "city", "museum", "train"],
        &[
            "Where are you right now?",
            "What did you see that you've never seen before?",
            "What local food did you try?",
        ],
    ),
];

fn default_catalog() -> Vec<JournalTemplate> {
    DEFAULT_CATALOG
        .iter()
        .map(|(id, name, contexts, hints, prompts)| JournalTemplate {
            id: id.to_string(),
            name: name.to_string(),
            context_tags: contexts.iter().copied().collect(),
            keyword_hints: hints.iter().map(|hint| hint.to_string()).collect(),
            block_skeleton: prompts.iter().map(|prompt| Block::prompt(*prompt)).collect(),
        })
        .collect()
}

/// Scores `template` for a writing context and some content.
///
/// A tagged context is worth `CONTEXT_MATCH_WEIGHT`; every non-empty keyword
/// hint found in `content` (case-insensitive substring) adds
/// `KEYWORD_HIT_WEIGHT`.
///
/// # Examples
///
/// ```
/// use journal_life::journal_core::WritingContext;
/// use journal_life::templates::{score_template, JournalTemplate};
///
/// let template = JournalTemplate {
///     id: "t1".to_string(),
///     name: "Beach days".to_string(),
///     context_tags: [WritingContext::Travel].into_iter().collect(),
///     keyword_hints: ["beach".to_string()].into_iter().collect(),
///     block_skeleton: vec![],
/// };
///
/// assert_eq!(score_template(&template, WritingContext::Travel, "A day at the BEACH"), 11);
/// assert_eq!(score_template(&template, WritingContext::Morning, "coffee"), 0);
/// ```
pub fn score_template(template: &JournalTemplate, context: WritingContext, content: &str) -> u32 {
    let content = content.to_lowercase();

    let context_score = if template.context_tags.contains(&context) {
        CONTEXT_MATCH_WEIGHT
    } else {
        0
    };
    let keyword_hits = template
        .keyword_hints
        .iter()
        .filter(|hint| !hint.is_empty() && content.contains(&hint.to_lowercase()))
        .count() as u32;

    context_score + keyword_hits * KEYWORD_HIT_WEIGHT
}

/// Returns a new entry with the template's skeleton appended to its blocks.
///
/// Identity fields are carried over and the input entry is left untouched.
pub fn apply_template(template: &JournalTemplate, entry: &JournalEntry) -> JournalEntry {
    let mut blocks = Vec::with_capacity(entry.blocks.len() + template.block_skeleton.len());
    blocks.extend(entry.blocks.iter().cloned());
    blocks.extend(template.block_skeleton.iter().cloned());

    debug!(
        "Applied template '{}' to entry {}: {} -> {} blocks",
        template.id,
        entry.id,
        entry.blocks.len(),
        blocks.len()
    );

    JournalEntry {
        id: entry.id,
        owner_id: entry.owner_id,
        title: entry.title.clone(),
        blocks,
        created_at: entry.created_at,
    }
}

/// Owns the read-only template catalog.
#[derive(Debug, Clone)]
pub struct TemplateManager {
    templates: Vec<JournalTemplate>,
}

impl TemplateManager {
    /// Creates a manager over the given catalog.
    ///
    /// An empty catalog is accepted here and reported when a recommendation
    /// is requested. A catalog without a `custom` template still works but
    /// is logged, since it has no catch-all.
    pub fn new(templates: Vec<JournalTemplate>) -> Self {
        let has_catch_all = templates
            .iter()
            .any(|template| template.context_tags.contains(&WritingContext::Custom));
        if !templates.is_empty() && !has_catch_all {
            warn!(
                "Template catalog of {} templates has no '{}' template",
                templates.len(),
                WritingContext::Custom
            );
        }

        TemplateManager { templates }
    }

    /// Creates a manager over the built-in catalog.
    pub fn with_default_catalog() -> Self {
        TemplateManager::new(default_catalog())
    }

    /// All templates in catalog order.
    pub fn templates(&self) -> &[JournalTemplate] {
        &self.templates
    }

    /// Looks up a template by id.
    pub fn get(&self, id: &str) -> Result<&JournalTemplate, TemplateError> {
        self.templates
            .iter()
            .find(|template| template.id == id)
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))
    }

    /// Picks the best template for `context` and `content`.
    ///
    /// Templates matching nothing still score zero and stay eligible, so a
    /// non-empty catalog always produces a result.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::EmptyCatalog` if the catalog has no templates.
    pub fn recommend_template(
        &self,
        context: WritingContext,
        content: &str,
    ) -> Result<&JournalTemplate, TemplateError> {
        let (best, score) = self
            .templates
            .iter()
            .map(|template| (template, score_template(template, context, content)))
            .min_by(|(a, a_score), (b, b_score)| {
                b_score.cmp(a_score).then_with(|| a.id.cmp(&b.id))
            })
            .ok_or(TemplateError::EmptyCatalog)?;

        debug!(
            "Recommended template '{}' for context {} (score {})",
            best.id, context, score
        );
        Ok(best)
    }
}

impl Default for TemplateManager {
    fn default() -> Self {
        TemplateManager::with_default_catalog()
    }
}
