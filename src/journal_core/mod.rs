//! Core journal data model without I/O operations.
//!
//! This module contains the structural representation of a journal entry:
//! the `JournalEntry` itself, the closed set of `Block` variants that make up
//! its content, and the `WritingContext` tags used to bias template
//! selection. Everything here is a plain value; the engines read these types
//! but never mutate them in place.

use crate::constants;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// One structural unit of journal-entry content.
///
/// Only `Text` blocks feed content analysis and template keyword matching.
/// The other variants are carried through structural operations untouched.
///
/// # Examples
///
/// ```
/// use journal_life::journal_core::Block;
///
/// let block = Block::text_block("Walked along the beach");
/// assert_eq!(block.text(), Some("Walked along the beach"));
///
/// let media = Block::Media { media_id: "img-42".to_string() };
/// assert_eq!(media.text(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Free-form text written by the user.
    Text { text: String },

    /// A reference to an attached photo, audio clip or other media item.
    Media { media_id: String },

    /// A guided question inserted by a template, awaiting an answer.
    Prompt { question: String },
}

impl Block {
    /// Creates a `Text` block.
    pub fn text_block(text: impl Into<String>) -> Self {
        Block::Text { text: text.into() }
    }

    /// Creates a `Prompt` block.
    pub fn prompt(question: impl Into<String>) -> Self {
        Block::Prompt {
            question: question.into(),
        }
    }

    /// Returns the analysable text of this block, if it has any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Text { text } => Some(text),
            Block::Media { .. } | Block::Prompt { .. } => None,
        }
    }
}

/// A single journal entry as supplied by the caller.
///
/// `blocks` is in display order. The core never mutates an entry; operations
/// that change content (such as applying a template) return a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Identity of the entry.
    pub id: Uuid,
    /// The user who owns the entry.
    pub owner_id: Uuid,
    /// Entry title.
    pub title: String,
    /// Ordered content blocks.
    #[serde(default)]
    pub blocks: Vec<Block>,
    /// When the entry was written.
    pub created_at: DateTime<Utc>,
}

impl JournalEntry {
    /// Creates an entry with a fresh id.
    pub fn new(
        owner_id: Uuid,
        title: impl Into<String>,
        blocks: Vec<Block>,
        created_at: DateTime<Utc>,
    ) -> Self {
        JournalEntry {
            id: Uuid::new_v4(),
            owner_id,
            title: title.into(),
            blocks,
            created_at,
        }
    }

    /// Joins the text of every `Text` block, in block order, with single spaces.
    ///
    /// Blank text blocks are skipped so they don't introduce double spaces.
    ///
    /// # Examples
    ///
    /// ```
    /// use journal_life::journal_core::{Block, JournalEntry};
    /// use chrono::Utc;
    /// use uuid::Uuid;
    ///
    /// let entry = JournalEntry::new(
    ///     Uuid::new_v4(),
    ///     "Sunday",
    ///     vec![
    ///         Block::text_block("Slow morning."),
    ///         Block::Media { media_id: "photo-1".to_string() },
    ///         Block::text_block("Long walk."),
    ///     ],
    ///     Utc::now(),
    /// );
    /// assert_eq!(entry.text_content(), "Slow morning. Long walk.");
    /// ```
    pub fn text_content(&self) -> String {
        self.blocks
            .iter()
            .filter_map(Block::text)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The title followed by the text content; used for template keyword matching.
    pub fn matching_text(&self) -> String {
        format!("{} {}", self.title, self.text_content())
    }

    /// The calendar date (UTC) on which the entry was written.
    pub fn created_on(&self) -> NaiveDate {
        self.created_at.date_naive()
    }
}

/// The situation in which an entry is being written.
///
/// Supplied by the caller on each request and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WritingContext {
    Morning,
    Evening,
    Travel,
    Gratitude,
    Reflection,
    /// Catch-all for anything not covered above.
    Custom,
}

impl WritingContext {
    /// Every writing context, in declaration order.
    pub const ALL: [WritingContext; 6] = [
        WritingContext::Morning,
        WritingContext::Evening,
        WritingContext::Travel,
        WritingContext::Gratitude,
        WritingContext::Reflection,
        WritingContext::Custom,
    ];

    /// The lowercase name used in JSON and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            WritingContext::Morning => "morning",
            WritingContext::Evening => "evening",
            WritingContext::Travel => "travel",
            WritingContext::Gratitude => "gratitude",
            WritingContext::Reflection => "reflection",
            WritingContext::Custom => "custom",
        }
    }
}

impl fmt::Display for WritingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WritingContext {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        WritingContext::ALL
            .into_iter()
            .find(|context| context.as_str() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = WritingContext::ALL.iter().map(|c| c.as_str()).collect();
                format!(
                    "unknown writing context '{}' (expected one of: {})",
                    s,
                    known.join(", ")
                )
            })
    }
}

/// Parse a date string in YYYY-MM-DD or YYYYMMDD format.
///
/// # Examples
///
/// ```
/// use journal_life::journal_core::parse_date;
///
/// assert_eq!(parse_date("2024-05-10").unwrap().to_string(), "2024-05-10");
/// assert_eq!(parse_date("20240510").unwrap().to_string(), "2024-05-10");
/// assert!(parse_date("May 10th").is_err());
/// ```
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, constants::DATE_FORMAT_ISO)
        .or_else(|_| NaiveDate::parse_from_str(date_str, constants::DATE_FORMAT_COMPACT))
}
