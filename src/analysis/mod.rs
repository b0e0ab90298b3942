//! Rule-based content analysis for journal entries.
//!
//! The engine reads the `Text` blocks of an entry and derives a sentiment,
//! a set of themes, a list of writing suggestions and a quality score. All
//! signals come from static lexicon tables, so results are deterministic and
//! the function never fails: an entry with no text yields a neutral analysis
//! with a single "add more detail" suggestion.

use crate::constants::{
    FULL_LENGTH_WORD_COUNT, FULL_THEME_COUNT, LENGTH_SCORE_WEIGHT, MAX_ANALYSIS_SCORE,
    MIN_ANALYSIS_SCORE, SHORT_TEXT_WORD_COUNT, THEME_SCORE_WEIGHT,
};
use crate::journal_core::JournalEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Overall emotional tone of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// A topic detected in an entry's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Travel,
    Work,
    Family,
    Health,
    Nature,
    Food,
    Learning,
    Gratitude,
}

impl Theme {
    /// Follow-up question offered when this theme is the first one detected.
    fn follow_up(&self) -> &'static str {
        match self {
            Theme::Travel => "Describe one place from this trip you want to remember in ten years.",
            Theme::Work => "What did you learn about how you work best today?",
            Theme::Family => "Which moment with your family would you like to hold on to?",
            Theme::Health => "How did your body feel today, and what did it need?",
            Theme::Nature => "Which sounds, smells or colours stood out while you were outside?",
            Theme::Food => "Who did you share a meal with, and what made it memorable?",
            Theme::Learning => "How will you put what you learned into practice this week?",
            Theme::Gratitude => "Why does the thing you're grateful for matter so much to you?",
        }
    }
}

/// Derived signals for one journal entry. Computed fresh on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentAnalysis {
    /// Emotional tone by simple polarity majority.
    pub sentiment: Sentiment,
    /// Topics detected from the theme lexicon.
    pub themes: BTreeSet<Theme>,
    /// Writing prompts, most relevant first. Never empty.
    pub suggestions: Vec<String>,
    /// Combined length/theme quality metric in `[0.0, 1.0]`.
    pub score: f64,
    /// Number of words the analysis was based on.
    pub word_count: usize,
}

/// Suggestion used when the entry is empty or very short.
pub const ADD_DETAIL_SUGGESTION: &str =
    "Add more detail: what happened, who was there, and how did it feel?";
/// Suggestion used when no theme was detected.
pub const FIND_TOPIC_SUGGESTION: &str =
    "Try writing about a specific person, place or activity from today.";
/// Suggestion used when the entry reads as negative.
pub const SELF_CARE_SUGGESTION: &str =
    "It sounds like a hard day. What is one small, kind thing you could do for yourself right now?";
/// Fallback when no other rule produced a suggestion.
pub const REFLECTIVE_SUGGESTION: &str = "What made today different from yesterday?";

const THEME_LEXICON: &[(Theme, &[&str])] = &[
    (
        Theme::Travel,
        &[
            "travel", "trip", "flight", "airport", "beach", "hotel", "journey", "vacation",
            "holiday", "abroad", "train", "passport", "explore", "explored", "city", "tour",
        ],
    ),
    (
        Theme::Work,
        &[
            "work", "job", "office", "meeting", "meetings", "project", "deadline", "boss",
            "colleague", "colleagues", "career", "client", "presentation", "team",
        ],
    ),
    (
        Theme::Family,
        &[
            "family", "mom", "dad", "mother", "father", "sister", "brother", "kids", "son",
            "daughter", "parents", "grandma", "grandpa", "wife", "husband",
        ],
    ),
    (
        Theme::Health,
        &[
            "health", "exercise", "gym", "run", "ran", "running", "workout", "sleep", "slept",
            "doctor", "sick", "yoga", "meditation", "meditated", "tired",
        ],
    ),
    (
        Theme::Nature,
        &[
            "nature", "park", "forest", "mountain", "mountains", "hike", "hiking", "garden",
            "ocean", "river", "lake", "sunset", "sunrise", "trees", "outdoors",
        ],
    ),
    (
        Theme::Food,
        &[
            "food", "dinner", "lunch", "breakfast", "cooked", "cooking", "meal", "restaurant",
            "recipe", "baked", "coffee", "ate",
        ],
    ),
    (
        Theme::Learning,
        &[
            "learn", "learned", "learning", "read", "reading", "book", "course", "study",
            "studied", "class", "lesson", "practice", "practiced",
        ],
    ),
    (
        Theme::Gratitude,
        &[
            "grateful", "gratitude", "thankful", "thanks", "appreciate", "appreciated",
            "blessed", "fortunate",
        ],
    ),
];

const POSITIVE_WORDS: &[&str] = &[
    "happy", "joy", "joyful", "love", "loved", "great", "good", "wonderful", "amazing",
    "excited", "calm", "peaceful", "proud", "grateful", "thankful", "fun", "beautiful",
    "relaxed", "glad", "delighted", "hopeful", "content", "success", "laughed", "smile",
];

const NEGATIVE_WORDS: &[&str] = &[
    "sad", "angry", "upset", "stressed", "stress", "anxious", "anxiety", "worried", "tired",
    "exhausted", "lonely", "bad", "terrible", "awful", "frustrated", "hurt", "cried", "fear",
    "afraid", "disappointed", "overwhelmed", "sick", "miserable", "hate",
];

/// Splits text into lowercase word tokens.
///
/// Apostrophes stay inside words so contractions remain one token.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|token| token.trim_matches('\'').to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

fn detect_themes(tokens: &[String]) -> BTreeSet<Theme> {
    THEME_LEXICON
        .iter()
        .filter(|(_, keywords)| tokens.iter().any(|token| keywords.contains(&token.as_str())))
        .map(|(theme, _)| *theme)
        .collect()
}

fn count_hits(tokens: &[String], lexicon: &[&str]) -> usize {
    tokens
        .iter()
        .filter(|token| lexicon.contains(&token.as_str()))
        .count()
}

fn detect_sentiment(tokens: &[String]) -> Sentiment {
    let positive = count_hits(tokens, POSITIVE_WORDS);
    let negative = count_hits(tokens, NEGATIVE_WORDS);

    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}

fn build_suggestions(
    word_count: usize,
    themes: &BTreeSet<Theme>,
    sentiment: Sentiment,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if word_count < SHORT_TEXT_WORD_COUNT {
        suggestions.push(ADD_DETAIL_SUGGESTION.to_string());
    }
    if themes.is_empty() {
        suggestions.push(FIND_TOPIC_SUGGESTION.to_string());
    }
    if sentiment == Sentiment::Negative {
        suggestions.push(SELF_CARE_SUGGESTION.to_string());
    }
    if let Some(theme) = themes.iter().next() {
        suggestions.push(theme.follow_up().to_string());
    }
    if suggestions.is_empty() {
        suggestions.push(REFLECTIVE_SUGGESTION.to_string());
    }

    suggestions
}

fn compute_score(word_count: usize, theme_count: usize) -> f64 {
    let length = (word_count as f64 / FULL_LENGTH_WORD_COUNT as f64).min(1.0);
    let themes = (theme_count as f64 / FULL_THEME_COUNT as f64).min(1.0);
    (LENGTH_SCORE_WEIGHT * length + THEME_SCORE_WEIGHT * themes)
        .clamp(MIN_ANALYSIS_SCORE, MAX_ANALYSIS_SCORE)
}

/// Analyzes the text content of a journal entry.
///
/// # Examples
///
/// ```
/// use journal_life::analysis::{analyze_content, Sentiment};
/// use journal_life::journal_core::{Block, JournalEntry};
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let entry = JournalEntry::new(
///     Uuid::new_v4(),
///     "Empty",
///     vec![Block::Media { media_id: "photo".to_string() }],
///     Utc::now(),
/// );
///
/// let analysis = analyze_content(&entry);
/// assert_eq!(analysis.sentiment, Sentiment::Neutral);
/// assert!(analysis.themes.is_empty());
/// assert_eq!(analysis.suggestions.len(), 1);
/// ```
pub fn analyze_content(entry: &JournalEntry) -> ContentAnalysis {
    let text = entry.text_content();
    let tokens = tokenize(&text);

    if tokens.is_empty() {
        debug!("Entry {} has no analysable text", entry.id);
        return ContentAnalysis {
            sentiment: Sentiment::Neutral,
            themes: BTreeSet::new(),
            suggestions: vec![ADD_DETAIL_SUGGESTION.to_string()],
            score: MIN_ANALYSIS_SCORE,
            word_count: 0,
        };
    }

    let word_count = tokens.len();
    let themes = detect_themes(&tokens);
    let sentiment = detect_sentiment(&tokens);
    let suggestions = build_suggestions(word_count, &themes, sentiment);
    let score = compute_score(word_count, themes.len());

    debug!(
        "Analyzed entry {}: {} words, {} themes, sentiment {:?}, score {:.2}",
        entry.id,
        word_count,
        themes.len(),
        sentiment,
        score
    );

    ContentAnalysis {
        sentiment,
        themes,
        suggestions,
        score,
        word_count,
    }
}
