/*!
# Journal Life

Journal Life is the intelligence core of a journaling application. Given
journal entries supplied by the caller, it analyzes their content, schedules
and evaluates time capsules, surfaces anniversary entries, and recommends
writing templates for the situation the user is writing in.

## Core Features

- Rule-based content analysis: sentiment, themes, writing suggestions and a quality score
- Time capsules that seal an entry until a target date, with due and upcoming views
- Anniversary entries written on this day in earlier years
- Context-aware template recommendation with deterministic tie-breaking
- A single coordinator combining all of the above into `JournalInsights`

Every operation is a pure function of its inputs. The current date is always
passed in explicitly; nothing in the library reads the system clock.

## Architecture

- `journal_core`: Entry, block and writing-context data model
- `analysis`: Content analysis engine
- `capsule`: Time capsule manager and anniversary queries
- `templates`: Template catalog, scoring and application
- `assistant`: Coordinator composing the engines
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `cli` / `journal_io`: Command-line driver and its JSON input/output

## Usage Example

```rust
use journal_life::{JournalLifeCore, WritingContext};
use journal_life::journal_core::{Block, JournalEntry};
use chrono::{TimeZone, Utc};
use uuid::Uuid;

fn main() -> journal_life::AppResult<()> {
    let core = JournalLifeCore::default();

    let entry = JournalEntry::new(
        Uuid::new_v4(),
        "Good morning",
        vec![Block::text_block("Coffee on the balcony, planning the day.")],
        Utc.with_ymd_and_hms(2024, 5, 10, 7, 30, 0).unwrap(),
    );

    let insights = core.intelligent_journal_assistant(&entry, WritingContext::Morning)?;
    assert_eq!(insights.recommended_template.id, "morning-pages");
    Ok(())
}
```
*/

/// Content analysis engine
pub mod analysis;
/// Coordinator composing the engines
pub mod assistant;
/// Time capsule scheduling and anniversary queries
pub mod capsule;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants and tunable weights
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Journal entry data model
pub mod journal_core;
/// Input document loading and JSON output for the binary
pub mod journal_io;
/// Template catalog, recommendation and application
pub mod templates;

// Re-export important types for convenience
pub use analysis::{ContentAnalysis, Sentiment, Theme};
pub use assistant::{JournalInsights, JournalLifeCore};
pub use capsule::{CapsuleStatus, TimeCapsule};
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use journal_core::{Block, JournalEntry, WritingContext};
pub use templates::{JournalTemplate, TemplateManager};
