//! Reading the CLI input document and writing results.
//!
//! The engines never touch the filesystem. This module is the thin boundary
//! the binary uses to materialize entries, capsules and an optional template
//! catalog from a JSON document, and to print results as JSON.

use crate::capsule::TimeCapsule;
use crate::errors::{AppError, AppResult};
use crate::journal_core::JournalEntry;
use crate::templates::JournalTemplate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::debug;
use uuid::Uuid;

/// Path value meaning "read from standard input".
pub const STDIN_PATH: &str = "-";

/// Everything the binary needs from its caller, as one JSON document.
///
/// Missing arrays default to empty. A non-empty `templates` array replaces
/// the built-in catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputDocument {
    #[serde(default)]
    pub entries: Vec<JournalEntry>,
    #[serde(default)]
    pub capsules: Vec<TimeCapsule>,
    #[serde(default)]
    pub templates: Vec<JournalTemplate>,
}

impl InputDocument {
    /// Parses a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Json` if the text is not a valid document.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let document: InputDocument = serde_json::from_str(json)?;
        debug!(
            "Loaded input document: {} entries, {} capsules, {} templates",
            document.entries.len(),
            document.capsules.len(),
            document.templates.len()
        );
        Ok(document)
    }

    /// Finds an entry by id.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Journal` if no entry has that id.
    pub fn entry(&self, id: Uuid) -> AppResult<&JournalEntry> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .ok_or_else(|| AppError::Journal(format!("No entry found with id {}", id)))
    }
}

/// Loads an input document from `path`, or from standard input for `-`.
///
/// # Errors
///
/// Returns `AppError::Io` if the document cannot be read and `AppError::Json`
/// if it cannot be parsed.
pub fn load_input_document(path: &Path) -> AppResult<InputDocument> {
    let json = if path.as_os_str() == STDIN_PATH {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(path).map_err(|e| {
            AppError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read input document {}: {}", path.display(), e),
            ))
        })?
    };

    InputDocument::from_json(&json)
}

/// Writes `value` as pretty-printed JSON followed by a newline.
pub fn write_json<T: Serialize + ?Sized, W: Write>(mut writer: W, value: &T) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    Ok(())
}
