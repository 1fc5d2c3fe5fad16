use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Writing cue shown above the composer and stored with every entry.
pub const DEFAULT_PROMPT: &str = "What is something you've been thinking about today?";

/// A saved journal entry. Entries are never edited after creation, so the
/// fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    id: String,
    prompt: String,
    text: String,
    #[serde(with = "crate::models::timestamp")]
    timestamp: DateTime<Utc>,
}

impl JournalEntry {
    /// Build an entry. The timestamp is truncated to millisecond precision,
    /// which is what the storage format keeps.
    pub fn new(
        id: impl Into<String>,
        prompt: impl Into<String>,
        text: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            text: text.into(),
            timestamp: timestamp.trunc_subsecs(3),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// First non-blank line of the body, used for one-line listings
    pub fn headline(&self) -> &str {
        self.text.lines().map(str::trim).find(|line| !line.is_empty()).unwrap_or("")
    }
}
