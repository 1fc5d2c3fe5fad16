use std::collections::HashSet;
use std::slice;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entry::JournalEntry;

/// All saved entries, newest first.
///
/// Serializes as a bare JSON array so the persisted value is exactly the list
/// of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JournalCollection {
    entries: Vec<JournalEntry>,
}

impl JournalCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap entries that are already in newest-first order
    pub fn from_entries(entries: Vec<JournalEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, JournalEntry> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&JournalEntry> {
        self.entries.get(index)
    }

    pub fn find(&self, id: &str) -> Option<&JournalEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn newest(&self) -> Option<&JournalEntry> {
        self.entries.first()
    }

    pub fn oldest(&self) -> Option<&JournalEntry> {
        self.entries.last()
    }

    /// Insert at the head. A later insert always lands before earlier ones,
    /// even when both carry the same timestamp.
    pub fn prepend(&mut self, entry: JournalEntry) {
        self.entries.insert(0, entry);
    }

    /// Id for an entry created at `now`: the epoch milliseconds as a decimal
    /// string, bumped forward until it collides with no existing id.
    pub fn next_id(&self, now: DateTime<Utc>) -> String {
        let taken: HashSet<&str> = self.entries.iter().map(JournalEntry::id).collect();

        let mut millis = now.timestamp_millis();
        loop {
            let candidate = millis.to_string();
            if !taken.contains(candidate.as_str()) {
                return candidate;
            }
            millis += 1;
        }
    }
}

impl<'a> IntoIterator for &'a JournalCollection {
    type Item = &'a JournalEntry;
    type IntoIter = slice::Iter<'a, JournalEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
