//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use prompt_journal::store::BackendError;
use prompt_journal::{DEFAULT_PROMPT, FileBackend, KeyValueBackend, STORAGE_KEY};
use tempfile::TempDir;

/// Builder for a scratch data directory holding the journal file
pub struct JournalDirBuilder {
    temp_dir: TempDir,
}

impl JournalDirBuilder {
    /// Create a new builder with an empty data directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the file the file backend uses for the journal key
    pub fn journal_file(&self) -> PathBuf {
        FileBackend::new(self.temp_dir.path()).path_for(STORAGE_KEY)
    }

    /// Write the raw stored value
    pub fn with_raw(self, content: &str) -> Self {
        fs::write(self.journal_file(), content).expect("Failed to write journal file");
        self
    }

    /// Write a JSON array of entries (first = newest)
    pub fn with_entries(self, entries: &[EntryJsonBuilder]) -> Self {
        let content = format!(
            "[{}]",
            entries.iter().map(EntryJsonBuilder::to_json).collect::<Vec<_>>().join(",")
        );
        self.with_raw(&content)
    }

    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for JournalDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one stored entry object
pub struct EntryJsonBuilder {
    id: String,
    prompt: String,
    text: String,
    timestamp: i64,
}

impl EntryJsonBuilder {
    pub fn new(id: &str, text: &str) -> Self {
        Self {
            id: id.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            text: text.to_string(),
            timestamp: id.parse().unwrap_or(1_700_000_000_000),
        }
    }

    pub fn prompt(mut self, prompt: &str) -> Self {
        self.prompt = prompt.to_string();
        self
    }

    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn to_json(&self) -> String {
        serde_json::json!({
            "id": self.id,
            "prompt": self.prompt,
            "text": self.text,
            "timestamp": self.timestamp,
        })
        .to_string()
    }
}

/// Backend where every call fails
pub struct FailingBackend;

impl KeyValueBackend for FailingBackend {
    fn get_item(&self, _key: &str) -> Result<Option<String>, BackendError> {
        Err(BackendError::Io {
            path: PathBuf::from("/unavailable"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "storage unavailable"),
        })
    }

    fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), BackendError> {
        Err(BackendError::Io {
            path: PathBuf::from("/unavailable"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "storage unavailable"),
        })
    }
}

/// Data directory with three entries, newest first
pub fn three_entry_dir() -> TempDir {
    JournalDirBuilder::new()
        .with_entries(&[
            EntryJsonBuilder::new("1700000300000", "Third day\nfelt rested"),
            EntryJsonBuilder::new("1700000200000", "Second day"),
            EntryJsonBuilder::new("1700000100000", "First day"),
        ])
        .build()
}
