//! Data models for the journal.
//!
//! - [`JournalEntry`] - One saved entry (id, prompt, text, timestamp)
//! - [`JournalCollection`] - Every saved entry, newest first
//!
//! Timestamps are persisted as epoch milliseconds through the `timestamp`
//! serde helpers.

pub mod collection;
pub mod entry;
mod timestamp;

pub use collection::JournalCollection;
pub use entry::{DEFAULT_PROMPT, JournalEntry};
