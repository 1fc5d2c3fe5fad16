//! Prompt Journal - a prompted journal for the terminal
//!
//! Journal entries answer a fixed writing prompt and are kept newest-first in a
//! single collection, persisted as one JSON value under a fixed storage key.
//! The crate provides:
//!
//! - A journal store over a pluggable key-value backend (file or in-memory)
//! - A view controller: the Loading / Entry / List / Detail state machine
//! - A ratatui terminal interface and a small command-line front end
//!
//! # Example
//!
//! ```
//! use prompt_journal::{JournalStore, MemoryBackend, SaveOutcome, ViewController};
//!
//! let mut controller = ViewController::new(JournalStore::new(MemoryBackend::new()));
//! controller.start();
//! controller.set_draft("Had a good day");
//! assert!(matches!(controller.save_entry(), SaveOutcome::Saved { .. }));
//! assert_eq!(controller.journals().len(), 1);
//! ```

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod controller;
pub mod logging;
pub mod models;
pub mod store;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use controller::{SaveOutcome, Screen, ViewController};
pub use models::{DEFAULT_PROMPT, JournalCollection, JournalEntry};
pub use store::{
    DataDirLock, FileBackend, JournalStore, KeyValueBackend, MemoryBackend, STORAGE_KEY, StorageError,
};
