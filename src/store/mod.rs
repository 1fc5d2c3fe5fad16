//! Journal persistence
//!
//! The whole collection lives under one key of a [`KeyValueBackend`]:
//! - [`FileBackend`]: one file per key in the data directory
//! - [`MemoryBackend`]: process-local map, nothing persisted
//!
//! [`JournalStore`] serializes the collection to JSON on every save and parses
//! it back on load. Sessions that write hold a [`DataDirLock`] so two
//! processes never save over each other.

pub mod backend;
pub mod error;
pub mod file;
pub mod journal;
pub mod lock;

pub use backend::{BackendError, KeyValueBackend, MemoryBackend};
pub use error::{StorageError, StorageFailure};
pub use file::FileBackend;
pub use journal::{JournalStore, STORAGE_KEY};
pub use lock::{DataDirLock, LOCK_FILE_NAME};
