use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure inside a key-value backend
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("stored value {} is too large ({size} bytes, max {max} bytes)", path.display())]
    TooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("{} is locked by another process", path.display())]
    Locked { path: PathBuf },
}

/// String key-value storage the journal store persists through.
///
/// Calls are made one at a time by a single owner; implementations need no
/// internal locking.
pub trait KeyValueBackend {
    /// Value stored under `key`, or `None` if nothing was ever written there
    fn get_item(&self, key: &str) -> Result<Option<String>, BackendError>;

    /// Replace the value under `key`
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), BackendError>;
}

/// In-memory backend. Nothing survives the process; used by tests and by
/// `--ephemeral` sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    items: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value, as if a previous session had written it
    pub fn with_item(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.items.insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, BackendError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), BackendError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
