use tracing::{debug, info};

use super::backend::KeyValueBackend;
use super::error::StorageError;
use crate::models::JournalCollection;

/// Key the whole collection is stored under
pub const STORAGE_KEY: &str = "@journal_app:journals";

/// Persists the journal collection as one JSON array under [`STORAGE_KEY`].
///
/// Every save rewrites the full collection; there is no partial update.
#[derive(Debug, Clone)]
pub struct JournalStore<B> {
    backend: B,
}

impl<B: KeyValueBackend> JournalStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }

    #[cfg(test)]
    pub(crate) fn into_backend(self) -> B {
        self.backend
    }

    /// Read the stored collection.
    ///
    /// A missing (or empty) value is an empty collection. Backend failures and
    /// values that do not parse as a collection are [`StorageError::Read`].
    pub fn load(&self) -> Result<JournalCollection, StorageError> {
        let raw = self.backend.get_item(STORAGE_KEY).map_err(|e| StorageError::read(STORAGE_KEY, e))?;

        let raw = match raw {
            Some(raw) if !raw.is_empty() => raw,
            _ => {
                debug!(key = STORAGE_KEY, "no stored journals");
                return Ok(JournalCollection::new());
            }
        };

        let journals: JournalCollection =
            serde_json::from_str(&raw).map_err(|e| StorageError::read(STORAGE_KEY, e))?;

        info!(count = journals.len(), "loaded journals");
        Ok(journals)
    }

    /// Serialize `journals` and replace the stored value with it
    pub fn save(&mut self, journals: &JournalCollection) -> Result<(), StorageError> {
        let raw = serde_json::to_string(journals).map_err(|e| StorageError::write(STORAGE_KEY, e))?;

        self.backend.set_item(STORAGE_KEY, &raw).map_err(|e| StorageError::write(STORAGE_KEY, e))?;

        info!(count = journals.len(), "saved journals");
        Ok(())
    }
}
