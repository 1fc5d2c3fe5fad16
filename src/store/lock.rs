//! Single-writer lock on the data directory
//!
//! The journal is saved as one whole value, so two sessions writing the same
//! directory would each overwrite the other's entries. Writers take an
//! exclusive advisory lock on `prompt-journal.lock` first; readers do not.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::{debug, warn};

use super::backend::BackendError;

pub const LOCK_FILE_NAME: &str = "prompt-journal.lock";

/// Exclusive lock held until dropped
#[derive(Debug)]
pub struct DataDirLock {
    file: File,
    path: PathBuf,
}

impl DataDirLock {
    /// Lock `dir` without blocking, creating it if needed.
    ///
    /// Fails with [`BackendError::Locked`] while another handle holds the lock.
    pub fn acquire(dir: &Path) -> Result<Self, BackendError> {
        fs::create_dir_all(dir)
            .map_err(|source| BackendError::Io { path: dir.to_path_buf(), source })?;

        let path = dir.join(LOCK_FILE_NAME);
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(|source| BackendError::Io { path: path.clone(), source })?;

        if let Err(source) = file.try_lock_exclusive() {
            if source.kind() == fs2::lock_contended_error().kind() {
                return Err(BackendError::Locked { path });
            }
            return Err(BackendError::Io { path, source });
        }

        debug!(path = %path.display(), "data directory locked");
        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for DataDirLock {
    fn drop(&mut self) {
        // Closing the handle releases it anyway
        if let Err(e) = FileExt::unlock(&self.file) {
            warn!(path = %self.path.display(), error = %e, "failed to unlock data directory");
        }
    }
}
