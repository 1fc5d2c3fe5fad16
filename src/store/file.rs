//! Directory-backed key-value storage
//!
//! Each key is one file inside the data directory, named by percent-encoding
//! the key and appending `.json`:
//! - `@journal_app:journals` -> `%40journal_app%3Ajournals.json`
//!
//! Writes go to a temp file that is then renamed over the target, so a crash
//! mid-write leaves the previous value intact.

use std::fs::{self, File};
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::backend::{BackendError, KeyValueBackend};
use crate::utils::encode_key;

/// Largest value the backend will read back (10MB)
pub const MAX_VALUE_BYTES: u64 = 10 * 1024 * 1024;

const VALUE_EXTENSION: &str = "json";
const TEMP_EXTENSION: &str = "json.tmp";

#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Backend rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File that holds the value for `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", encode_key(key), VALUE_EXTENSION))
    }

    fn temp_path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", encode_key(key), TEMP_EXTENSION))
    }
}

/// Rejects files above [`MAX_VALUE_BYTES`]. Checks the open handle, not the
/// path, so the file cannot be swapped between the check and the read.
fn validate_value_size(file: &File, path: &Path) -> Result<(), BackendError> {
    let metadata =
        file.metadata().map_err(|source| BackendError::Io { path: path.to_path_buf(), source })?;

    let size = metadata.len();
    if size > MAX_VALUE_BYTES {
        return Err(BackendError::TooLarge { path: path.to_path_buf(), size, max: MAX_VALUE_BYTES });
    }

    Ok(())
}

impl KeyValueBackend for FileBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, BackendError> {
        let path = self.path_for(key);

        let mut file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no stored value");
                return Ok(None);
            }
            Err(source) => return Err(BackendError::Io { path, source }),
        };
        validate_value_size(&file, &path)?;

        let mut contents = String::new();
        file.read_to_string(&mut contents).map_err(|source| BackendError::Io { path, source })?;

        Ok(Some(contents))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), BackendError> {
        fs::create_dir_all(&self.dir)
            .map_err(|source| BackendError::Io { path: self.dir.clone(), source })?;

        // Write atomically (temp file + rename)
        let path = self.path_for(key);
        let temp = self.temp_path_for(key);
        fs::write(&temp, value).map_err(|source| BackendError::Io { path: temp.clone(), source })?;
        fs::rename(&temp, &path).map_err(|source| BackendError::Io { path: path.clone(), source })?;

        debug!(path = %path.display(), bytes = value.len(), "stored value");
        Ok(())
    }
}
