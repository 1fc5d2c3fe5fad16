use thiserror::Error;

use super::backend::BackendError;

/// Why a load or save did not go through
#[derive(Debug, Error)]
pub enum StorageFailure {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("malformed journal data: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Error returned by [`JournalStore`](super::JournalStore).
///
/// Both kinds are recovered locally by the caller: a failed read is treated
/// as an empty collection, a failed write is reported but not rolled back.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read journals from `{key}`")]
    Read {
        key: String,
        #[source]
        source: StorageFailure,
    },

    #[error("failed to write journals to `{key}`")]
    Write {
        key: String,
        #[source]
        source: StorageFailure,
    },
}

impl StorageError {
    pub(crate) fn read(key: &str, failure: impl Into<StorageFailure>) -> Self {
        Self::Read { key: key.to_string(), source: failure.into() }
    }

    pub(crate) fn write(key: &str, failure: impl Into<StorageFailure>) -> Self {
        Self::Write { key: key.to_string(), source: failure.into() }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::Read { key, .. } | Self::Write { key, .. } => key,
        }
    }

    pub fn failure(&self) -> &StorageFailure {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => source,
        }
    }

    /// One-line description including the underlying cause, for status bars
    /// and log fields
    pub fn summary(&self) -> String {
        let mut summary = format!("{}: {}", self, self.failure());
        if let StorageFailure::Backend(BackendError::Io { source, .. }) = self.failure() {
            summary.push_str(&format!(" ({})", source));
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_read_error_from_codec_failure() {
        let codec = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err = StorageError::read("@journal_app:journals", codec);

        assert!(matches!(err, StorageError::Read { .. }));
        assert_eq!(err.key(), "@journal_app:journals");
        assert!(matches!(err.failure(), StorageFailure::Codec(_)));
        assert!(err.summary().starts_with(
            "failed to read journals from `@journal_app:journals`: malformed journal data:"
        ));
    }

    #[test]
    fn test_write_error_summary_includes_io_cause() {
        let backend = BackendError::Io {
            path: PathBuf::from("/data/journals.json"),
            source: io::Error::other("read-only file system"),
        };
        let err = StorageError::write("journals", backend);

        assert_eq!(
            err.summary(),
            "failed to write journals to `journals`: I/O error on /data/journals.json (read-only file system)"
        );
    }
}
