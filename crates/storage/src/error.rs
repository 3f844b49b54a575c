use std::path::PathBuf;

use thiserror::Error;

/// Storage-layer error.
///
/// `Corrupt` is deliberately separate from `Io`: the caller decides whether a
/// corrupt snapshot means "start empty" or "abort startup", while an I/O
/// failure on save must never be silently swallowed.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The file exists but its content cannot be decoded into a valid
    /// inventory (malformed JSON or an invariant-violating record).
    #[error("corrupt snapshot at {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing the file failed.
    #[error("storage I/O failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// In-memory state could not be serialized.
    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn corrupt(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Corrupt {
            path: path.into(),
            source,
        }
    }
}
