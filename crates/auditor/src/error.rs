use std::path::PathBuf;

use thiserror::Error;

/// Auditor-side error.
///
/// This is a one-shot batch tool: every failure is reported once with a
/// clear message and the process exits without retry.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The product table could not be queried (missing database, missing
    /// table, malformed row).
    #[error("product table query failed: {0}")]
    Database(#[from] sqlx::Error),

    /// The report could not be appended to the audit log.
    #[error("failed to append report at {path}: {source}")]
    Append {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AuditError {
    pub(crate) fn append(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Append {
            path: path.into(),
            source,
        }
    }
}
