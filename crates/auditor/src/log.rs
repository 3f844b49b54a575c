//! Append-only audit log.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::AuditError;

/// Append one report block to the audit log, creating the destination
/// directory if absent.
///
/// Strictly append-only: prior log content is never rewritten, so a failed
/// append leaves earlier reports intact.
pub fn append_report(path: &Path, body: &str) -> Result<(), AuditError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| AuditError::append(parent, err))?;
        }
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|err| AuditError::append(path, err))?;
    file.write_all(body.as_bytes())
        .map_err(|err| AuditError::append(path, err))?;

    tracing::debug!(path = %path.display(), bytes = body.len(), "appended audit report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_creates_directory_and_accumulates_blocks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("audit.txt");

        append_report(&path, "first block\n\n").unwrap();
        append_report(&path, "second block\n\n").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first block\n\nsecond block\n\n");
    }
}
