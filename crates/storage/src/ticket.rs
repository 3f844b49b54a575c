use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::error::StorageError;

/// Writes one receipt artifact per transaction under a tickets directory.
///
/// Files are named `ticket_YYYYMMDD_HHMMSS_ffffff.txt` (microsecond
/// resolution), so artifact names are unique per transaction and sort
/// chronologically.
#[derive(Debug, Clone)]
pub struct TicketWriter {
    dir: PathBuf,
}

impl TicketWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `receipt` stamped with the current time.
    pub fn write(&self, receipt: &str) -> Result<PathBuf, StorageError> {
        self.write_at(receipt, Utc::now())
    }

    /// Write `receipt` into a file named after `at`, creating the tickets
    /// directory if absent. Prefer passing the timestamp explicitly in tests
    /// for determinism.
    pub fn write_at(&self, receipt: &str, at: DateTime<Utc>) -> Result<PathBuf, StorageError> {
        fs::create_dir_all(&self.dir).map_err(|err| StorageError::io(&self.dir, err))?;

        let name = format!("ticket_{}.txt", at.format("%Y%m%d_%H%M%S_%6f"));
        let path = self.dir.join(name);
        fs::write(&path, receipt).map_err(|err| StorageError::io(&path, err))?;

        tracing::debug!(path = %path.display(), "wrote receipt artifact");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn write_at_creates_directory_and_timestamped_file() {
        let dir = tempfile::tempdir().unwrap();
        let writer = TicketWriter::new(dir.path().join("tickets"));
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 5).unwrap();

        let path = writer.write_at("RECEIPT BODY\n", at).unwrap();

        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "ticket_20240301_123005_000000.txt"
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "RECEIPT BODY\n");
    }

    #[test]
    fn write_produces_one_artifact_per_call() {
        let dir = tempfile::tempdir().unwrap();
        let writer = TicketWriter::new(dir.path().join("tickets"));
        let first = writer
            .write_at("a", Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 1).unwrap())
            .unwrap();
        let second = writer
            .write_at("b", Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 2).unwrap())
            .unwrap();

        assert_ne!(first, second);
        assert_eq!(fs::read_dir(writer.dir()).unwrap().count(), 2);
    }
}
