use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{atomic, HistoryEntry};
use crate::error::{HistoryError, UnprintResult};

/// Outcome of [`HistoryStore::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    Cleared,
    NothingToClear,
}

/// Append-only JSON history log at a caller-chosen path.
///
/// Reads and writes the whole array on every call. Concurrent invocations
/// are not coordinated; the last writer wins.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entries in run order, or `None` when the log does not exist yet.
    pub fn read_all(&self) -> UnprintResult<Option<Vec<HistoryEntry>>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let entries = serde_json::from_str(&content).map_err(|source| {
            tracing::warn!(
                path = %self.path.display(),
                "history log is not a JSON array of entries"
            );
            HistoryError::Corrupt {
                path: self.path.clone(),
                source,
            }
        })?;

        Ok(Some(entries))
    }

    /// Appends `entry`, treating a missing log as empty.
    ///
    /// A corrupt log is reported rather than overwritten.
    pub fn append(&self, entry: HistoryEntry) -> UnprintResult<()> {
        let mut entries = self.read_all()?.unwrap_or_default();
        entries.push(entry);
        self.write(&entries)?;

        tracing::debug!(
            path = %self.path.display(),
            entries = entries.len(),
            "history entry appended"
        );
        Ok(())
    }

    /// Empties an existing log. A missing log is left missing.
    pub fn clear(&self) -> UnprintResult<ClearOutcome> {
        if !self.path.exists() {
            return Ok(ClearOutcome::NothingToClear);
        }

        self.write(&[])?;
        Ok(ClearOutcome::Cleared)
    }

    fn write(&self, entries: &[HistoryEntry]) -> UnprintResult<()> {
        let content = serde_json::to_string_pretty(entries).map_err(HistoryError::Serialize)?;
        atomic::write(&self.path, content.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UnprintError;
    use crate::history::FileStats;
    use std::time::Duration;
    use tempfile::TempDir;

    fn entry(project: &str, removed: &[(&str, usize)]) -> HistoryEntry {
        let stats: FileStats = removed
            .iter()
            .map(|(file, count)| (file.to_string(), *count))
            .collect();
        HistoryEntry::new(project, stats, Duration::from_millis(10))
    }

    #[test]
    fn test_missing_log_reads_as_none() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let store = HistoryStore::new(temp_dir.path().join("history.json"));

        assert!(store.read_all()?.is_none());
        Ok(())
    }

    #[test]
    fn test_append_preserves_order() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let store = HistoryStore::new(temp_dir.path().join("history.json"));

        store.append(entry("first", &[("a.dart", 1)]))?;
        store.append(entry("second", &[]))?;

        let entries = store.read_all()?.unwrap_or_default();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].project_path, "first");
        assert_eq!(entries[1].project_path, "second");
        assert!(entries.iter().all(HistoryEntry::is_consistent));
        Ok(())
    }

    #[test]
    fn test_clear_missing_log_writes_nothing() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let store = HistoryStore::new(temp_dir.path().join("history.json"));

        assert_eq!(store.clear()?, ClearOutcome::NothingToClear);
        assert!(!store.path().exists());
        Ok(())
    }

    #[test]
    fn test_clear_empties_log() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let store = HistoryStore::new(temp_dir.path().join("history.json"));
        store.append(entry("proj", &[("a.dart", 2)]))?;

        assert_eq!(store.clear()?, ClearOutcome::Cleared);
        assert_eq!(store.read_all()?, Some(Vec::new()));
        Ok(())
    }

    #[test]
    fn test_corrupt_log_is_distinct_from_missing() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("history.json");
        fs::write(&path, "{\"not\": \"an array\"}")?;
        let store = HistoryStore::new(&path);

        assert!(matches!(
            store.read_all(),
            Err(UnprintError::History(HistoryError::Corrupt { .. }))
        ));
        assert!(store.append(entry("proj", &[])).is_err());
        assert_eq!(fs::read_to_string(&path)?, "{\"not\": \"an array\"}");
        Ok(())
    }
}
