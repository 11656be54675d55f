//! Run history: one [`HistoryEntry`] per successful scan, persisted as a
//! single JSON array by [`HistoryStore`].

mod atomic;
pub mod store;

pub use store::{ClearOutcome, HistoryStore};

use chrono::{Local, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Removed-line count per file path for a single run.
pub type FileStats = BTreeMap<String, usize>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub timestamp: String,
    pub project_path: String,
    pub file_stats: FileStats,
    pub total_statements_removed: usize,
    pub duration: String,
}

impl HistoryEntry {
    /// Builds an entry stamped with the current local time. The total is
    /// always derived from `file_stats`.
    pub fn new(project_path: impl Into<String>, file_stats: FileStats, elapsed: Duration) -> Self {
        let total_statements_removed = file_stats.values().sum();

        Self {
            timestamp: Local::now().to_rfc3339_opts(SecondsFormat::Millis, false),
            project_path: project_path.into(),
            file_stats,
            total_statements_removed,
            duration: format_duration(elapsed),
        }
    }

    /// True when the stored total matches the per-file counts.
    pub fn is_consistent(&self) -> bool {
        self.total_statements_removed == self.file_stats.values().sum::<usize>()
    }
}

/// Renders `elapsed` as `"<seconds>.<millis> seconds"`.
pub fn format_duration(elapsed: Duration) -> String {
    format!("{}.{:03} seconds", elapsed.as_secs(), elapsed.subsec_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_total_is_sum_of_stats() {
        let mut stats = FileStats::new();
        stats.insert("lib/main.dart".to_string(), 3);
        stats.insert("lib/src/api.dart".to_string(), 4);

        let entry = HistoryEntry::new("my_app", stats, Duration::from_millis(1500));
        assert_eq!(entry.total_statements_removed, 7);
        assert!(entry.is_consistent());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.500 seconds");
        assert_eq!(format_duration(Duration::from_millis(42)), "0.042 seconds");
        assert_eq!(format_duration(Duration::from_secs(12)), "12.000 seconds");
    }

    #[test]
    fn test_json_field_names() -> anyhow::Result<()> {
        let mut stats = FileStats::new();
        stats.insert("a.dart".to_string(), 1);
        let entry = HistoryEntry::new("proj", stats, Duration::ZERO);

        let value = serde_json::to_value(&entry)?;
        assert_eq!(value["projectPath"], "proj");
        assert_eq!(value["fileStats"]["a.dart"], 1);
        assert_eq!(value["totalStatementsRemoved"], 1);
        assert_eq!(value["duration"], "0.000 seconds");
        assert!(value["timestamp"].is_string());
        Ok(())
    }
}
