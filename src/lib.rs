pub mod config;
pub mod error;
pub mod filter;
pub mod history;
pub mod scan;

use std::path::Path;
use std::time::Instant;

use error::UnprintResult;
use history::{ClearOutcome, HistoryEntry, HistoryStore};
use scan::PathCheck;

/// Result of a scan request.
#[derive(Debug, Clone)]
pub enum ScanOutcome {
    /// The path was not a directory with source files; nothing was touched.
    Rejected(PathCheck),
    /// Files were processed; the entry is ready to be recorded.
    Completed(HistoryEntry),
}

#[derive(Debug, Clone)]
pub struct Unprint {
    history: HistoryStore,
}

impl Unprint {
    pub fn new(config: &config::Config) -> Self {
        Self {
            history: HistoryStore::new(config.history_file()),
        }
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn check(&self, project_path: &Path) -> PathCheck {
        scan::check_project(project_path)
    }

    /// Strips print statements from the sources of an already checked project.
    ///
    /// Nothing is touched when `check` is not valid. Only the walk itself is
    /// timed, and the entry is not persisted; pass it to [`Unprint::record`].
    pub fn scan(&self, check: PathCheck, verbose: bool) -> UnprintResult<ScanOutcome> {
        if !check.is_valid() {
            return Ok(ScanOutcome::Rejected(check));
        }

        let started = Instant::now();
        let stats = scan::strip_project(&check.path, verbose)?;
        let entry = HistoryEntry::new(check.path.display().to_string(), stats, started.elapsed());

        tracing::info!(
            project = %entry.project_path,
            files = entry.file_stats.len(),
            removed = entry.total_statements_removed,
            "scan finished"
        );

        Ok(ScanOutcome::Completed(entry))
    }

    pub fn record(&self, entry: HistoryEntry) -> UnprintResult<()> {
        self.history.append(entry)
    }

    pub fn read_history(&self) -> UnprintResult<Option<Vec<HistoryEntry>>> {
        self.history.read_all()
    }

    pub fn clear_history(&self) -> UnprintResult<ClearOutcome> {
        self.history.clear()
    }
}
