use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::is_source_file;

/// What was found when checking a candidate project directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathCheck {
    pub path: PathBuf,
    pub is_dir: bool,
    pub source_files: usize,
}

impl PathCheck {
    /// A project is usable when it is a directory holding at least one source file.
    pub fn is_valid(&self) -> bool {
        self.is_dir && self.source_files > 0
    }
}

/// Inspects `path` without touching any file.
///
/// Unreadable entries are skipped while counting; a missing path simply
/// reports `is_dir == false`.
pub fn check_project(path: &Path) -> PathCheck {
    let is_dir = path.is_dir();
    let source_files = if is_dir {
        WalkDir::new(path)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(is_source_file)
            .count()
    } else {
        0
    };

    tracing::debug!(path = %path.display(), is_dir, source_files, "checked project path");

    PathCheck {
        path: path.to_path_buf(),
        is_dir,
        source_files,
    }
}
