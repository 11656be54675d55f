pub mod validate;

pub use validate::{check_project, PathCheck};

use colored::Colorize;
use std::io;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use crate::error::UnprintResult;
use crate::filter;
use crate::history::FileStats;

/// Files whose name ends with this suffix are scanned and rewritten.
pub const SOURCE_EXTENSION: &str = ".dart";

pub(crate) fn is_source_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file()
        && entry
            .file_name()
            .to_string_lossy()
            .ends_with(SOURCE_EXTENSION)
}

/// Walks `root` and strips print statements from every source file.
///
/// The returned stats only hold files that actually lost lines. Any
/// traversal or I/O failure aborts the walk; files already rewritten stay
/// rewritten.
pub fn strip_project(root: &Path, verbose: bool) -> UnprintResult<FileStats> {
    let mut stats = FileStats::new();

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(io::Error::from)?;
        if !is_source_file(&entry) {
            continue;
        }

        let path = entry.path();
        let removed = filter::strip_file(path, verbose)?;
        tracing::debug!(file = %path.display(), removed, "processed source file");

        if verbose {
            println!(
                "{} Processed {} ({} removed)",
                "→".bright_black(),
                path.display(),
                removed
            );
        }

        if removed > 0 {
            stats.insert(path.display().to_string(), removed);
        }
    }

    Ok(stats)
}
