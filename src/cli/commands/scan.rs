use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;
use unprint::history::HistoryEntry;
use unprint::scan::{PathCheck, SOURCE_EXTENSION};
use unprint::{ScanOutcome, Unprint};

pub fn handle(unprint: &Unprint, project_path: &Path, verbose: bool) -> Result<()> {
    let check = unprint.check(project_path);
    write_check(&mut io::stdout().lock(), &check)?;

    let outcome = unprint
        .scan(check, verbose)
        .with_context(|| format!("Failed to clean {}", project_path.display()))?;

    let entry = match outcome {
        ScanOutcome::Rejected(check) => {
            write_rejection(&mut io::stdout().lock(), &check)?;
            return Ok(());
        }
        ScanOutcome::Completed(entry) => entry,
    };

    write_summary(&mut io::stdout().lock(), &entry)?;

    unprint
        .record(entry)
        .context("Failed to record run in history")?;

    Ok(())
}

/// Diagnostics for the candidate project directory.
pub fn write_check(out: &mut impl Write, check: &PathCheck) -> io::Result<()> {
    writeln!(out, "{} {}", "Checking directory:".bright_blue(), check.path.display())?;
    writeln!(out, "  {} Directory exists: {}", "•".bright_cyan(), check.is_dir)?;
    writeln!(
        out,
        "  {} Found {} {} files",
        "•".bright_cyan(),
        check.source_files,
        SOURCE_EXTENSION
    )
}

pub fn write_rejection(out: &mut impl Write, check: &PathCheck) -> io::Result<()> {
    writeln!(
        out,
        "{} {} is not a directory containing {} files",
        "✗".bright_red(),
        check.path.display(),
        SOURCE_EXTENSION
    )
}

pub fn write_summary(out: &mut impl Write, entry: &HistoryEntry) -> io::Result<()> {
    writeln!(
        out,
        "\n{} Removed {} print statements from {} files in {}",
        "✓".bright_green(),
        entry.total_statements_removed,
        entry.file_stats.len(),
        entry.duration
    )
}
