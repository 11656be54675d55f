use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;
use unprint::history::HistoryEntry;
use unprint::Unprint;

pub fn handle(unprint: &Unprint) -> Result<()> {
    let entries = unprint.read_history().context("Failed to read history")?;
    let mut stdout = io::stdout().lock();
    write_history(&mut stdout, entries.as_deref(), unprint.history().path())?;
    Ok(())
}

/// Renders the log, or the missing/empty state when there is nothing to show.
pub fn write_history(
    out: &mut impl Write,
    entries: Option<&[HistoryEntry]>,
    path: &Path,
) -> io::Result<()> {
    let Some(entries) = entries else {
        writeln!(out, "{} No history found at {}", "ℹ".bright_blue(), path.display())?;
        return Ok(());
    };

    if entries.is_empty() {
        writeln!(out, "{} No history entries", "ℹ".bright_blue())?;
        return Ok(());
    }

    writeln!(out, "{}", "Unprint History".bright_blue().bold())?;
    writeln!(out, "{}", "===============".bright_blue())?;

    for (index, entry) in entries.iter().enumerate() {
        writeln!(
            out,
            "\n{} {}",
            format!("#{}", index + 1).bright_cyan().bold(),
            entry.timestamp
        )?;
        writeln!(out, "  Project: {}", entry.project_path)?;

        if entry.file_stats.is_empty() {
            writeln!(out, "  {} No files processed", "•".bright_black())?;
        } else {
            for (file, removed) in &entry.file_stats {
                writeln!(out, "  {} {}: {} removed", "•".bright_cyan(), file, removed)?;
            }
        }

        writeln!(
            out,
            "  Total: {} in {}",
            entry.total_statements_removed.to_string().bright_green(),
            entry.duration
        )?;
    }

    Ok(())
}
