use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;
use unprint::history::ClearOutcome;
use unprint::Unprint;

pub fn handle(unprint: &Unprint) -> Result<()> {
    let outcome = unprint.clear_history().context("Failed to clear history")?;
    let mut stdout = io::stdout().lock();
    write_outcome(&mut stdout, outcome, unprint.history().path())?;
    Ok(())
}

pub fn write_outcome(out: &mut impl Write, outcome: ClearOutcome, path: &Path) -> io::Result<()> {
    match outcome {
        ClearOutcome::Cleared => {
            writeln!(out, "{} History cleared ({})", "✓".bright_green(), path.display())
        }
        ClearOutcome::NothingToClear => {
            writeln!(out, "{} No history to clear", "ℹ".bright_blue())
        }
    }
}
