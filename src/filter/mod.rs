use colored::Colorize;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

use crate::error::UnprintResult;

// A print call that opens and closes on the same line. Calls spanning
// several lines are never matched.
static PRINT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*print\(.*\);").expect("Failed to compile print pattern")
});

/// Returns true when `line` is a single-line print statement.
pub fn is_print_statement(line: &str) -> bool {
    PRINT_PATTERN.is_match(line)
}

/// Result of filtering a block of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filtered<'a> {
    pub kept: Vec<&'a str>,
    pub removed: usize,
}

impl Filtered<'_> {
    /// Remaining lines joined by `\n`, without a trailing newline.
    pub fn to_content(&self) -> String {
        self.kept.join("\n")
    }
}

/// Splits `content` into lines and drops every print statement.
pub fn filter_lines(content: &str) -> Filtered<'_> {
    let mut kept = Vec::new();
    let mut removed = 0;

    for line in content.lines() {
        if is_print_statement(line) {
            removed += 1;
        } else {
            kept.push(line);
        }
    }

    Filtered { kept, removed }
}

/// Strips print statements from the file at `path`.
///
/// The file is rewritten only when at least one line was removed; otherwise
/// it is left byte-for-byte untouched. Returns the number of removed lines.
/// With `verbose`, the content before and after the rewrite is echoed.
pub fn strip_file(path: &Path, verbose: bool) -> UnprintResult<usize> {
    let original = fs::read_to_string(path)?;
    let filtered = filter_lines(&original);

    if filtered.removed == 0 {
        return Ok(0);
    }

    let rewritten = filtered.to_content();
    fs::write(path, &rewritten)?;

    if verbose {
        println!("{} {}", "Before:".bright_black(), path.display());
        for line in original.lines() {
            println!("  {}", line.bright_red());
        }
        println!("{} {}", "After:".bright_black(), path.display());
        for line in rewritten.lines() {
            println!("  {}", line.bright_green());
        }
    }

    Ok(filtered.removed)
}
