pub mod clean_history;
pub mod history;
pub mod scan;

use colored::Colorize;

/// Display an error message with proper formatting
pub fn display_error(err: &anyhow::Error) {
    eprintln!("\n{} {}", "✗".bright_red().bold(), "Operation failed".bright_red().bold());
    eprintln!("  {} {}", "├".bright_black(), err);

    for cause in err.chain().skip(1) {
        eprintln!("  {} {}", "├".bright_black(), cause);
    }

    let error_str = format!("{:#}", err);
    if error_str.contains("Permission denied") {
        eprintln!("  {} Check that the project files are writable", "└".bright_cyan());
    } else if error_str.contains("corrupt") {
        eprintln!(
            "  {} Run {} to start a fresh history log",
            "└".bright_cyan(),
            "unprint clean-history".bright_cyan()
        );
    } else {
        eprintln!(
            "  {} Run with {} for more details",
            "└".bright_black(),
            "RUST_LOG=unprint=debug".bright_cyan()
        );
    }
}
