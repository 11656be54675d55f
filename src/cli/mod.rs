pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "unprint")]
#[command(about = "Remove print statements from Dart projects", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(help = "Project directory to clean")]
    pub project_path: Option<PathBuf>,

    #[arg(long, global = true, help = "Show file contents before and after cleaning")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        env = "UNPRINT_HISTORY_FILE",
        help = "History log location (overrides .unprint.toml)"
    )]
    pub history_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Show the history of previous runs")]
    History,

    #[command(about = "Erase the run history")]
    CleanHistory,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_project_path_and_verbose() {
        let cli = Cli::parse_from(["unprint", "--verbose", "my_app"]);
        assert!(cli.command.is_none());
        assert!(cli.verbose);
        assert_eq!(cli.project_path, Some(PathBuf::from("my_app")));
    }

    #[test]
    fn test_parses_subcommands() {
        let cli = Cli::parse_from(["unprint", "history"]);
        assert!(matches!(cli.command, Some(Commands::History)));

        let cli = Cli::parse_from(["unprint", "clean-history"]);
        assert!(matches!(cli.command, Some(Commands::CleanHistory)));
    }

    #[test]
    fn test_no_arguments() {
        let cli = Cli::parse_from(["unprint"]);
        assert!(cli.command.is_none());
        assert!(cli.project_path.is_none());
    }
}
