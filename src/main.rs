mod cli;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use cli::commands;
use unprint::config::Config;
use unprint::Unprint;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    if let Err(err) = run_command(cli) {
        commands::display_error(&err);
        std::process::exit(1);
    }
}

fn run_command(cli: cli::Cli) -> Result<()> {
    use cli::Commands;

    let config = Config::load_or_default(".")
        .context("Failed to load configuration")?
        .with_history_file(cli.history_file);
    let unprint = Unprint::new(&config);

    match (cli.command, cli.project_path) {
        (Some(Commands::History), _) => commands::history::handle(&unprint),
        (Some(Commands::CleanHistory), _) => commands::clean_history::handle(&unprint),
        (None, Some(path)) => commands::scan::handle(&unprint, &path, cli.verbose),
        (None, None) => {
            cli::Cli::command().print_help()?;
            Ok(())
        }
    }
}
