//! paperfeed - bibliographic metadata from academic publisher pages

use clap::Parser;

use paperfeed::cli::{Cli, Commands};
use paperfeed::error::Result;
use paperfeed::telemetry;

mod commands;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        if let Some(hint) = e.hint() {
            eprintln!("\n{}", hint);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.verbose);

    match cli.command {
        Commands::Sources { json } => commands::cmd_sources(json),
        Commands::Matches { json } => commands::cmd_matches(json),
        Commands::Id { url, all, json } => commands::cmd_id(&url, all, json),
        Commands::Extract { url, html, fetch, source, generic, json } => {
            commands::cmd_extract(&url, html, fetch, source, generic, json)
        }
        Commands::Canonical { record, json } => commands::cmd_canonical(&record, json),
        Commands::Merge { existing, incoming, strategy } => {
            commands::cmd_merge(&existing, &incoming, strategy)
        }
        Commands::Config { command } => commands::cmd_config(command),
        Commands::Completions { shell } => commands::cmd_completions(shell),
    }
}
