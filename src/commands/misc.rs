use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use colored::Colorize;

use paperfeed::cli::{Cli, CompletionShell, ConfigCommands};
use paperfeed::config::Config;
use paperfeed::error::{PaperfeedError, Result};
use paperfeed::registry;

/// Show or edit the config file
pub fn cmd_config(command: ConfigCommands) -> Result<()> {
    let mut config = Config::load()?;

    match command {
        ConfigCommands::Show => {
            println!("{}", Config::config_path()?.display().to_string().dimmed());
            let content = toml::to_string_pretty(&config)
                .map_err(|e| PaperfeedError::ConfigError(e.to_string()))?;
            print!("{}", content);
        }
        ConfigCommands::Disable { id } => {
            let source = registry::integration_by_id(&id)
                .ok_or_else(|| PaperfeedError::UnknownSource(id.clone()))?;
            if config.disable_source(source.id()) {
                config.save()?;
                println!("{} {}", "Disabled".yellow(), source.name());
            } else {
                println!("{} is already disabled", source.name());
            }
        }
        ConfigCommands::Enable { id } => {
            if config.enable_source(&id) {
                config.save()?;
                println!("{} {}", "Enabled".green(), id);
            } else {
                println!("{} is not disabled", id);
            }
        }
    }
    Ok(())
}

/// Generate shell completions
pub fn cmd_completions(shell: CompletionShell) -> Result<()> {
    let mut cmd = Cli::command();
    let shell = match shell {
        CompletionShell::Bash => Shell::Bash,
        CompletionShell::Zsh => Shell::Zsh,
        CompletionShell::Fish => Shell::Fish,
        CompletionShell::Powershell => Shell::PowerShell,
    };
    generate(shell, &mut cmd, "paperfeed", &mut io::stdout());
    Ok(())
}
