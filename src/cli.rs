use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::record::MergeStrategy;

/// Shell types for completion generation
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

#[derive(Parser)]
#[command(name = "paperfeed")]
#[command(author, version, about = "Bibliographic metadata from academic publisher pages", long_about = None)]
#[command(after_help = r#"Examples:
  paperfeed sources                                            List supported publishers
  paperfeed id https://arxiv.org/abs/1706.03762v5              Resolve a URL to a paper id
  paperfeed extract https://arxiv.org/abs/1706.03762 --fetch   Download and extract metadata
  curl -s <url> | paperfeed extract <url> --html -             Extract from piped HTML
  paperfeed canonical record.json                              Show deduplication key and labels

Logging:
  -v / -vv raise the log level; PAPERFEED_LOG=debug overrides it.
"#)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List supported source integrations
    #[command(after_help = r#"Examples:
  paperfeed sources
  paperfeed sources --json | jq '.[].id'
"#)]
    Sources {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print every URL pattern that selects a page for extraction
    Matches {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a URL to its source and paper identifier
    #[command(after_help = r#"Examples:
  paperfeed id https://openreview.net/forum?id=YicbFdNTTy
  paperfeed id https://ieeexplore.ieee.org/document/7780459 --all
"#)]
    Id {
        /// Paper page URL
        url: String,

        /// List every matching source, not just the one that wins
        #[arg(long)]
        all: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Extract metadata from a paper page and print a record
    #[command(after_help = r#"Examples:
  paperfeed extract https://arxiv.org/abs/1706.03762 --html saved.html
  paperfeed extract https://arxiv.org/abs/1706.03762 --fetch --json
  paperfeed extract https://example.org/x --html page.html --source nature
  paperfeed extract https://example.org/x --html page.html --generic
"#)]
    Extract {
        /// Page URL; selects the source integration
        url: String,

        /// Saved HTML file, or `-` for stdin
        #[arg(long, value_name = "FILE", conflicts_with = "fetch")]
        html: Option<PathBuf>,

        /// Download the page over HTTP
        #[arg(long)]
        fetch: bool,

        /// Use this source id instead of matching the URL
        #[arg(long, value_name = "ID")]
        source: Option<String>,

        /// Read generic meta tags when no source recognises the URL
        #[arg(long, conflicts_with = "source")]
        generic: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the canonical id and storage labels of a record
    Canonical {
        /// Record JSON file, or `-` for stdin
        #[arg(value_name = "RECORD")]
        record: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Merge two records describing the same paper
    #[command(after_help = r#"Examples:
  paperfeed merge stored.json fresh.json
  paperfeed merge stored.json fresh.json --strategy incoming-priority
"#)]
    Merge {
        /// Record already stored
        existing: PathBuf,

        /// Newly extracted record
        incoming: PathBuf,

        /// How conflicting fields are resolved
        #[arg(long, value_enum, default_value_t = MergeStrategy::Enrich)]
        strategy: MergeStrategy,
    },

    /// Show or edit the configuration file
    #[command(after_help = r#"Examples:
  paperfeed config show
  paperfeed config disable sciencedirect
  paperfeed config enable sciencedirect
"#)]
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    #[command(after_help = r#"Examples:
  paperfeed completions bash > ~/.local/share/bash-completion/completions/paperfeed
  paperfeed completions zsh > ~/.zfunc/_paperfeed
  paperfeed completions fish > ~/.config/fish/completions/paperfeed.fish
"#)]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the current configuration and where it lives
    Show,

    /// Stop resolving URLs to a source
    Disable {
        /// Source id (see `paperfeed sources`)
        id: String,
    },

    /// Resolve URLs to a previously disabled source again
    Enable {
        /// Source id (see `paperfeed sources`)
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_extract() {
        let cli = Cli::parse_from([
            "paperfeed", "-vv", "extract", "https://arxiv.org/abs/1706.03762", "--html", "-", "--json",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Extract { url, html, fetch, source, generic, json } => {
                assert_eq!(url, "https://arxiv.org/abs/1706.03762");
                assert_eq!(html, Some(PathBuf::from("-")));
                assert!(!fetch);
                assert!(source.is_none());
                assert!(!generic);
                assert!(json);
            }
            _ => panic!("expected extract"),
        }
    }

    #[test]
    fn test_html_conflicts_with_fetch() {
        let result = Cli::try_parse_from([
            "paperfeed", "extract", "https://arxiv.org/abs/1", "--html", "a.html", "--fetch",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_strategy_values() {
        let cli = Cli::parse_from([
            "paperfeed", "merge", "a.json", "b.json", "--strategy", "existing-priority",
        ]);
        match cli.command {
            Commands::Merge { strategy, .. } => assert_eq!(strategy, MergeStrategy::ExistingPriority),
            _ => panic!("expected merge"),
        }
    }

    #[test]
    fn test_parse_config_disable() {
        let cli = Cli::parse_from(["paperfeed", "config", "disable", "ieee"]);
        match cli.command {
            Commands::Config { command: ConfigCommands::Disable { id } } => assert_eq!(id, "ieee"),
            _ => panic!("expected config disable"),
        }
        assert!(Cli::try_parse_from(["paperfeed", "config"]).is_err());
    }
}
