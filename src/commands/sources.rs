use colored::Colorize;
use serde::Serialize;

use paperfeed::config::Config;
use paperfeed::error::{PaperfeedError, Result};
use paperfeed::registry;
use paperfeed::sources::SourceIntegration;

#[derive(Serialize)]
struct SourceSummary<'a> {
    id: &'a str,
    name: &'a str,
    homepage: &'a str,
    enabled: bool,
    patterns: Vec<&'a str>,
}

/// List every integration in resolution order
pub fn cmd_sources(json: bool) -> Result<()> {
    let config = Config::load()?;
    let summaries: Vec<SourceSummary> = registry::all_integrations()
        .iter()
        .map(|s| SourceSummary {
            id: s.id(),
            name: s.name(),
            homepage: s.homepage(),
            enabled: config.is_source_enabled(s.id()),
            patterns: s.url_patterns().iter().map(|re| re.as_str()).collect(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    let max_id_len = summaries.iter().map(|s| s.id.len()).max().unwrap_or(10);

    println!("\nSources:\n");
    for s in &summaries {
        let status = if s.enabled {
            String::new()
        } else {
            format!(" {}", "(disabled)".yellow())
        };
        println!(
            "  {}  {}{}  {}",
            format!("{:<width$}", s.id, width = max_id_len).bold(),
            s.name,
            status,
            format!("{} pattern(s)", s.patterns.len()).dimmed(),
        );
    }
    println!();
    Ok(())
}

/// Print the flattened URL pattern list
pub fn cmd_matches(json: bool) -> Result<()> {
    let matches = registry::all_content_script_matches();
    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
    } else {
        for pattern in matches {
            println!("{}", pattern);
        }
    }
    Ok(())
}

/// Resolve a URL to (integration, paper id), skipping disabled sources
pub fn resolve_enabled(url: &str, config: &Config) -> Result<(&'static SourceIntegration, String)> {
    if let Some(r) = registry::resolve_filtered(url, |s| config.is_source_enabled(s.id())) {
        return Ok((r.source, r.paper_id));
    }

    match registry::find_for_url(url) {
        Some(disabled) => Err(PaperfeedError::SourceDisabled(disabled.id().to_string())),
        None => Err(PaperfeedError::UnmatchedUrl(url.to_string())),
    }
}

#[derive(Serialize)]
struct IdMatch<'a> {
    source: &'a str,
    name: &'a str,
    paper_id: Option<String>,
}

/// Show which source claims a URL and the paper id it yields
pub fn cmd_id(url: &str, all: bool, json: bool) -> Result<()> {
    let config = Config::load()?;

    if all {
        let matches: Vec<IdMatch> = registry::matching_integrations(url)
            .into_iter()
            .map(|s| IdMatch {
                source: s.id(),
                name: s.name(),
                paper_id: s.extract_paper_id(url),
            })
            .collect();
        if matches.is_empty() {
            return Err(PaperfeedError::UnmatchedUrl(url.to_string()));
        }
        if json {
            println!("{}", serde_json::to_string_pretty(&matches)?);
        } else {
            for m in &matches {
                println!("{}  {}", m.source.bold(), m.paper_id.as_deref().unwrap_or("-"));
            }
        }
        return Ok(());
    }

    let (source, paper_id) = resolve_enabled(url, &config)?;
    if json {
        let m = IdMatch {
            source: source.id(),
            name: source.name(),
            paper_id: Some(paper_id),
        };
        println!("{}", serde_json::to_string_pretty(&m)?);
    } else {
        println!("{}  {}", source.id().bold(), paper_id);
    }
    Ok(())
}
