use std::path::PathBuf;

use colored::Colorize;
use tracing::{info, warn};

use paperfeed::config::Config;
use paperfeed::error::{PaperfeedError, Result};
use paperfeed::extractor::{BaseExtractor, MetadataExtractor};
use paperfeed::fetch;
use paperfeed::page::Page;
use paperfeed::record::PaperRecord;
use paperfeed::registry;
use paperfeed::sources::SourceIntegration;

use super::resolve_enabled;

/// Source id recorded for pages read with the generic strategy
const GENERIC_SOURCE_ID: &str = "generic";

/// Extract a record from a saved or downloaded page
pub fn cmd_extract(
    url: &str,
    html: Option<PathBuf>,
    fetch_page: bool,
    source: Option<String>,
    generic: bool,
    json: bool,
) -> Result<()> {
    let config = Config::load()?;
    let integration = match source {
        Some(id) => Some(forced_source(&id, url, &config)?),
        None => match resolve_enabled(url, &config) {
            Ok(found) => Some(found),
            Err(PaperfeedError::UnmatchedUrl(_)) if generic => {
                info!(url, "no source recognises URL, using generic meta tags");
                None
            }
            Err(e) => return Err(e),
        },
    };

    let (page_url, raw) = if fetch_page {
        let fetched = fetch::fetch_page(url, &config)?;
        (fetched.url, fetched.html)
    } else if let Some(path) = html {
        (url.to_string(), fetch::read_input(&path)?)
    } else {
        return Err(PaperfeedError::NoPageInput);
    };

    let page = Page::parse(&page_url, &raw);
    let (source_id, paper_id, extractor): (&str, String, Box<dyn MetadataExtractor + '_>) =
        match integration {
            Some((integration, paper_id)) => {
                (integration.id(), paper_id, integration.create_metadata_extractor(&page))
            }
            None => (GENERIC_SOURCE_ID, String::new(), Box::new(BaseExtractor::new(&page))),
        };

    let metadata = extractor.extract_all();
    if metadata.is_empty() {
        warn!(source = source_id, url, host = page.host().as_deref().unwrap_or(""), "no metadata found on page");
    } else {
        info!(source = source_id, paper_id = %paper_id, "extracted metadata");
    }

    let record = PaperRecord::from_metadata(
        source_id,
        &paper_id,
        url,
        &metadata,
        config.abstract_max_chars,
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_record(&record);
    }
    Ok(())
}

/// Integration named on the command line, bypassing URL matching
fn forced_source(id: &str, url: &str, config: &Config) -> Result<(&'static SourceIntegration, String)> {
    let integration =
        registry::integration_by_id(id).ok_or_else(|| PaperfeedError::UnknownSource(id.to_string()))?;
    if !config.is_source_enabled(id) {
        return Err(PaperfeedError::SourceDisabled(id.to_string()));
    }
    let paper_id = integration.extract_paper_id(url).unwrap_or_else(|| {
        warn!(source = id, url, "URL not recognised by forced source, paper id left empty");
        String::new()
    });
    Ok((integration, paper_id))
}

fn print_record(record: &PaperRecord) {
    let field = |label: &str, value: &str| {
        if !value.is_empty() {
            println!("  {} {}", format!("{:<10}", format!("{}:", label)).dimmed(), value);
        }
    };

    println!();
    if record.title.is_empty() {
        println!("  {}", "(untitled)".dimmed());
    } else {
        println!("  {}", record.title.bold());
    }
    field("Source", &format!("{} {}", record.source_id, record.paper_id));
    field("Authors", &record.authors.join(", "));
    field("Date", &record.published_date);
    field("Journal", &record.journal);
    field("DOI", &record.doi);
    field("arXiv", record.arxiv_id.as_deref().unwrap_or(""));
    field("Tags", &record.tags.join(", "));
    field("Canonical", &record.canonical_id().to_string());
    if !record.abstract_text.is_empty() {
        println!();
        println!("  {}", record.abstract_text);
    }
    println!();
}
