use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use paperfeed::canonical::CanonicalId;
use paperfeed::error::Result;
use paperfeed::fetch::read_input;
use paperfeed::record::{self, MergeStrategy, PaperRecord};

fn load_record(path: &Path) -> Result<PaperRecord> {
    let raw = read_input(path)?;
    Ok(serde_json::from_str(&raw)?)
}

#[derive(Serialize)]
struct CanonicalView {
    canonical_id: String,
    #[serde(flatten)]
    id: CanonicalId,
    labels: Vec<String>,
}

/// Print the deduplication key and storage labels for a record
pub fn cmd_canonical(path: &Path, json: bool) -> Result<()> {
    let record = load_record(path)?;
    let id = record.canonical_id();
    let labels = record.labels();

    if json {
        let view = CanonicalView {
            canonical_id: id.to_string(),
            id,
            labels,
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{}", id.to_string().bold());
    for label in labels {
        println!("  {}", label);
    }
    Ok(())
}

/// Merge two records and print the result as JSON
pub fn cmd_merge(existing: &Path, incoming: &Path, strategy: MergeStrategy) -> Result<()> {
    let existing = load_record(existing)?;
    let incoming = load_record(incoming)?;

    let existing_id = existing.canonical_id();
    let incoming_id = incoming.canonical_id();
    if existing_id != incoming_id {
        tracing::warn!(
            existing = %existing_id,
            incoming = %incoming_id,
            "merging records with different canonical ids"
        );
    }

    let merged = record::merge(&existing, &incoming, strategy);
    println!("{}", serde_json::to_string_pretty(&merged)?);
    Ok(())
}
