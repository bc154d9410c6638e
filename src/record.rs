use chrono::{DateTime, Utc};
use clap::ValueEnum;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::canonical::{self, CanonicalId};
use crate::extractor::PaperMetadata;
use crate::normalize::{strip_arxiv_version, truncate_chars};

/// Tag labels kept per record
const MAX_TAG_LABELS: usize = 5;
/// Characters kept per tag label
const MAX_TAG_CHARS: usize = 50;

static UNSAFE_TAG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s-]").expect("Invalid tag sanitising regex"));

/// Metadata record handed to storage, one per paper per source visit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperRecord {
    pub source_id: String,
    pub paper_id: String,
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default, rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub published_date: String,
    #[serde(default)]
    pub doi: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arxiv_id: Option<String>,
    #[serde(default)]
    pub journal: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free-text notes, e.g. a reference manager's "extra" field
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub extra: String,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl PaperRecord {
    /// Build a record from freshly extracted page metadata
    pub fn from_metadata(
        source_id: &str,
        paper_id: &str,
        url: &str,
        metadata: &PaperMetadata,
        abstract_max_chars: usize,
    ) -> Self {
        let authors = metadata
            .authors
            .split(',')
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(String::from)
            .collect();

        let arxiv_id = if source_id == "arxiv" {
            Some(strip_arxiv_version(paper_id)).filter(|id| !id.is_empty())
        } else {
            canonical::extract_arxiv_id(url, "")
        };

        Self {
            source_id: source_id.to_string(),
            paper_id: paper_id.to_string(),
            url: url.to_string(),
            title: metadata.title.clone(),
            authors,
            abstract_text: truncate_chars(&metadata.description, abstract_max_chars),
            published_date: metadata.published_date.clone(),
            doi: metadata.doi.clone(),
            arxiv_id,
            journal: metadata.journal_name.clone(),
            tags: metadata.tags.clone(),
            extra: String::new(),
            sources: vec![source_id.to_string()],
            timestamp: Utc::now(),
            last_updated: None,
        }
    }

    pub fn canonical_id(&self) -> CanonicalId {
        canonical::canonical_id(self)
    }

    /// Labels for the storage layer: identity, store markers, type and up to five tags
    pub fn labels(&self) -> Vec<String> {
        let id = self.canonical_id();
        let mut labels = vec![
            format!("UID:{}", id.uid()),
            "gh-store".to_string(),
            "stored-object".to_string(),
            format!("source:{}", self.source_id),
            format!("id-type:{}", id.kind),
        ];

        for tag in self.tags.iter().take(MAX_TAG_LABELS) {
            let safe: String = UNSAFE_TAG_CHARS
                .replace_all(tag, "")
                .chars()
                .take(MAX_TAG_CHARS)
                .collect();
            if !safe.is_empty() {
                labels.push(format!("tag:{}", safe));
            }
        }

        labels
    }

    /// Source ids this record has been seen from
    fn seen_sources(&self) -> Vec<String> {
        if !self.sources.is_empty() {
            self.sources.clone()
        } else if !self.source_id.is_empty() {
            vec![self.source_id.clone()]
        } else {
            vec!["unknown".to_string()]
        }
    }

    /// Copy every empty field of `self` from `other`
    fn fill_from(&mut self, other: &PaperRecord) {
        fn fill(field: &mut String, from: &str) {
            if field.is_empty() {
                *field = from.to_string();
            }
        }
        fill(&mut self.source_id, &other.source_id);
        fill(&mut self.paper_id, &other.paper_id);
        fill(&mut self.url, &other.url);
        fill(&mut self.title, &other.title);
        fill(&mut self.abstract_text, &other.abstract_text);
        fill(&mut self.published_date, &other.published_date);
        fill(&mut self.doi, &other.doi);
        fill(&mut self.journal, &other.journal);
        fill(&mut self.extra, &other.extra);
        if self.authors.is_empty() {
            self.authors = other.authors.clone();
        }
        if self.tags.is_empty() {
            self.tags = other.tags.clone();
        }
        if self.arxiv_id.as_deref().map_or(true, str::is_empty) {
            self.arxiv_id = other.arxiv_id.clone();
        }
    }
}

/// How two records for the same paper are combined
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MergeStrategy {
    /// Keep existing values, fill gaps from the incoming record and add its new tags
    #[default]
    Enrich,
    /// Incoming values win where present
    IncomingPriority,
    /// Existing values win; incoming only fills fields the existing record lacks
    ExistingPriority,
}

/// Merge two records describing the same paper
pub fn merge(existing: &PaperRecord, incoming: &PaperRecord, strategy: MergeStrategy) -> PaperRecord {
    let mut merged = match strategy {
        MergeStrategy::Enrich => {
            let mut merged = existing.clone();
            merged.fill_from(incoming);
            for tag in &incoming.tags {
                if !merged.tags.contains(tag) {
                    merged.tags.push(tag.clone());
                }
            }
            merged
        }
        MergeStrategy::IncomingPriority => {
            let mut merged = incoming.clone();
            merged.fill_from(existing);
            merged
        }
        MergeStrategy::ExistingPriority => {
            let mut merged = existing.clone();
            merged.fill_from(incoming);
            merged
        }
    };

    let mut sources = existing.seen_sources();
    sources.extend(incoming.seen_sources());
    sources.sort();
    sources.dedup();
    merged.sources = sources;
    merged.last_updated = Some(Utc::now());
    merged
}
