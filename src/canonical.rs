//! Canonical paper identity
//!
//! The same paper reaches us from several sources (an arXiv page, the
//! journal's DOI landing page, a reference manager export). The canonical id
//! is the key used to recognise those as one work. Priority: arXiv id, then
//! DOI, then a hash of title and first author, then the source-local key.

use std::fmt;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::record::PaperRecord;

static ARXIV_URL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"arxiv\.org/abs/(\d{4}\.\d{4,5})",
        r"arxiv\.org/pdf/(\d{4}\.\d{4,5})",
        r"arxiv:(\d{4}\.\d{4,5})",
    ]
    .iter()
    .map(|p| case_insensitive(p))
    .collect()
});

static ARXIV_EXTRA_PATTERN: Lazy<Regex> = Lazy::new(|| case_insensitive(r"arxiv[:\s]+(\d{4}\.\d{4,5})"));

static DOI_URL_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://(dx\.)?doi\.org/").expect("Invalid DOI prefix regex")
});

fn case_insensitive(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("Invalid arXiv id regex")
}

/// Which identifier the canonical id was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdKind {
    Arxiv,
    Doi,
    Hash,
    Key,
}

impl IdKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdKind::Arxiv => "arxiv",
            IdKind::Doi => "doi",
            IdKind::Hash => "hash",
            IdKind::Key => "key",
        }
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cross-source deduplication key, rendered `kind:value`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalId {
    pub kind: IdKind,
    pub value: String,
}

impl CanonicalId {
    fn new(kind: IdKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Unique label form: `paper:<kind>.<value>`
    pub fn uid(&self) -> String {
        format!("paper:{}.{}", self.kind, self.value)
    }
}

impl fmt::Display for CanonicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.value)
    }
}

/// New-style arXiv id from a URL, or failing that from free-text notes
pub fn extract_arxiv_id(url: &str, extra: &str) -> Option<String> {
    ARXIV_URL_PATTERNS
        .iter()
        .find_map(|re| re.captures(url))
        .or_else(|| ARXIV_EXTRA_PATTERN.captures(extra))
        .map(|c| c[1].to_string())
}

/// Lowercase DOI without resolver or `doi:` prefix
pub fn normalize_doi(doi: &str) -> Option<String> {
    let lowered = doi.trim().to_lowercase();
    let stripped = DOI_URL_PREFIX.replace(&lowered, "");
    let stripped = stripped.strip_prefix("doi:").unwrap_or(&stripped);
    if stripped.is_empty() {
        None
    } else {
        Some(stripped.to_string())
    }
}

/// First 16 hex chars of SHA-256 over `title|author`, both lowercased
pub fn title_hash(title: &str, first_author: &str) -> String {
    let normalized = format!(
        "{}|{}",
        title.trim().to_lowercase(),
        first_author.trim().to_lowercase()
    );
    let digest = Sha256::digest(normalized.as_bytes());
    let mut hex = hex::encode(digest);
    hex.truncate(16);
    hex
}

/// Family name guess: the last whitespace-separated token
fn first_author_surname(authors: &[String]) -> &str {
    authors
        .first()
        .and_then(|a| a.split_whitespace().last())
        .unwrap_or("")
}

pub fn canonical_id(record: &PaperRecord) -> CanonicalId {
    let arxiv = record
        .arxiv_id
        .clone()
        .filter(|id| !id.trim().is_empty())
        .or_else(|| extract_arxiv_id(&record.url, &record.extra));
    if let Some(id) = arxiv {
        return CanonicalId::new(IdKind::Arxiv, id);
    }

    if let Some(doi) = normalize_doi(&record.doi) {
        return CanonicalId::new(IdKind::Doi, doi);
    }

    if !record.title.is_empty() {
        let hash = title_hash(&record.title, first_author_surname(&record.authors));
        return CanonicalId::new(IdKind::Hash, hash);
    }

    let key = if record.paper_id.is_empty() {
        "unknown"
    } else {
        record.paper_id.as_str()
    };
    CanonicalId::new(IdKind::Key, key)
}
