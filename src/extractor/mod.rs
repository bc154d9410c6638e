//! Metadata extraction from publisher pages
//!
//! [`MetadataExtractor`] has one accessor per field. The default bodies are the
//! generic strategy (Open Graph, `description`, `keywords`, ...). Publisher
//! extractors are [`RuleExtractor`]s: they walk their own lookup chains first
//! and defer to the generic strategy when nothing matched.
//!
//! Accessors never fail. A missing value is an empty string or an empty list.

pub mod base;
pub mod rules;

use serde::{Deserialize, Serialize};

use crate::normalize::split_keywords;
use crate::page::Page;
use rules::{ExtractorRules, Field};

/// Every field an extractor can produce, collected in one pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperMetadata {
    pub title: String,
    /// Comma-separated author list
    pub authors: String,
    pub description: String,
    pub published_date: String,
    pub doi: String,
    pub journal_name: String,
    pub tags: Vec<String>,
}

impl PaperMetadata {
    /// True when nothing at all was found
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.authors.is_empty()
            && self.description.is_empty()
            && self.published_date.is_empty()
            && self.doi.is_empty()
            && self.journal_name.is_empty()
            && self.tags.is_empty()
    }
}

/// Field accessors over one bound page
pub trait MetadataExtractor {
    /// The page this extractor is bound to
    fn page(&self) -> &Page;

    fn extract_title(&self) -> String {
        base::field(self.page(), Field::Title)
    }

    fn extract_authors(&self) -> String {
        base::field(self.page(), Field::Authors)
    }

    fn extract_description(&self) -> String {
        base::field(self.page(), Field::Description)
    }

    fn extract_published_date(&self) -> String {
        base::field(self.page(), Field::PublishedDate)
    }

    fn extract_doi(&self) -> String {
        base::field(self.page(), Field::Doi)
    }

    fn extract_journal_name(&self) -> String {
        base::field(self.page(), Field::JournalName)
    }

    fn extract_tags(&self) -> Vec<String> {
        split_keywords(&base::field(self.page(), Field::Tags))
    }

    /// Run every accessor once
    fn extract_all(&self) -> PaperMetadata {
        PaperMetadata {
            title: self.extract_title(),
            authors: self.extract_authors(),
            description: self.extract_description(),
            published_date: self.extract_published_date(),
            doi: self.extract_doi(),
            journal_name: self.extract_journal_name(),
            tags: self.extract_tags(),
        }
    }
}

/// Generic extractor used for pages without a dedicated source
#[derive(Debug)]
pub struct BaseExtractor<'p> {
    page: &'p Page,
}

impl<'p> BaseExtractor<'p> {
    pub fn new(page: &'p Page) -> Self {
        Self { page }
    }
}

impl MetadataExtractor for BaseExtractor<'_> {
    fn page(&self) -> &Page {
        self.page
    }
}

/// Publisher extractor: declared lookup chains, then the generic strategy
#[derive(Debug)]
pub struct RuleExtractor<'p> {
    page: &'p Page,
    source: &'static str,
    rules: &'static ExtractorRules,
}

impl<'p> RuleExtractor<'p> {
    pub fn new(page: &'p Page, source: &'static str, rules: &'static ExtractorRules) -> Self {
        Self { page, source, rules }
    }

    fn field(&self, field: Field) -> String {
        self.rules
            .resolve(self.page, field, self.source)
            .unwrap_or_else(|| base::field(self.page, field))
    }
}

impl MetadataExtractor for RuleExtractor<'_> {
    fn page(&self) -> &Page {
        self.page
    }

    fn extract_title(&self) -> String {
        self.field(Field::Title)
    }

    fn extract_authors(&self) -> String {
        self.field(Field::Authors)
    }

    fn extract_description(&self) -> String {
        self.field(Field::Description)
    }

    fn extract_published_date(&self) -> String {
        self.field(Field::PublishedDate)
    }

    fn extract_doi(&self) -> String {
        self.field(Field::Doi)
    }

    fn extract_journal_name(&self) -> String {
        self.field(Field::JournalName)
    }

    fn extract_tags(&self) -> Vec<String> {
        split_keywords(&self.field(Field::Tags))
    }
}
