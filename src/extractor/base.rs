//! Generic extraction strategy shared by every source

use super::rules::{ExtractorRules, Field, Lookup};
use crate::page::Page;

/// Lookups used when no publisher-specific lookup matched
pub static BASE_RULES: ExtractorRules = ExtractorRules {
    title: &[Lookup::Meta("og:title")],
    authors: &[
        Lookup::Names("citation_author"),
        Lookup::Names("author"),
    ],
    description: &[
        Lookup::Meta("description"),
        Lookup::Meta("og:description"),
    ],
    published_date: &[
        Lookup::Meta("citation_publication_date"),
        Lookup::Meta("citation_date"),
        Lookup::Meta("article:published_time"),
        Lookup::Meta("dc.date"),
        Lookup::Meta("date"),
    ],
    doi: &[
        Lookup::Meta("citation_doi"),
        Lookup::Meta("dc.identifier"),
        Lookup::Meta("prism.doi"),
    ],
    journal_name: &[],
    tags: &[Lookup::Meta("keywords")],
};

/// Resolve a field with the generic strategy; absent values are empty
pub fn field(page: &Page, field: Field) -> String {
    BASE_RULES.resolve(page, field, "base").unwrap_or_default()
}
