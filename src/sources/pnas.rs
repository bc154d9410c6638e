use once_cell::sync::Lazy;
use regex::Regex;

use super::{capture_id, compile, SourceIntegration};
use crate::extractor::rules::{ExtractorRules, Lookup};
use crate::page::Page;

static URL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"^https?://(?:www\.)?pnas\.org/doi/(?:abs/|full/|pdf/|epdf/|epub/|suppl/)?(10\.1073/pnas\.\d+)",
        // Legacy HighWire content paths
        r"^https?://(?:www\.)?pnas\.org/content/(?:early/)?(?:\d{4}/\d{2}/\d{2}/)?(\d+/\d+/\d+)",
    ])
});

static RULES: ExtractorRules = ExtractorRules {
    title: &[
        Lookup::Meta("citation_title"),
        Lookup::Meta("dc.title"),
        Lookup::Text("h1.core-title"),
    ],
    authors: &[
        Lookup::Names("citation_author"),
        Lookup::Names("dc.creator"),
    ],
    description: &[
        Lookup::Meta("dc.description"),
        Lookup::Text("section#abstract div[role=paragraph]"),
        Lookup::Text("#abstract"),
    ],
    published_date: &[
        Lookup::Meta("citation_publication_date"),
        Lookup::Meta("dc.date"),
    ],
    doi: &[
        Lookup::Meta("citation_doi"),
        Lookup::Meta("dc.identifier"),
        Lookup::Derived(doi_from_url),
    ],
    journal_name: &[
        Lookup::Meta("citation_journal_title"),
        Lookup::Const("Proceedings of the National Academy of Sciences"),
    ],
    tags: &[
        Lookup::Meta("citation_keywords"),
        Lookup::TextJoined("section#keywords a"),
    ],
};

pub fn integration() -> SourceIntegration {
    SourceIntegration::new("pnas", "PNAS", "https://www.pnas.org", URL_PATTERNS.as_slice(), &RULES)
}

fn doi_from_url(page: &Page) -> Option<String> {
    capture_id(&URL_PATTERNS[..1], page.url())
}
