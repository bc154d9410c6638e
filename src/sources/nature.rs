use once_cell::sync::Lazy;
use regex::Regex;

use super::{compile, SourceIntegration};
use crate::extractor::rules::{ExtractorRules, Lookup};

static URL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"^https?://(?:www\.)?nature\.com/articles/([A-Za-z0-9.\-]+?)(?:\.pdf)?(?:[?#/]|$)",
    ])
});

static RULES: ExtractorRules = ExtractorRules {
    title: &[
        Lookup::Meta("citation_title"),
        Lookup::Meta("dc.title"),
        Lookup::Text("h1.c-article-title"),
    ],
    authors: &[
        Lookup::Names("citation_author"),
        Lookup::Names("dc.creator"),
    ],
    description: &[
        Lookup::Meta("dc.description"),
        Lookup::Text("#Abs1-content"),
        Lookup::Text("div.c-article-section__content p"),
    ],
    published_date: &[
        Lookup::Meta("citation_publication_date"),
        Lookup::Meta("dc.date"),
        Lookup::Meta("prism.publicationDate"),
    ],
    doi: &[
        Lookup::Meta("citation_doi"),
        Lookup::Meta("prism.doi"),
        Lookup::Meta("dc.identifier"),
    ],
    journal_name: &[
        Lookup::Meta("citation_journal_title"),
        Lookup::Meta("prism.publicationName"),
    ],
    tags: &[
        Lookup::MetaJoined("dc.subject"),
        Lookup::TextJoined(".c-article-subject-list__subject"),
    ],
};

pub fn integration() -> SourceIntegration {
    SourceIntegration::new("nature", "Nature", "https://www.nature.com", URL_PATTERNS.as_slice(), &RULES)
}
