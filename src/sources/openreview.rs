use once_cell::sync::Lazy;
use regex::Regex;

use super::{compile, SourceIntegration};
use crate::extractor::rules::{ExtractorRules, Lookup};

static URL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"^https?://(?:www\.)?openreview\.net/(?:forum|pdf|attachment)\?(?:[^#]*&)?id=([A-Za-z0-9_\-]+)",
    ])
});

static RULES: ExtractorRules = ExtractorRules {
    title: &[Lookup::Meta("citation_title"), Lookup::Text("h2.citation_title")],
    authors: &[
        Lookup::Names("citation_author"),
        Lookup::TextJoined(".forum-authors a"),
    ],
    description: &[
        Lookup::Meta("citation_abstract"),
        Lookup::Text(".note-content-value"),
    ],
    published_date: &[
        Lookup::Meta("citation_publication_date"),
        Lookup::Meta("citation_online_date"),
    ],
    doi: &[],
    journal_name: &[
        Lookup::Meta("citation_conference_title"),
        Lookup::Text(".forum-meta .item"),
    ],
    tags: &[Lookup::Meta("citation_keywords")],
};

pub fn integration() -> SourceIntegration {
    SourceIntegration::new(
        "openreview",
        "OpenReview",
        "https://openreview.net",
        URL_PATTERNS.as_slice(),
        &RULES,
    )
}
