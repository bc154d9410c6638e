use once_cell::sync::Lazy;
use regex::Regex;

use super::{compile, SourceIntegration};
use crate::extractor::rules::{ExtractorRules, Lookup};

static URL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        // New-style ids: 2023.acl-long.1, 2020.emnlp-main.550
        r"^https?://(?:www\.)?aclanthology\.org/(\d{4}\.[a-z0-9]+(?:-[a-z0-9]+)*\.\d+)(?:\.pdf|/|$|[?#])",
        // Old-style ids: P19-1001
        r"^https?://(?:www\.)?aclanthology\.org/([A-Z]\d{2}-\d{4})(?:\.pdf|/|$|[?#])",
        r"^https?://(?:www\.)?aclweb\.org/anthology/([A-Z]\d{2}-\d{4})",
    ])
});

static RULES: ExtractorRules = ExtractorRules {
    title: &[Lookup::Meta("citation_title"), Lookup::Text("h2#title")],
    authors: &[
        Lookup::Names("citation_author"),
        Lookup::TextJoined("p.lead a"),
    ],
    description: &[
        Lookup::Text("div.acl-abstract span"),
        Lookup::Text("div.acl-abstract"),
    ],
    published_date: &[Lookup::Meta("citation_publication_date")],
    doi: &[Lookup::Meta("citation_doi")],
    journal_name: &[
        Lookup::Meta("citation_conference_title"),
        Lookup::Meta("citation_journal_title"),
    ],
    tags: &[],
};

pub fn integration() -> SourceIntegration {
    SourceIntegration::new(
        "acl",
        "ACL Anthology",
        "https://aclanthology.org",
        URL_PATTERNS.as_slice(),
        &RULES,
    )
}
