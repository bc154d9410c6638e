use once_cell::sync::Lazy;
use regex::Regex;

use super::{compile, SourceIntegration};
use crate::extractor::rules::{ExtractorRules, Lookup};

static URL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[r"^https?://(?:www\.)?sciencedirect\.com/science/article/(?:abs/)?pii/([A-Z0-9]+)"])
});

static RULES: ExtractorRules = ExtractorRules {
    title: &[Lookup::Meta("citation_title"), Lookup::Text("span.title-text")],
    authors: &[
        Lookup::Names("citation_author"),
        Lookup::TextJoined("#author-group .react-xocs-alternative-link"),
    ],
    description: &[
        Lookup::Text("div.abstract.author"),
        Lookup::Text("#abstracts .abstract"),
    ],
    published_date: &[Lookup::Meta("citation_publication_date")],
    doi: &[Lookup::Meta("citation_doi"), Lookup::Attr("a.doi", "href")],
    journal_name: &[
        Lookup::Meta("citation_journal_title"),
        Lookup::Text(".publication-title-link"),
    ],
    tags: &[Lookup::TextJoined(".keywords-section .keyword")],
};

pub fn integration() -> SourceIntegration {
    SourceIntegration::new(
        "sciencedirect",
        "ScienceDirect",
        "https://www.sciencedirect.com",
        URL_PATTERNS.as_slice(),
        &RULES,
    )
}
