use once_cell::sync::Lazy;
use regex::Regex;

use super::{compile, year_from_url, SourceIntegration};
use crate::extractor::rules::{ExtractorRules, Lookup};
use crate::page::Page;

static URL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        // Identifier is year + paper hash
        r"^https?://(?:papers|proceedings)\.(?:nips|neurips)\.cc/paper(?:_files/paper)?/(\d{4})/(?:hash|file)/([0-9a-f]+)-(?:Abstract|Paper|Supplemental)",
    ])
});

static YEAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/paper(?:_files/paper)?/(\d{4})/").expect("Invalid NeurIPS year regex")
});

static RULES: ExtractorRules = ExtractorRules {
    title: &[Lookup::Meta("citation_title"), Lookup::Text("div.container-fluid h4")],
    authors: &[
        Lookup::Names("citation_author"),
        Lookup::Text("div.container-fluid p i"),
    ],
    description: &[
        Lookup::Meta("citation_abstract"),
        Lookup::Text("p.paper-abstract"),
    ],
    published_date: &[
        Lookup::Meta("citation_publication_date"),
        Lookup::Derived(proceedings_year),
    ],
    doi: &[],
    journal_name: &[
        Lookup::Meta("citation_conference_title"),
        Lookup::Meta("citation_journal_title"),
        Lookup::Const("Advances in Neural Information Processing Systems"),
    ],
    tags: &[],
};

pub fn integration() -> SourceIntegration {
    SourceIntegration::new(
        "neurips",
        "NeurIPS Proceedings",
        "https://proceedings.neurips.cc",
        URL_PATTERNS.as_slice(),
        &RULES,
    )
}

fn proceedings_year(page: &Page) -> Option<String> {
    year_from_url(&YEAR_RE, page)
}
