use once_cell::sync::Lazy;
use regex::Regex;

use super::{capture_id, compile, SourceIntegration};
use crate::extractor::rules::{ExtractorRules, Lookup};
use crate::page::Page;

static URL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        // New-style ids: 2301.12345, optional version and .pdf suffix
        r"^https?://(?:www\.|export\.)?arxiv\.org/(?:abs|pdf|html)/(\d{4}\.\d{4,5})(?:v\d+)?(?:[/?#.]|$)",
        // Legacy ids: hep-th/9901001, math.GT/0309136
        r"^https?://(?:www\.|export\.)?arxiv\.org/(?:abs|pdf)/([a-z\-]+(?:\.[A-Z]{2})?/\d{7})(?:v\d+)?(?:[/?#.]|$)",
    ])
});

static RULES: ExtractorRules = ExtractorRules {
    title: &[Lookup::Meta("citation_title"), Lookup::Derived(heading_title)],
    authors: &[
        Lookup::Names("citation_author"),
        Lookup::TextJoined("div.authors a"),
    ],
    description: &[
        Lookup::Meta("citation_abstract"),
        Lookup::Derived(abstract_block),
    ],
    published_date: &[
        Lookup::Meta("citation_date"),
        Lookup::Meta("citation_online_date"),
    ],
    doi: &[Lookup::Meta("citation_doi"), Lookup::Derived(datacite_doi)],
    journal_name: &[Lookup::Meta("citation_journal_title"), Lookup::Const("arXiv")],
    tags: &[
        Lookup::Text("td.tablecell.subjects"),
        Lookup::Text("span.primary-subject"),
    ],
};

pub fn integration() -> SourceIntegration {
    SourceIntegration::new("arxiv", "arXiv", "https://arxiv.org", URL_PATTERNS.as_slice(), &RULES)
}

/// `<h1 class="title">` carries a "Title:" descriptor before the text
fn heading_title(page: &Page) -> Option<String> {
    page.select_text("h1.title")
        .map(|t| t.trim_start_matches("Title:").trim().to_string())
}

fn abstract_block(page: &Page) -> Option<String> {
    page.select_text("blockquote.abstract")
        .map(|t| t.trim_start_matches("Abstract:").trim().to_string())
}

/// arXiv registers a DataCite DOI for every paper
fn datacite_doi(page: &Page) -> Option<String> {
    capture_id(&URL_PATTERNS, page.url()).map(|id| format!("10.48550/arXiv.{}", id))
}
