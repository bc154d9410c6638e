//! ACM Digital Library (Atypon platform, Dublin Core vocabulary)

use once_cell::sync::Lazy;
use regex::Regex;

use super::{capture_id, compile, SourceIntegration};
use crate::extractor::rules::{ExtractorRules, Lookup};
use crate::page::Page;

static URL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"^https?://(?:www\.)?dl\.acm\.org/doi/(?:abs/|full/|pdf/|epdf/|fullHtml/|book/)?(10\.\d{4,9}/[^?#\s/]+)",
    ])
});

static RULES: ExtractorRules = ExtractorRules {
    title: &[
        Lookup::Meta("citation_title"),
        Lookup::Meta("dc.title"),
        Lookup::Text("h1.citation__title"),
    ],
    authors: &[
        Lookup::Names("citation_author"),
        Lookup::Names("dc.creator"),
        Lookup::TextJoined(".loa__author-name span"),
    ],
    description: &[
        Lookup::Meta("dc.description"),
        Lookup::Text("div.abstractSection"),
        Lookup::Text("section#abstract div[role=paragraph]"),
    ],
    published_date: &[
        Lookup::Meta("citation_publication_date"),
        Lookup::Meta("dc.date"),
        Lookup::Text(".CitationCoverDate"),
    ],
    doi: &[
        Lookup::Meta("citation_doi"),
        Lookup::Meta("dc.identifier"),
        Lookup::Derived(doi_from_url),
    ],
    journal_name: &[
        Lookup::Meta("citation_journal_title"),
        Lookup::Meta("citation_conference_title"),
        Lookup::Text(".epub-section__title"),
    ],
    tags: &[
        Lookup::Meta("citation_keywords"),
        Lookup::TextJoined(".keywords-list a"),
    ],
};

pub fn integration() -> SourceIntegration {
    SourceIntegration::new(
        "acm",
        "ACM Digital Library",
        "https://dl.acm.org",
        URL_PATTERNS.as_slice(),
        &RULES,
    )
}

fn doi_from_url(page: &Page) -> Option<String> {
    capture_id(&URL_PATTERNS, page.url())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::MetadataExtractor;

    #[test]
    fn test_paper_ids() {
        let source = integration();
        let cases = [
            ("https://dl.acm.org/doi/10.1145/3290605.3300233", "10.1145/3290605.3300233"),
            ("https://dl.acm.org/doi/abs/10.1145/3290605.3300233", "10.1145/3290605.3300233"),
            ("https://dl.acm.org/doi/pdf/10.1145/3290605.3300233?download=true", "10.1145/3290605.3300233"),
            ("https://dl.acm.org/doi/fullHtml/10.1145/3442188.3445922", "10.1145/3442188.3445922"),
        ];
        for (url, expected) in cases {
            assert_eq!(source.extract_paper_id(url).as_deref(), Some(expected), "{}", url);
        }
        assert_eq!(source.extract_paper_id("https://dl.acm.org/conference/chi"), None);
    }

    #[test]
    fn test_dublin_core_and_url_doi() {
        let page = Page::parse(
            "https://dl.acm.org/doi/10.1145/3442188.3445922",
            r#"<html><head>
                <meta name="dc.Title" content="On the Dangers of Stochastic Parrots">
                <meta name="dc.Creator" content="Emily M. Bender">
                <meta name="dc.Creator" content="Timnit Gebru">
                <meta name="dc.Date" scheme="WTN8601" content="2021-03-01">
                <meta property="og:title" content="Generic">
            </head></html>"#,
        );
        let source = integration();
        let meta = source.create_metadata_extractor(&page).extract_all();

        assert_eq!(meta.title, "On the Dangers of Stochastic Parrots");
        assert_eq!(meta.authors, "Emily M. Bender, Timnit Gebru");
        assert_eq!(meta.published_date, "2021-03-01");
        assert_eq!(meta.doi, "10.1145/3442188.3445922");
    }
}
