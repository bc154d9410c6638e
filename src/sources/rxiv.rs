//! medRxiv and bioRxiv share the Cold Spring Harbor HighWire platform

use once_cell::sync::Lazy;
use regex::Regex;

use super::{compile, SourceIntegration};
use crate::extractor::rules::{ExtractorRules, Lookup};

static MEDRXIV_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"^https?://(?:www\.)?medrxiv\.org/content/(10\.1101/(?:\d{4}\.\d{2}\.\d{2}\.\d+|\d+))(?:v\d+)?",
    ])
});

static BIORXIV_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"^https?://(?:www\.)?biorxiv\.org/content/(10\.1101/(?:\d{4}\.\d{2}\.\d{2}\.\d+|\d+))(?:v\d+)?",
    ])
});

static MEDRXIV_RULES: ExtractorRules = ExtractorRules {
    journal_name: &[Lookup::Meta("citation_journal_title"), Lookup::Const("medRxiv")],
    ..HIGHWIRE_RULES
};

static BIORXIV_RULES: ExtractorRules = ExtractorRules {
    journal_name: &[Lookup::Meta("citation_journal_title"), Lookup::Const("bioRxiv")],
    ..HIGHWIRE_RULES
};

const HIGHWIRE_RULES: ExtractorRules = ExtractorRules {
    title: &[
        Lookup::Meta("citation_title"),
        Lookup::Meta("dc.title"),
        Lookup::Text("h1#page-title"),
    ],
    authors: &[
        Lookup::Names("citation_author"),
        Lookup::Names("dc.creator"),
    ],
    description: &[
        Lookup::Meta("citation_abstract"),
        Lookup::Meta("dc.description"),
        Lookup::Text("div.section.abstract p"),
    ],
    published_date: &[
        Lookup::Meta("citation_publication_date"),
        Lookup::Meta("citation_online_date"),
        Lookup::Meta("dc.date"),
    ],
    doi: &[Lookup::Meta("citation_doi"), Lookup::Meta("dc.identifier")],
    journal_name: &[],
    tags: &[
        Lookup::Meta("citation_keywords"),
        Lookup::TextJoined(".highwire-article-collection-term a"),
    ],
};

pub fn medrxiv() -> SourceIntegration {
    SourceIntegration::new(
        "medrxiv",
        "medRxiv",
        "https://www.medrxiv.org",
        MEDRXIV_PATTERNS.as_slice(),
        &MEDRXIV_RULES,
    )
}

pub fn biorxiv() -> SourceIntegration {
    SourceIntegration::new(
        "biorxiv",
        "bioRxiv",
        "https://www.biorxiv.org",
        BIORXIV_PATTERNS.as_slice(),
        &BIORXIV_RULES,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::MetadataExtractor;
    use crate::page::Page;

    #[test]
    fn test_medrxiv_ids() {
        let source = medrxiv();
        let cases = [
            (
                "https://www.medrxiv.org/content/10.1101/2021.01.01.000001v2",
                "10.1101/2021.01.01.000001",
            ),
            (
                "https://www.medrxiv.org/content/10.1101/2020.03.19.20039131v1.full.pdf",
                "10.1101/2020.03.19.20039131",
            ),
            (
                "http://medrxiv.org/content/10.1101/2021.01.01.000001",
                "10.1101/2021.01.01.000001",
            ),
        ];
        for (url, expected) in cases {
            assert_eq!(source.extract_paper_id(url).as_deref(), Some(expected), "{}", url);
        }
        assert_eq!(
            source.extract_paper_id("https://www.biorxiv.org/content/10.1101/2021.01.01.000001v2"),
            None
        );
    }

    #[test]
    fn test_biorxiv_ids() {
        let source = biorxiv();
        assert_eq!(
            source
                .extract_paper_id("https://www.biorxiv.org/content/10.1101/2023.05.10.540123v3.abstract")
                .as_deref(),
            Some("10.1101/2023.05.10.540123")
        );
        assert_eq!(
            source
                .extract_paper_id("https://www.biorxiv.org/content/early/2017/07/20/166405")
                .as_deref(),
            None
        );
        assert_eq!(
            source
                .extract_paper_id("https://www.biorxiv.org/content/10.1101/166405v1")
                .as_deref(),
            Some("10.1101/166405")
        );
    }

    #[test]
    fn test_citation_before_dublin_core() {
        let page = Page::parse(
            "https://www.medrxiv.org/content/10.1101/2021.01.01.000001v2",
            r#"<html><head>
                <meta name="DC.Title" content="Dublin Core Title">
                <meta name="citation_title" content="Citation Title">
                <meta property="og:title" content="Open Graph Title">
                <meta name="DC.Creator" content="Jane Roe">
                <meta name="citation_publisher" content="Cold Spring Harbor Laboratory Press">
            </head></html>"#,
        );
        let source = medrxiv();
        let extractor = source.create_metadata_extractor(&page);

        assert_eq!(extractor.extract_title(), "Citation Title");
        assert_eq!(extractor.extract_authors(), "Jane Roe");
        assert_eq!(extractor.extract_journal_name(), "medRxiv");
    }
}
