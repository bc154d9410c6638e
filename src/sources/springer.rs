use once_cell::sync::Lazy;
use regex::Regex;

use super::{compile, SourceIntegration};
use crate::extractor::rules::{ExtractorRules, Lookup};

static URL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"^https?://link\.springer\.com/(?:article|chapter|referenceworkentry)/(10\.\d{4,9}/[^?#\s]+?)/?(?:[?#]|$)",
        r"^https?://link\.springer\.com/content/pdf/(10\.\d{4,9}/[^?#\s]+?)\.pdf",
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
        Lookup::Text("section[data-title=Abstract] p"),
    ],
    published_date: &[
        Lookup::Meta("citation_publication_date"),
        Lookup::Meta("citation_online_date"),
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
        Lookup::Meta("citation_conference_title"),
        Lookup::Meta("citation_inbook_title"),
        Lookup::Meta("prism.publicationName"),
    ],
    tags: &[
        Lookup::MetaJoined("dc.subject"),
        Lookup::TextJoined(".c-article-subject-list__subject"),
    ],
};

pub fn integration() -> SourceIntegration {
    SourceIntegration::new(
        "springer",
        "Springer",
        "https://link.springer.com",
        URL_PATTERNS.as_slice(),
        &RULES,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paper_ids() {
        let source = integration();
        let cases = [
            ("https://link.springer.com/article/10.1007/s11263-015-0816-y", "10.1007/s11263-015-0816-y"),
            ("https://link.springer.com/chapter/10.1007/978-3-030-58452-8_13", "10.1007/978-3-030-58452-8_13"),
            ("https://link.springer.com/article/10.1007/s11263-015-0816-y?error=cookies", "10.1007/s11263-015-0816-y"),
            ("https://link.springer.com/content/pdf/10.1007/s11263-015-0816-y.pdf", "10.1007/s11263-015-0816-y"),
        ];
        for (url, expected) in cases {
            assert_eq!(source.extract_paper_id(url).as_deref(), Some(expected), "{}", url);
        }
        assert_eq!(source.extract_paper_id("https://link.springer.com/journal/11263"), None);
    }
}
