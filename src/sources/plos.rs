use once_cell::sync::Lazy;
use regex::Regex;

use super::{compile, SourceIntegration};
use crate::extractor::rules::{ExtractorRules, Lookup};

static URL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"^https?://journals\.plos\.org/[a-z]+/article(?:/file)?\?(?:[^#]*&)?id=(10\.1371/journal\.[a-z]+\.\d+)",
    ])
});

static RULES: ExtractorRules = ExtractorRules {
    title: &[Lookup::Meta("citation_title"), Lookup::Meta("dc.title")],
    authors: &[
        Lookup::Names("citation_author"),
        Lookup::Names("dc.creator"),
    ],
    description: &[
        Lookup::Meta("citation_abstract"),
        Lookup::Meta("dc.description"),
        Lookup::Text(".abstract-content"),
    ],
    published_date: &[
        Lookup::Meta("citation_date"),
        Lookup::Meta("citation_publication_date"),
        Lookup::Meta("dc.date"),
    ],
    doi: &[Lookup::Meta("citation_doi"), Lookup::Meta("dc.identifier")],
    journal_name: &[
        Lookup::Meta("citation_journal_title"),
        Lookup::Meta("citation_publisher"),
    ],
    tags: &[
        Lookup::Meta("keywords"),
        Lookup::TextJoined("#subjectList a.taxo-term"),
    ],
};

pub fn integration() -> SourceIntegration {
    SourceIntegration::new("plos", "PLOS", "https://journals.plos.org", URL_PATTERNS.as_slice(), &RULES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paper_ids() {
        let source = integration();
        let cases = [
            (
                "https://journals.plos.org/plosone/article?id=10.1371/journal.pone.0123456",
                "10.1371/journal.pone.0123456",
            ),
            (
                "https://journals.plos.org/ploscompbiol/article/file?id=10.1371/journal.pcbi.1004668&type=printable",
                "10.1371/journal.pcbi.1004668",
            ),
        ];
        for (url, expected) in cases {
            assert_eq!(source.extract_paper_id(url).as_deref(), Some(expected), "{}", url);
        }
        assert_eq!(source.extract_paper_id("https://journals.plos.org/plosone/"), None);
    }
}
