//! IEEE Xplore
//!
//! Document pages carry few meta tags. Most metadata lives in a JSON blob
//! assigned to `xplGlobal.document.metadata` inside an inline script.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::{compile, SourceIntegration};
use crate::extractor::rules::{ExtractorRules, Lookup, JOIN_SEPARATOR};
use crate::page::Page;

static URL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"^https?://ieeexplore\.ieee\.org/(?:abstract/)?document/(\d+)",
        r"^https?://ieeexplore\.ieee\.org/stamp/stamp\.jsp\?(?:[^#]*&)?arnumber=(\d+)",
    ])
});

static XPL_METADATA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)xplGlobal\.document\.metadata\s*=\s*(\{.*?\});")
        .expect("Invalid xplGlobal metadata regex")
});

static RULES: ExtractorRules = ExtractorRules {
    title: &[
        Lookup::Meta("citation_title"),
        Lookup::Derived(xpl_title),
        Lookup::Text("h1.document-title"),
    ],
    authors: &[
        Lookup::Names("citation_author"),
        Lookup::Derived(xpl_authors),
        Lookup::TextJoined(".authors-info .blue-tooltip a span"),
    ],
    description: &[
        Lookup::Derived(xpl_abstract),
        Lookup::Text(".abstract-text"),
    ],
    published_date: &[
        Lookup::Meta("citation_publication_date"),
        Lookup::Derived(xpl_publication_date),
    ],
    doi: &[Lookup::Meta("citation_doi"), Lookup::Derived(xpl_doi)],
    journal_name: &[
        Lookup::Meta("citation_journal_title"),
        Lookup::Meta("citation_conference_title"),
        Lookup::Derived(xpl_publication_title),
    ],
    tags: &[Lookup::Derived(xpl_keywords)],
};

pub fn integration() -> SourceIntegration {
    SourceIntegration::new(
        "ieee",
        "IEEE Xplore",
        "https://ieeexplore.ieee.org",
        URL_PATTERNS.as_slice(),
        &RULES,
    )
}

/// Parse the embedded document metadata; re-read on every call
fn xpl_metadata(page: &Page) -> Option<Value> {
    page.select_all_text("script").iter().find_map(|script| {
        XPL_METADATA_RE
            .captures(script)
            .and_then(|c| serde_json::from_str::<Value>(&c[1]).ok())
    })
}

fn xpl_string(page: &Page, key: &str) -> Option<String> {
    xpl_metadata(page)?
        .get(key)?
        .as_str()
        .map(String::from)
}

fn xpl_title(page: &Page) -> Option<String> {
    xpl_string(page, "displayDocTitle").or_else(|| xpl_string(page, "title"))
}

fn xpl_abstract(page: &Page) -> Option<String> {
    xpl_string(page, "abstract")
}

fn xpl_publication_date(page: &Page) -> Option<String> {
    xpl_string(page, "publicationDate")
}

fn xpl_doi(page: &Page) -> Option<String> {
    xpl_string(page, "doi")
}

fn xpl_publication_title(page: &Page) -> Option<String> {
    xpl_string(page, "displayPublicationTitle").or_else(|| xpl_string(page, "publicationTitle"))
}

fn xpl_authors(page: &Page) -> Option<String> {
    let metadata = xpl_metadata(page)?;
    let names: Vec<&str> = metadata
        .get("authors")?
        .as_array()?
        .iter()
        .filter_map(|a| a.get("name").and_then(Value::as_str))
        .collect();
    (!names.is_empty()).then(|| names.join(JOIN_SEPARATOR))
}

/// Author keywords first, then the IEEE-controlled vocabulary
fn xpl_keywords(page: &Page) -> Option<String> {
    let metadata = xpl_metadata(page)?;
    let groups = metadata.get("keywords")?.as_array()?;
    let ordered = ["Author Keywords", "IEEE Keywords", "INSPEC: Controlled Indexing"];

    ordered.iter().find_map(|wanted| {
        groups
            .iter()
            .find(|g| {
                g.get("type")
                    .and_then(Value::as_str)
                    .map(|t| t.trim() == *wanted)
                    .unwrap_or(false)
            })
            .and_then(|g| g.get("kwd"))
            .and_then(Value::as_array)
            .map(|kwds| {
                kwds.iter()
                    .filter_map(Value::as_str)
                    .collect::<Vec<_>>()
                    .join(JOIN_SEPARATOR)
            })
            .filter(|joined| !joined.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::MetadataExtractor;

    const XPL_PAGE: &str = r#"
        <html><head>
            <meta property="og:title" content="Generic OG Title">
            <meta property="og:description" content="Truncated description...">
        </head><body>
        <script type="text/javascript">
            xplGlobal.document.metadata={"title":"Deep Residual Learning","displayDocTitle":"Deep Residual Learning for Image Recognition",
            "authors":[{"name":"Kaiming He"},{"name":"Xiangyu Zhang"}],
            "abstract":"Deeper neural networks are more difficult to train.",
            "publicationDate":"27-30 June 2016","doi":"10.1109/CVPR.2016.90",
            "publicationTitle":"2016 IEEE Conference on Computer Vision and Pattern Recognition (CVPR)",
            "keywords":[{"type":"IEEE Keywords","kwd":["Training","Neural networks"]},{"type":"Author Keywords ","kwd":["residual learning"]}]};
        </script>
        </body></html>
    "#;

    #[test]
    fn test_paper_ids() {
        let source = integration();
        let cases = [
            ("https://ieeexplore.ieee.org/document/7780459", "7780459"),
            ("https://ieeexplore.ieee.org/document/7780459/", "7780459"),
            ("https://ieeexplore.ieee.org/abstract/document/7780459?casa_token=x", "7780459"),
            ("https://ieeexplore.ieee.org/stamp/stamp.jsp?tp=&arnumber=7780459", "7780459"),
        ];
        for (url, expected) in cases {
            assert_eq!(source.extract_paper_id(url).as_deref(), Some(expected), "{}", url);
        }
        assert_eq!(source.extract_paper_id("https://ieeexplore.ieee.org/xpl/conhome/1000147/all-proceedings"), None);
    }

    #[test]
    fn test_embedded_metadata_beats_open_graph() {
        let page = Page::parse("https://ieeexplore.ieee.org/document/7780459", XPL_PAGE);
        let source = integration();
        let meta = source.create_metadata_extractor(&page).extract_all();

        assert_eq!(meta.title, "Deep Residual Learning for Image Recognition");
        assert_eq!(meta.authors, "Kaiming He, Xiangyu Zhang");
        assert_eq!(meta.description, "Deeper neural networks are more difficult to train.");
        assert_eq!(meta.published_date, "27-30 June 2016");
        assert_eq!(meta.doi, "10.1109/CVPR.2016.90");
        assert_eq!(
            meta.journal_name,
            "2016 IEEE Conference on Computer Vision and Pattern Recognition (CVPR)"
        );
        assert_eq!(meta.tags, vec!["residual learning"]);
    }

    #[test]
    fn test_falls_back_to_open_graph() {
        let page = Page::parse(
            "https://ieeexplore.ieee.org/document/1",
            r#"<html><head><meta property="og:title" content="Only OG"></head></html>"#,
        );
        let source = integration();
        let extractor = source.create_metadata_extractor(&page);
        assert_eq!(extractor.extract_title(), "Only OG");
        assert!(extractor.extract_tags().is_empty());
    }
}
