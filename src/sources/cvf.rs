//! CVF Open Access (CVPR, ICCV, WACV)

use once_cell::sync::Lazy;
use regex::Regex;

use super::{compile, SourceIntegration};
use crate::extractor::rules::{ExtractorRules, Lookup};
use crate::page::Page;

static URL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        // content/CVPR2023/html/<slug>_paper.html, workshops under CVPR2023W/<workshop>/
        r"^https?://openaccess\.thecvf\.com/content/([A-Za-z]+)(\d{4})W?/(?:[^/]+/)?(?:html|papers)/([^/?#]+?)_paper\.(?:html|pdf)",
        // content_cvpr_2018/html/<slug>_paper.html
        r"^https?://openaccess\.thecvf\.com/content_([A-Za-z]+)_(\d{4})(?:_workshops)?/(?:[^/]+/)?(?:html|papers)/([^/?#]+?)_paper\.(?:html|pdf)",
    ])
});

static RULES: ExtractorRules = ExtractorRules {
    title: &[Lookup::Meta("citation_title"), Lookup::Text("#papertitle")],
    authors: &[
        Lookup::Names("citation_author"),
        Lookup::Text("#authors b"),
    ],
    description: &[Lookup::Text("#abstract")],
    published_date: &[
        Lookup::Meta("citation_publication_date"),
        Lookup::Derived(conference_year),
    ],
    doi: &[],
    journal_name: &[
        Lookup::Meta("citation_conference_title"),
        Lookup::Derived(conference_name),
    ],
    tags: &[],
};

pub fn integration() -> SourceIntegration {
    SourceIntegration::new(
        "cvf",
        "CVF Open Access",
        "https://openaccess.thecvf.com",
        URL_PATTERNS.as_slice(),
        &RULES,
    )
}

fn conference_parts(page: &Page) -> Option<(String, String)> {
    URL_PATTERNS.iter().find_map(|re| {
        re.captures(page.url())
            .map(|c| (c[1].to_uppercase(), c[2].to_string()))
    })
}

fn conference_year(page: &Page) -> Option<String> {
    conference_parts(page).map(|(_, year)| year)
}

/// "CVPR 2023"
fn conference_name(page: &Page) -> Option<String> {
    conference_parts(page).map(|(conf, year)| format!("{} {}", conf, year))
}
