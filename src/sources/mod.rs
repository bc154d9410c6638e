//! Source integrations - one per publisher
//!
//! An integration pairs the URL patterns a publisher serves papers under with
//! the lookup chains that read its pages. Integrations are plain data built
//! once by the registry and never mutated.

mod acl;
mod acm;
mod arxiv;
mod cvf;
mod ieee;
mod nature;
mod neurips;
mod openreview;
mod plos;
mod pnas;
mod rxiv;
mod sciencedirect;
mod springer;

use regex::Regex;

use crate::extractor::rules::ExtractorRules;
use crate::extractor::{MetadataExtractor, RuleExtractor};
use crate::page::Page;

/// Every shipped integration, in resolution order
pub fn builtin() -> Vec<SourceIntegration> {
    vec![
        arxiv::integration(),
        rxiv::medrxiv(),
        rxiv::biorxiv(),
        openreview::integration(),
        neurips::integration(),
        cvf::integration(),
        acl::integration(),
        ieee::integration(),
        acm::integration(),
        springer::integration(),
        nature::integration(),
        pnas::integration(),
        sciencedirect::integration(),
        plos::integration(),
    ]
}

/// A publisher: identity, URL recognition and a metadata extractor factory
#[derive(Debug)]
pub struct SourceIntegration {
    id: &'static str,
    name: &'static str,
    homepage: &'static str,
    url_patterns: &'static [Regex],
    rules: &'static ExtractorRules,
}

impl SourceIntegration {
    pub fn new(
        id: &'static str,
        name: &'static str,
        homepage: &'static str,
        url_patterns: &'static [Regex],
        rules: &'static ExtractorRules,
    ) -> Self {
        Self {
            id,
            name,
            homepage,
            url_patterns,
            rules,
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn homepage(&self) -> &'static str {
        self.homepage
    }

    /// URL patterns in the order they are tried
    pub fn url_patterns(&self) -> &'static [Regex] {
        self.url_patterns
    }

    /// Whether any of this source's patterns accepts the URL
    pub fn matches(&self, url: &str) -> bool {
        let url = url.trim();
        self.url_patterns.iter().any(|re| re.is_match(url))
    }

    /// Paper identifier for a URL, or None when no pattern matches
    pub fn extract_paper_id(&self, url: &str) -> Option<String> {
        capture_id(self.url_patterns, url)
    }

    /// Extractor bound to one page of this source
    pub fn create_metadata_extractor<'p>(&self, page: &'p Page) -> Box<dyn MetadataExtractor + 'p> {
        Box::new(RuleExtractor::new(page, self.id, self.rules))
    }
}

/// Compile a static pattern table
///
/// Patterns are compile-time constants; a bad one is a programming error.
pub(crate) fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("Invalid source URL pattern"))
        .collect()
}

/// First matching pattern's non-empty capture groups, joined with `-`
pub(crate) fn capture_id(patterns: &[Regex], url: &str) -> Option<String> {
    let url = url.trim();
    for re in patterns {
        if let Some(caps) = re.captures(url) {
            let parts: Vec<&str> = caps
                .iter()
                .skip(1)
                .flatten()
                .map(|m| m.as_str())
                .filter(|s| !s.is_empty())
                .collect();
            if !parts.is_empty() {
                return Some(parts.join("-"));
            }
        }
    }
    None
}

/// Four-digit year captured by the first group of `re` in the page URL
pub(crate) fn year_from_url(re: &Regex, page: &Page) -> Option<String> {
    re.captures(page.url())
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}
