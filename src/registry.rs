//! Registry - the fixed, ordered table of source integrations
//!
//! Built once on first use and read-only afterwards. When several sources
//! accept the same URL the earlier one in the table wins.

use once_cell::sync::Lazy;
use tracing::{debug, warn};

use crate::sources::{self, SourceIntegration};

static REGISTRY: Lazy<Vec<SourceIntegration>> = Lazy::new(sources::builtin);

/// A URL resolved to the source that claims it
#[derive(Debug, Clone)]
pub struct Resolution {
    pub source: &'static SourceIntegration,
    pub paper_id: String,
}

/// Every integration, in resolution order
pub fn all_integrations() -> &'static [SourceIntegration] {
    REGISTRY.as_slice()
}

/// Integration with exactly this id
pub fn integration_by_id(id: &str) -> Option<&'static SourceIntegration> {
    all_integrations().iter().find(|s| s.id() == id)
}

/// All URL patterns of all integrations, flattened in registry order
///
/// This is the list a host uses to decide which pages get extraction logic.
pub fn all_content_script_matches() -> Vec<&'static str> {
    all_integrations()
        .iter()
        .flat_map(|s| s.url_patterns().iter().map(|re| re.as_str()))
        .collect()
}

/// Every integration that accepts the URL, in registry order
pub fn matching_integrations(url: &str) -> Vec<&'static SourceIntegration> {
    all_integrations().iter().filter(|s| s.matches(url)).collect()
}

/// First integration that accepts the URL
pub fn find_for_url(url: &str) -> Option<&'static SourceIntegration> {
    resolve(url).map(|r| r.source)
}

/// Source and paper id for a URL
pub fn resolve(url: &str) -> Option<Resolution> {
    resolve_filtered(url, |_| true)
}

/// Like [`resolve`], skipping integrations rejected by `allowed`
pub fn resolve_filtered<F>(url: &str, allowed: F) -> Option<Resolution>
where
    F: Fn(&SourceIntegration) -> bool,
{
    let candidates: Vec<Resolution> = all_integrations()
        .iter()
        .filter(|s| allowed(*s))
        .filter_map(|source| {
            source
                .extract_paper_id(url)
                .map(|paper_id| Resolution { source, paper_id })
        })
        .collect();

    if candidates.len() > 1 {
        let ids: Vec<&str> = candidates.iter().map(|r| r.source.id()).collect();
        warn!(url, sources = ?ids, "URL matches several sources, using the first");
    }

    let first = candidates.into_iter().next();
    match &first {
        Some(r) => debug!(url, source = r.source.id(), paper_id = %r.paper_id, "resolved"),
        None => debug!(url, "no source matched"),
    }
    first
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_id() {
        let arxiv = integration_by_id("arxiv").expect("arxiv registered");
        assert_eq!(arxiv.name(), "arXiv");
        assert!(integration_by_id("nonexistent").is_none());
        assert!(integration_by_id("ArXiv").is_none());
    }

    #[test]
    fn test_content_script_matches_length() {
        let expected: usize = all_integrations().iter().map(|s| s.url_patterns().len()).sum();
        assert_eq!(all_content_script_matches().len(), expected);
    }

    #[test]
    fn test_resolve() {
        let resolved = resolve("https://arxiv.org/abs/1706.03762v5").unwrap();
        assert_eq!(resolved.source.id(), "arxiv");
        assert_eq!(resolved.paper_id, "1706.03762");
        assert!(resolve("https://example.com/blog").is_none());
    }

    #[test]
    fn test_find_for_url() {
        let source = find_for_url("https://www.nature.com/articles/nature14539").unwrap();
        assert_eq!(source.id(), "nature");
        assert_eq!(matching_integrations("https://www.nature.com/articles/nature14539").len(), 1);
        assert!(find_for_url("").is_none());
    }

    #[test]
    fn test_resolve_filtered_skips_disabled() {
        let url = "https://arxiv.org/abs/1706.03762";
        assert!(resolve_filtered(url, |s| s.id() != "arxiv").is_none());
    }
}
