//! Page - a parsed publisher page bound to its URL
//!
//! Every query walks the parsed document again. Extractors hold a borrowed
//! `Page` for their whole lifetime and never cache results between calls.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::normalize::normalize_whitespace;

/// Attributes that can key a meta tag
const META_KEY_ATTRS: [&str; 3] = ["name", "property", "itemprop"];

/// A parsed HTML document and the URL it was loaded from
pub struct Page {
    url: String,
    document: Html,
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page").field("url", &self.url).finish_non_exhaustive()
    }
}

impl Page {
    /// Parse a page from its URL and HTML content
    pub fn parse(url: &str, html: &str) -> Self {
        Self {
            url: url.to_string(),
            document: Html::parse_document(html),
        }
    }

    /// The URL this page was loaded from
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Host of the page URL, if it parses
    pub fn host(&self) -> Option<String> {
        Url::parse(&self.url)
            .ok()
            .and_then(|u| u.host_str().map(String::from))
    }

    /// Content of the first non-empty meta tag keyed by `key`
    ///
    /// Keys are compared case-insensitively against `name`, `property` and `itemprop`.
    pub fn meta(&self, key: &str) -> Option<String> {
        self.meta_all(key).into_iter().next()
    }

    /// Contents of every non-empty meta tag keyed by `key`, in document order
    pub fn meta_all(&self, key: &str) -> Vec<String> {
        let Ok(selector) = Selector::parse("meta[content]") else {
            return Vec::new();
        };
        self.document
            .select(&selector)
            .filter(|el| meta_key_matches(el, key))
            .filter_map(|el| el.value().attr("content"))
            .map(normalize_whitespace)
            .filter(|c| !c.is_empty())
            .collect()
    }

    /// Text of the first element matching a CSS selector that has non-empty text
    pub fn select_text(&self, css: &str) -> Option<String> {
        self.select_all_text(css).into_iter().next()
    }

    /// Text of every element matching a CSS selector, empties skipped
    ///
    /// Invalid selectors match nothing.
    pub fn select_all_text(&self, css: &str) -> Vec<String> {
        let Ok(selector) = Selector::parse(css) else {
            return Vec::new();
        };
        self.document
            .select(&selector)
            .map(|el| element_text(&el))
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Value of `attr` on the first element matching a CSS selector that carries it
    pub fn select_attr(&self, css: &str, attr: &str) -> Option<String> {
        let selector = Selector::parse(css).ok()?;
        self.document
            .select(&selector)
            .filter_map(|el| el.value().attr(attr))
            .map(normalize_whitespace)
            .find(|v| !v.is_empty())
    }
}

fn meta_key_matches(el: &ElementRef, key: &str) -> bool {
    META_KEY_ATTRS.iter().any(|attr| {
        el.value()
            .attr(attr)
            .map(|v| v.trim().eq_ignore_ascii_case(key))
            .unwrap_or(false)
    })
}

fn element_text(el: &ElementRef) -> String {
    let text: String = el.text().collect::<Vec<_>>().join(" ");
    normalize_whitespace(&text)
}
