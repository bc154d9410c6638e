//! Declarative lookup chains
//!
//! A publisher describes, per field, the ordered lookups that can supply a
//! value. The first lookup producing an acceptable value wins.

use std::fmt;

use tracing::debug;

use crate::normalize::{clean_doi, display_name, normalize_whitespace};
use crate::page::Page;

/// Separator used when several matches are folded into one value
pub const JOIN_SEPARATOR: &str = ", ";

/// One attempt at finding a field value on a page
pub enum Lookup {
    /// First meta tag with this name/property
    Meta(&'static str),
    /// Every meta tag with this name/property, joined
    MetaJoined(&'static str),
    /// Every meta tag holding a personal name, `Last, First` reordered, joined
    Names(&'static str),
    /// Text of the first element matching a CSS selector
    Text(&'static str),
    /// Text of every element matching a CSS selector, joined
    TextJoined(&'static str),
    /// Attribute of the first element matching a CSS selector
    Attr(&'static str, &'static str),
    /// Fixed value
    Const(&'static str),
    /// Computed from the page (URL, embedded JSON, ...)
    Derived(fn(&Page) -> Option<String>),
}

impl fmt::Debug for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Meta(k) => write!(f, "meta:{}", k),
            Lookup::MetaJoined(k) => write!(f, "meta*:{}", k),
            Lookup::Names(k) => write!(f, "names:{}", k),
            Lookup::Text(css) => write!(f, "text:{}", css),
            Lookup::TextJoined(css) => write!(f, "text*:{}", css),
            Lookup::Attr(css, attr) => write!(f, "attr:{}@{}", css, attr),
            Lookup::Const(v) => write!(f, "const:{}", v),
            Lookup::Derived(_) => write!(f, "derived"),
        }
    }
}

impl Lookup {
    /// Run this lookup against a page
    pub fn evaluate(&self, page: &Page) -> Option<String> {
        match self {
            Lookup::Meta(key) => page.meta(key),
            Lookup::MetaJoined(key) => join_non_empty(page.meta_all(key)),
            Lookup::Names(key) => {
                join_non_empty(page.meta_all(key).iter().map(|n| display_name(n)).collect())
            }
            Lookup::Text(css) => page.select_text(css),
            Lookup::TextJoined(css) => join_non_empty(page.select_all_text(css)),
            Lookup::Attr(css, attr) => page.select_attr(css, attr),
            Lookup::Const(value) => Some((*value).to_string()),
            Lookup::Derived(f) => f(page),
        }
    }
}

fn join_non_empty(values: Vec<String>) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values.join(JOIN_SEPARATOR))
    }
}

/// The metadata fields every extractor exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Authors,
    Description,
    PublishedDate,
    Doi,
    JournalName,
    Tags,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Authors => "authors",
            Field::Description => "description",
            Field::PublishedDate => "published_date",
            Field::Doi => "doi",
            Field::JournalName => "journal_name",
            Field::Tags => "tags",
        }
    }

    /// Clean a raw lookup value; `None` sends the chain on to the next lookup
    fn accept(&self, raw: String) -> Option<String> {
        match self {
            Field::Doi => clean_doi(&raw),
            _ => {
                let value = normalize_whitespace(&raw);
                (!value.is_empty()).then_some(value)
            }
        }
    }
}

/// Per-field lookup chains for one extractor
#[derive(Debug)]
pub struct ExtractorRules {
    pub title: &'static [Lookup],
    pub authors: &'static [Lookup],
    pub description: &'static [Lookup],
    pub published_date: &'static [Lookup],
    pub doi: &'static [Lookup],
    pub journal_name: &'static [Lookup],
    pub tags: &'static [Lookup],
}

impl ExtractorRules {
    /// No lookups at all; use with struct update syntax
    pub const EMPTY: ExtractorRules = ExtractorRules {
        title: &[],
        authors: &[],
        description: &[],
        published_date: &[],
        doi: &[],
        journal_name: &[],
        tags: &[],
    };

    pub fn chain(&self, field: Field) -> &'static [Lookup] {
        match field {
            Field::Title => self.title,
            Field::Authors => self.authors,
            Field::Description => self.description,
            Field::PublishedDate => self.published_date,
            Field::Doi => self.doi,
            Field::JournalName => self.journal_name,
            Field::Tags => self.tags,
        }
    }

    /// Walk the chain for `field`; first acceptable value wins
    pub fn resolve(&self, page: &Page, field: Field, source: &str) -> Option<String> {
        for lookup in self.chain(field) {
            if let Some(value) = lookup.evaluate(page).and_then(|raw| field.accept(raw)) {
                debug!(source, field = field.as_str(), lookup = ?lookup, "lookup matched");
                return Some(value);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static RULES: ExtractorRules = ExtractorRules {
        title: &[Lookup::Meta("citation_title"), Lookup::Text("h1.title")],
        doi: &[Lookup::Meta("dc.identifier"), Lookup::Meta("citation_doi")],
        journal_name: &[Lookup::Const("Example Journal")],
        ..ExtractorRules::EMPTY
    };

    #[test]
    fn test_chain_order() {
        let page = Page::parse(
            "https://example.org/paper",
            r#"<html><head><meta name="citation_title" content="Meta Title"></head>
               <body><h1 class="title">Heading Title</h1></body></html>"#,
        );
        assert_eq!(RULES.resolve(&page, Field::Title, "test").as_deref(), Some("Meta Title"));
    }

    #[test]
    fn test_chain_falls_through_to_selector() {
        let page = Page::parse(
            "https://example.org/paper",
            r#"<html><body><h1 class="title">  Heading
               Title </h1></body></html>"#,
        );
        assert_eq!(RULES.resolve(&page, Field::Title, "test").as_deref(), Some("Heading Title"));
    }

    #[test]
    fn test_doi_lookup_skips_non_doi_values() {
        let page = Page::parse(
            "https://example.org/paper",
            r#"<html><head>
               <meta name="dc.identifier" content="urn:isbn:1234">
               <meta name="citation_doi" content="doi:10.1000/xyz123">
               </head></html>"#,
        );
        assert_eq!(RULES.resolve(&page, Field::Doi, "test").as_deref(), Some("10.1000/xyz123"));
    }

    #[test]
    fn test_names_lookup_keeps_one_entry_per_author() {
        let page = Page::parse(
            "https://example.org/paper",
            r#"<html><head>
               <meta name="citation_author" content="LeCun, Yann">
               <meta name="citation_author" content="Bengio, Yoshua">
               <meta name="citation_author" content="Geoffrey Hinton">
               </head></html>"#,
        );
        assert_eq!(
            Lookup::Names("citation_author").evaluate(&page).as_deref(),
            Some("Yann LeCun, Yoshua Bengio, Geoffrey Hinton")
        );
        assert_eq!(
            Lookup::MetaJoined("citation_author").evaluate(&page).as_deref(),
            Some("LeCun, Yann, Bengio, Yoshua, Geoffrey Hinton")
        );
    }

    #[test]
    fn test_empty_chain_resolves_nothing() {
        let page = Page::parse("https://example.org/paper", "<html></html>");
        assert_eq!(RULES.resolve(&page, Field::Tags, "test"), None);
        assert_eq!(
            RULES.resolve(&page, Field::JournalName, "test").as_deref(),
            Some("Example Journal")
        );
    }
}
