use once_cell::sync::Lazy;
use regex::Regex;

// Pre-compiled regex for whitespace normalization (compile once, use many times)
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").expect("Invalid whitespace regex pattern")
});

static DOI_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:https?://(?:dx\.)?doi\.org/|doi:\s*)").expect("Invalid DOI prefix regex")
});

static DOI_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^10\.\d{4,9}/\S+$").expect("Invalid DOI regex")
});

static ARXIV_VERSION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"v\d+$").expect("Invalid arXiv version regex")
});

/// Normalize whitespace: collapse runs of spaces/newlines into single spaces and trim
pub fn normalize_whitespace(content: &str) -> String {
    WHITESPACE_RE.replace_all(content, " ").trim().to_string()
}

/// Split a keyword list on `,` and `;`, dropping empty entries
pub fn split_keywords(content: &str) -> Vec<String> {
    content
        .split([',', ';'])
        .map(normalize_whitespace)
        .filter(|k| !k.is_empty())
        .collect()
}

/// Strip resolver and `doi:` prefixes; returns None unless the rest looks like a DOI
pub fn clean_doi(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let stripped = DOI_PREFIX_RE.replace(trimmed, "");
    let doi = stripped.trim();
    if DOI_RE.is_match(doi) {
        Some(doi.to_string())
    } else {
        None
    }
}

/// Reorder a `Last, First` personal name to `First Last`
///
/// Names without exactly one comma are returned whitespace-normalized but otherwise untouched.
pub fn display_name(name: &str) -> String {
    let name = normalize_whitespace(name);
    let mut parts = name.split(',');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(last), Some(first), None) if !last.trim().is_empty() && !first.trim().is_empty() => {
            format!("{} {}", first.trim(), last.trim())
        }
        _ => name,
    }
}

/// Drop a trailing arXiv version marker (`2301.12345v3` -> `2301.12345`)
pub fn strip_arxiv_version(id: &str) -> String {
    ARXIV_VERSION_RE.replace(id, "").to_string()
}

/// Truncate to at most `max_chars` characters (not bytes)
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
