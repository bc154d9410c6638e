use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaperfeedError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] ureq::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("Unknown source: {0}")]
    UnknownSource(String),

    #[error("No source integration recognises URL: {0}")]
    UnmatchedUrl(String),

    #[error("Source is disabled in config: {0}")]
    SourceDisabled(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("No page to extract from")]
    NoPageInput,
}

impl PaperfeedError {
    /// Get an actionable hint for how to resolve this error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            PaperfeedError::HttpError(_) => Some(
                "Check your internet connection, or save the page and pass it with:\n  paperfeed extract <url> --html page.html"
            ),
            PaperfeedError::UnknownSource(_) => Some(
                "Run `paperfeed sources` to see available source ids"
            ),
            PaperfeedError::UnmatchedUrl(_) => Some(
                "Run `paperfeed matches` to see the URL patterns each source accepts"
            ),
            PaperfeedError::SourceDisabled(_) => Some(
                "Remove the id from `disabled_sources` in your config file"
            ),
            PaperfeedError::JsonError(_) => Some(
                "Records must be JSON objects as printed by `paperfeed extract --json`"
            ),
            PaperfeedError::NoPageInput => Some(
                "Pass a saved page with --html <file> (or - for stdin), or download it with --fetch"
            ),
            PaperfeedError::TomlError(_) | PaperfeedError::ConfigError(_) => Some(
                "Check the config file, or point PAPERFEED_CONFIG at another one"
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PaperfeedError>;
