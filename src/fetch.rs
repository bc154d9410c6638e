//! Page acquisition for the CLI
//!
//! The library never fetches on its own. The binary either reads HTML the
//! user saved (file or stdin) or, when asked, downloads it over plain HTTP.

use std::io::Read;
use std::path::Path;
use std::time::Duration;

use tracing::debug;
use ureq::ResponseExt;
use url::Url;

use crate::config::Config;
use crate::error::Result;

/// Raw page handed to the extractor
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub url: String,
    pub html: String,
}

/// Download a page with the configured timeout and User-Agent
pub fn fetch_page(url: &str, config: &Config) -> Result<FetchedPage> {
    let parsed = Url::parse(url)?;

    let agent: ureq::Agent = ureq::Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(config.fetch_timeout_secs)))
        .build()
        .into();

    debug!(url = %parsed, timeout = config.fetch_timeout_secs, "fetching page");
    let response = agent
        .get(parsed.as_str())
        .header("User-Agent", &config.user_agent)
        .call()?;

    let final_url = response.get_uri().to_string();
    let html = response.into_body().read_to_string()?;
    debug!(final_url = %final_url, bytes = html.len(), "fetched page");

    Ok(FetchedPage {
        url: final_url,
        html,
    })
}

/// Read a saved page or record from a file, or from stdin when the path is `-`
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        Ok(input)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}
