use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{PaperfeedError, Result};

/// Global paperfeed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Source ids the host should never resolve URLs to
    #[serde(default)]
    pub disabled_sources: Vec<String>,

    /// Abstracts longer than this (in characters) are truncated in records
    #[serde(default = "default_abstract_max_chars")]
    pub abstract_max_chars: usize,

    /// User-Agent sent when fetching pages
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Global timeout for page fetches in seconds
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
}

fn default_abstract_max_chars() -> usize {
    1000
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; paperfeed/0.1)".to_string()
}

fn default_fetch_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            disabled_sources: Vec::new(),
            abstract_max_chars: default_abstract_max_chars(),
            user_agent: default_user_agent(),
            fetch_timeout_secs: default_fetch_timeout(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path, falling back to defaults when missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to the given path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| PaperfeedError::ConfigError(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the config file path
    ///
    /// Supports PAPERFEED_CONFIG environment variable for test isolation
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var("PAPERFEED_CONFIG") {
            return Ok(PathBuf::from(path));
        }
        let dirs = ProjectDirs::from("", "", "paperfeed").ok_or_else(|| {
            PaperfeedError::ConfigError("Could not determine config directory".into())
        })?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Whether the host may resolve URLs to this source
    pub fn is_source_enabled(&self, id: &str) -> bool {
        !self.disabled_sources.iter().any(|s| s.eq_ignore_ascii_case(id))
    }

    /// Add a source to `disabled_sources`; false if it was already there
    pub fn disable_source(&mut self, id: &str) -> bool {
        if !self.is_source_enabled(id) {
            return false;
        }
        self.disabled_sources.push(id.to_ascii_lowercase());
        true
    }

    /// Remove every spelling of a source from `disabled_sources`; false if none was there
    pub fn enable_source(&mut self, id: &str) -> bool {
        let before = self.disabled_sources.len();
        self.disabled_sources.retain(|s| !s.eq_ignore_ascii_case(id));
        self.disabled_sources.len() != before
    }
}
