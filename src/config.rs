use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::api::DEFAULT_ENDPOINT;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Backend `fetch_news` URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Program used to open article links (defaults per platform)
    #[serde(default)]
    pub open_command: Option<String>,
    /// Country preselected at startup
    #[serde(default)]
    pub default_country: Option<String>,
    /// Give up on a fetch after this many seconds (no limit when unset)
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    #[serde(default)]
    pub vim_mode: bool,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            open_command: None,
            default_country: None,
            request_timeout_secs: None,
            vim_mode: false,
        }
    }
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self> {
        // An empty file is a valid config with every default
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Program to open links with: configured value or the platform opener
    pub fn resolved_open_command(&self) -> String {
        self.open_command
            .clone()
            .unwrap_or_else(|| default_open_command().to_string())
    }
}

fn default_open_command() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    }
}
