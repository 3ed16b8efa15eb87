use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::model::grid::DEFAULT_TOP_SITES_COUNT;
use crate::model::Link;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_top_sites_count")]
    pub top_sites_count: usize,
    /// JSON file with the link rows (takes precedence over inline `links`)
    #[serde(default)]
    pub links_path: Option<String>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default = "default_icon_mode")]
    pub icon_mode: String,
    /// Command used to open a site (receives the url as its only argument)
    #[serde(default)]
    pub open_command: Option<String>,
    /// Command used for private windows; private opens are refused without it
    #[serde(default)]
    pub private_open_command: Option<String>,
    /// Message id overrides for button titles and labels
    #[serde(default)]
    pub messages: HashMap<String, String>,
}

fn default_top_sites_count() -> usize {
    DEFAULT_TOP_SITES_COUNT
}

fn default_icon_mode() -> String {
    "nerdfont".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_sites_count: default_top_sites_count(),
            links_path: None,
            links: Vec::new(),
            vim_mode: false,
            icon_mode: default_icon_mode(),
            open_command: None,
            private_open_command: None,
            messages: HashMap::new(),
        }
    }
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("Invalid config file")
    }
}

/// Read a JSON array of link rows
pub fn load_links(path: &Path) -> Result<Vec<Link>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read links file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Invalid links JSON in {}", path.display()))
}
