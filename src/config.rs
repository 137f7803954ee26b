use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::constants::{
    DEFAULT_BASE_URL, PAGE_CACHE_MAX_CAPACITY, PAGE_CACHE_TTL_SECS, REALMS_PER_PAGE,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the realm listing service
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Number of realms requested per page
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default)]
    pub cache: CacheConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            per_page: default_per_page(),
            cache: CacheConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of resolved pages kept in memory
    #[serde(default = "default_max_pages")]
    pub max_pages: u64,
    /// Seconds before a cached page is considered stale
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_pages: default_max_pages(),
            ttl_secs: default_ttl_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_per_page() -> u32 {
    REALMS_PER_PAGE
}

fn default_max_pages() -> u64 {
    PAGE_CACHE_MAX_CAPACITY
}

fn default_ttl_secs() -> u64 {
    PAGE_CACHE_TTL_SECS
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.per_page == 0 {
            anyhow::bail!("per_page must be at least 1");
        }
        if self.base_url.is_empty() {
            anyhow::bail!("base_url must not be empty");
        }
        Ok(())
    }
}
