//! # Client configuration — `movie-search.toml`
//!
//! ```toml
//! [catalog]
//! base_url = "https://www.omdbapi.com/"
//! api_key = "..."
//!
//! [search]
//! debounce_ms = 500   # quiet time before a search is sent
//! ```
//!
//! Every section and key is optional; a missing or empty file is equivalent to
//! [`AppConfig::default`].

use std::time::Duration;

use api::CatalogConfig;
use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Search-as-you-type settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Debounce delay in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_debounce_ms() -> u64 {
    500
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl AppConfig {
    /// Builder method to set the debounce delay.
    pub fn with_debounce_ms(mut self, ms: u64) -> Self {
        self.search.debounce_ms = ms;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "movie-search.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
