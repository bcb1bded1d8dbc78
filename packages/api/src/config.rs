//! Catalog connection settings.

use serde::{Deserialize, Serialize};

/// Public OMDb endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

const BUILTIN_API_KEY: &str = "1084abb1";

/// Where the catalog lives and how to authenticate against it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// OMDb API key. Defaults to `OMDB_API_KEY` at build time, then the bundled key.
    #[serde(default = "default_api_key")]
    pub api_key: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_key() -> String {
    option_env!("OMDB_API_KEY")
        .unwrap_or(BUILTIN_API_KEY)
        .to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: default_api_key(),
        }
    }
}

impl CatalogConfig {
    /// Create a config pointing at an arbitrary endpoint (mock servers, proxies).
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}
