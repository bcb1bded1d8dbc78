//! # Catalog client
//!
//! [`Catalog`] is the seam the views depend on; [`OmdbClient`] implements it over
//! HTTP with `reqwest` (which uses the browser `fetch` API on wasm).
//!
//! | Operation | Request |
//! |-----------|---------|
//! | [`search_by_title`](Catalog::search_by_title) | `GET {base_url}?apikey=..&s={query}&page={page}` |
//! | [`fetch_by_id`](Catalog::fetch_by_id) | `GET {base_url}?apikey=..&i={id}&plot=full` |
//!
//! Queries are passed through untouched: avoiding blank searches is the caller's job.

use std::future::Future;

use tracing::{debug, warn};

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::models::{decode_detail, decode_search, MovieDetail, SearchPage};

/// Async interface to the remote movie catalog.
pub trait Catalog {
    /// Search titles matching `query`, one page at a time (pages start at 1).
    fn search_by_title(
        &self,
        query: &str,
        page: u32,
    ) -> impl Future<Output = Result<SearchPage, CatalogError>>;

    /// Fetch the full record for one catalog identifier.
    fn fetch_by_id(&self, id: &str) -> impl Future<Output = Result<MovieDetail, CatalogError>>;
}

/// HTTP client for the OMDb catalog.
#[derive(Clone, Debug)]
pub struct OmdbClient {
    config: CatalogConfig,
    http: reqwest::Client,
}

impl OmdbClient {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Issue one GET and return the body text. `failure` is the user-facing
    /// message for transport problems.
    async fn get(&self, params: &[(&str, &str)], failure: &str) -> Result<String, CatalogError> {
        let response = self
            .http
            .get(&self.config.base_url)
            .query(&[("apikey", self.config.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "catalog request failed");
                CatalogError::Transport(failure.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "catalog returned non-success status");
            return Err(CatalogError::Transport(failure.to_string()));
        }

        response.text().await.map_err(|e| {
            warn!(error = %e, "failed to read catalog response body");
            CatalogError::Transport(failure.to_string())
        })
    }
}

impl Catalog for OmdbClient {
    async fn search_by_title(&self, query: &str, page: u32) -> Result<SearchPage, CatalogError> {
        debug!(query, page, "searching catalog");
        let page_param = page.to_string();
        let body = self
            .get(&[("s", query), ("page", &page_param)], "Failed to fetch movies")
            .await?;
        decode_search(&body, page).inspect_err(|e| warn!(query, error = %e, "search failed"))
    }

    async fn fetch_by_id(&self, id: &str) -> Result<MovieDetail, CatalogError> {
        debug!(id, "fetching catalog entry");
        let body = self
            .get(&[("i", id), ("plot", "full")], "Failed to fetch movie details")
            .await?;
        decode_detail(&body).inspect_err(|e| warn!(id, error = %e, "detail fetch failed"))
    }
}
