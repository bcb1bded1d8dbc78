//! Catalog client context.

use std::time::Duration;

use api::OmdbClient;
use dioxus::prelude::*;

use crate::config::AppConfig;

/// Catalog client plus the search settings the views need.
#[derive(Clone, Debug)]
pub struct CatalogContext {
    pub client: OmdbClient,
    pub debounce: Duration,
}

/// Get the catalog client configured by [`CatalogProvider`].
pub fn use_catalog() -> CatalogContext {
    use_context::<CatalogContext>()
}

/// Provider component building the catalog client from the app config.
#[component]
pub fn CatalogProvider(config: AppConfig, children: Element) -> Element {
    use_context_provider(|| CatalogContext {
        client: OmdbClient::new(config.catalog.clone()),
        debounce: config.search.debounce(),
    });

    rsx! {
        {children}
    }
}
