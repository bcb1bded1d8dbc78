//! Detail view states: `Loading` until the single fetch for the route identifier
//! settles into `Loaded`, `NotFound` or `Failed`.

use api::{Catalog, CatalogError, MovieDetail};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum DetailState {
    #[default]
    Loading,
    Loaded(Box<MovieDetail>),
    /// The catalog does not know the identifier.
    NotFound(String),
    Failed(String),
}

impl DetailState {
    pub fn from_result(result: Result<MovieDetail, CatalogError>) -> Self {
        match result {
            Ok(detail) => Self::Loaded(Box::new(detail)),
            Err(CatalogError::NotFound(message)) => Self::NotFound(message),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    /// Message shown with the back-to-search action, for both failure states.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::NotFound(message) | Self::Failed(message) => Some(message),
            Self::Loading | Self::Loaded(_) => None,
        }
    }
}

/// Fetch one catalog entry and fold the outcome into a [`DetailState`].
pub async fn load_detail<C: Catalog>(catalog: &C, id: &str) -> DetailState {
    DetailState::from_result(catalog.fetch_by_id(id).await)
}
