//! Catalog error taxonomy.

use thiserror::Error;

/// Why a catalog query produced no data.
///
/// The `Display` text is what the views show to the user, so every variant
/// renders a human readable sentence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The catalog answered but had nothing for the query or identifier.
    #[error("{0}")]
    NotFound(String),

    /// The catalog rejected the request for another reason
    /// (too many results, bad API key, ...).
    #[error("{0}")]
    Service(String),

    /// The request never produced a usable answer: network failure,
    /// non-success HTTP status, or an undecodable body.
    #[error("{0}")]
    Transport(String),
}

impl CatalogError {
    /// Classify a `Response: "False"` message reported by the catalog.
    pub fn from_service_message(message: String) -> Self {
        let lower = message.to_lowercase();
        if lower.contains("not found")
            || lower.contains("no movies")
            || lower.contains("incorrect imdb id")
        {
            Self::NotFound(message)
        } else {
            Self::Service(message)
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_not_found_messages() {
        assert!(CatalogError::from_service_message("Movie not found!".into()).is_not_found());
        assert!(CatalogError::from_service_message("Incorrect IMDb ID.".into()).is_not_found());
        assert!(
            CatalogError::from_service_message("Series or episode not found!".into())
                .is_not_found()
        );
    }

    #[test]
    fn test_other_messages_are_service_errors() {
        assert_eq!(
            CatalogError::from_service_message("Too many results.".into()),
            CatalogError::Service("Too many results.".into())
        );
        assert_eq!(
            CatalogError::from_service_message("Invalid API key!".into()).to_string(),
            "Invalid API key!"
        );
    }
}
