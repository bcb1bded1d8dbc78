//! # Catalog data model and response decoding
//!
//! The OMDb wire format uses PascalCase field names, string-typed numbers and the
//! literal `"N/A"` for missing values. The types here normalise that shape once so
//! the rest of the workspace only sees idiomatic Rust values.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`MovieSummary`] | One search hit: identifier, title, year, kind and an optional poster URL. |
//! | [`SearchPage`] | A page of search hits plus the catalog's total match count. |
//! | [`MovieDetail`] | The full record returned for a single identifier. |
//! | [`Rating`] | One `(source, value)` pair from the detail record's ratings list. |
//!
//! ## Envelope
//!
//! Every response carries `"Response": "True" | "False"`. On `"False"` the `"Error"`
//! field holds a message which [`decode`] turns into a [`CatalogError`] via
//! [`CatalogError::from_service_message`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::CatalogError;

/// Placeholder the catalog uses for absent values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Summary record returned by a title search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    /// "movie", "series", "episode", ...
    #[serde(rename = "Type", default)]
    pub kind: String,
    #[serde(rename = "Poster", default, deserialize_with = "not_available")]
    pub poster: Option<String>,
}

/// One page of search results.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchPage {
    pub results: Vec<MovieSummary>,
    /// Total number of matches the catalog reports across all pages.
    pub total_count: u32,
    pub page: u32,
}

/// A rating from one source, e.g. `("Rotten Tomatoes", "94%")`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Value")]
    pub value: String,
}

/// Full catalog record for one identifier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Type", default)]
    pub kind: String,
    #[serde(rename = "Rated", default, deserialize_with = "not_available")]
    pub rated: Option<String>,
    #[serde(rename = "Released", default, deserialize_with = "not_available")]
    pub released: Option<String>,
    #[serde(rename = "Runtime", default, deserialize_with = "not_available")]
    pub runtime: Option<String>,
    #[serde(rename = "Genre", default, deserialize_with = "not_available")]
    pub genre: Option<String>,
    #[serde(rename = "Director", default, deserialize_with = "not_available")]
    pub director: Option<String>,
    #[serde(rename = "Writer", default, deserialize_with = "not_available")]
    pub writer: Option<String>,
    /// Main cast, comma separated.
    #[serde(rename = "Actors", default, deserialize_with = "not_available")]
    pub actors: Option<String>,
    #[serde(rename = "Plot", default, deserialize_with = "not_available")]
    pub plot: Option<String>,
    #[serde(rename = "Language", default, deserialize_with = "not_available")]
    pub language: Option<String>,
    #[serde(rename = "Country", default, deserialize_with = "not_available")]
    pub country: Option<String>,
    #[serde(rename = "Awards", default, deserialize_with = "not_available")]
    pub awards: Option<String>,
    #[serde(rename = "Poster", default, deserialize_with = "not_available")]
    pub poster: Option<String>,
    #[serde(rename = "imdbRating", default, deserialize_with = "not_available")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "Ratings", default)]
    pub ratings: Vec<Rating>,
}

fn not_available<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|v| !v.trim().is_empty() && v != NOT_AVAILABLE))
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "Search", default)]
    search: Vec<MovieSummary>,
    #[serde(rename = "totalResults", default)]
    total_results: Option<String>,
}

/// Decode a response envelope into `T`.
///
/// `fallback` is used as the error message when the catalog reports failure
/// without an `"Error"` field.
pub fn decode<T: DeserializeOwned>(body: &str, fallback: &str) -> Result<T, CatalogError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| CatalogError::Transport(format!("Unreadable catalog response: {e}")))?;

    if value.get("Response").and_then(Value::as_str) == Some("True") {
        return serde_json::from_value(value)
            .map_err(|e| CatalogError::Transport(format!("Unexpected catalog response: {e}")));
    }

    let message = value
        .get("Error")
        .and_then(Value::as_str)
        .unwrap_or(fallback)
        .to_string();
    Err(CatalogError::from_service_message(message))
}

/// Decode a search response body for `page`.
pub fn decode_search(body: &str, page: u32) -> Result<SearchPage, CatalogError> {
    let body: SearchBody = decode(body, "No movies found")?;
    Ok(SearchPage {
        results: body.search,
        total_count: body
            .total_results
            .and_then(|t| t.trim().parse().ok())
            .unwrap_or(0),
        page,
    })
}

/// Decode a detail response body.
pub fn decode_detail(body: &str) -> Result<MovieDetail, CatalogError> {
    decode(body, "Movie not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_BODY: &str = r#"{
        "Search": [
            {"Title": "Batman Begins", "Year": "2005", "imdbID": "tt0372784", "Type": "movie", "Poster": "https://m.media-amazon.com/images/batman-begins.jpg"},
            {"Title": "Batman", "Year": "1989", "imdbID": "tt0096895", "Type": "movie", "Poster": "N/A"}
        ],
        "totalResults": "579",
        "Response": "True"
    }"#;

    #[test]
    fn test_decode_search_page() {
        let page = decode_search(SEARCH_BODY, 2).unwrap();
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.total_count, 579);
        assert_eq!(page.page, 2);
        assert_eq!(page.results[0].imdb_id, "tt0372784");
        assert_eq!(page.results[0].kind, "movie");
        assert!(page.results[0].poster.is_some());
        assert!(page.results[1].poster.is_none());
    }

    #[test]
    fn test_decode_search_tolerates_missing_totals() {
        let page = decode_search(r#"{"Response": "True", "totalResults": "lots"}"#, 1).unwrap();
        assert!(page.results.is_empty());
        assert_eq!(page.total_count, 0);
    }

    #[test]
    fn test_decode_reports_not_found() {
        let err = decode_search(r#"{"Response": "False", "Error": "Movie not found!"}"#, 1)
            .unwrap_err();
        assert_eq!(err, CatalogError::NotFound("Movie not found!".into()));
    }

    #[test]
    fn test_decode_uses_fallback_message() {
        let err = decode_detail(r#"{"Response": "False"}"#).unwrap_err();
        assert_eq!(err, CatalogError::NotFound("Movie not found".into()));

        let err = decode_search(r#"{"Response": "False"}"#, 1).unwrap_err();
        assert_eq!(err, CatalogError::NotFound("No movies found".into()));
    }

    #[test]
    fn test_decode_garbage_is_transport_error() {
        let err = decode_search("<html>502 Bad Gateway</html>", 1).unwrap_err();
        assert!(matches!(err, CatalogError::Transport(_)));
    }

    #[test]
    fn test_decode_detail_normalises_placeholders() {
        let body = r#"{
            "Title": "The Dark Knight", "Year": "2008", "Rated": "PG-13", "Released": "18 Jul 2008",
            "Runtime": "152 min", "Genre": "Action, Crime, Drama", "Director": "Christopher Nolan",
            "Writer": "Jonathan Nolan, Christopher Nolan", "Actors": "Christian Bale, Heath Ledger",
            "Plot": "N/A", "Language": "English", "Country": "United States", "Awards": "N/A",
            "Poster": "N/A", "imdbRating": "9.0", "imdbID": "tt0468569", "Type": "movie",
            "Ratings": [
                {"Source": "Internet Movie Database", "Value": "9.0/10"},
                {"Source": "Rotten Tomatoes", "Value": "94%"}
            ],
            "Response": "True"
        }"#;
        let detail = decode_detail(body).unwrap();
        assert_eq!(detail.title, "The Dark Knight");
        assert_eq!(detail.rated.as_deref(), Some("PG-13"));
        assert_eq!(detail.runtime.as_deref(), Some("152 min"));
        assert!(detail.plot.is_none());
        assert!(detail.awards.is_none());
        assert!(detail.poster.is_none());
        assert_eq!(detail.ratings.len(), 2);
        assert_eq!(detail.ratings[1].source, "Rotten Tomatoes");
    }
}
