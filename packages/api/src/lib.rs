//! # API crate — client for the remote movie catalog
//!
//! The movie search client talks to exactly one remote service: the OMDb catalog.
//! This crate wraps its two read-only queries behind the [`Catalog`] trait so the
//! views can be driven by the real HTTP client in the browser and by fakes in tests.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`Catalog`] trait and the `reqwest`-backed [`OmdbClient`] |
//! | [`config`] | [`CatalogConfig`] — base URL and API key, serde-friendly for TOML config |
//! | [`error`] | [`CatalogError`] — not-found, service-reported and transport failures |
//! | [`models`] | [`MovieSummary`], [`SearchPage`], [`MovieDetail`], [`Rating`] and response decoding |
//!
//! No caching and no retry happen here: a single failed attempt surfaces to the caller.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{Catalog, OmdbClient};
pub use config::CatalogConfig;
pub use error::CatalogError;
pub use models::{MovieDetail, MovieSummary, Rating, SearchPage};
