//! This crate contains all shared UI for the workspace: session context, the
//! search and detail state machines, form validation and the shared views.

pub mod config;
pub mod debounce;
pub mod detail;
pub mod guard;
pub mod search;
pub mod validation;

mod sessions;
pub use sessions::{make_session_store, PlatformSessionStore, PlatformStorage};

pub mod views;

mod auth;
pub use auth::{use_auth, use_session_store, AuthProvider, AuthState, LogoutButton};

mod catalog;
pub use catalog::{use_catalog, CatalogContext, CatalogProvider};

mod navbar;
pub use navbar::Navbar;

mod movie_card;
pub use movie_card::MovieCard;

pub use config::AppConfig;
pub use guard::{authorize, refresh_auth, Access};
