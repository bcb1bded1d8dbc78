//! Errors raised by the storage backends and the session store.

use thiserror::Error;

/// A backend refused to persist a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No durable storage is reachable (private browsing, sandboxed iframe, ...).
    #[error("storage unavailable")]
    Unavailable,
    /// The backend rejected the write, typically because the quota is exhausted.
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// Business and persistence failures of [`crate::SessionStore`].
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("User with this email already exists")]
    DuplicateEmail,

    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The stored registry could not be parsed; it is left untouched.
    #[error("Stored user registry is corrupt: {0}")]
    CorruptRegistry(#[source] serde_json::Error),

    #[error("Failed to serialize user data: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to save: {0}")]
    Storage(#[from] StorageError),
}
