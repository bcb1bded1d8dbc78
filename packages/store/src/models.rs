//! # Domain models for accounts and sessions
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | A registered account. Serialised with exactly the field names the browser storage layout uses (`id`, `name`, `email`, `password`). |
//! | [`Session`] | Proof that someone is signed in on this client: a copy of their [`User`]. |
//!
//! Passwords are kept in cleartext. This client has no server and no hashing; the
//! stored value is compared verbatim on sign-in.

use serde::{Deserialize, Serialize};

/// A registered user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque identifier generated at registration.
    pub id: String,
    pub name: String,
    /// Unique key of the registry (exact, case-sensitive match).
    pub email: String,
    pub password: String,
}

impl User {
    /// Get display name, falling back to email if name is blank.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// The signed-in user on this client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user: User,
}

impl Session {
    pub fn new(user: User) -> Self {
        Self { user }
    }
}
