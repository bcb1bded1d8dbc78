//! # Session store — accounts and the signed-in marker on durable storage
//!
//! [`SessionStore`] owns the user registry and the "who is signed in" marker. All
//! reads and writes go through the [`KeyValueStore`] trait, so the same logic runs
//! against the browser's `localStorage` ([`crate::LocalStorage`]) and an in-memory
//! map in tests ([`crate::MemoryStore`]).
//!
//! ## Storage layout
//!
//! | Key | Value |
//! |-----|-------|
//! | `users` | JSON array of [`User`] records (the registry) |
//! | `currentUser` | JSON [`User`] of the signed-in account, absent when signed out |
//! | `isAuthenticated` | literal `"true"` while signed in; anything else counts as signed out |
//!
//! ## Operations
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`register`](SessionStore::register) | Adds a user (email must be new) and signs them in. |
//! | [`authenticate`](SessionStore::authenticate) | Signs in an existing user by exact email and password match. |
//! | [`logout`](SessionStore::logout) | Clears the session marker; the registry is untouched. |
//! | [`current_session`](SessionStore::current_session) | Returns the session only when both the flag and the user record are present. |
//!
//! There is no locking: every operation is read-then-write on a single UI thread.
//! Concurrent edits from another tab are not detected.

use tracing::{debug, info};

use crate::error::{SessionError, StorageError};
use crate::models::{Session, User};

pub const USERS_KEY: &str = "users";
pub const CURRENT_USER_KEY: &str = "currentUser";
pub const IS_AUTHENTICATED_KEY: &str = "isAuthenticated";

const AUTHENTICATED: &str = "true";

/// Durable string key/value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// User registry and current-session marker on top of a [`KeyValueStore`].
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// All registered users, oldest first.
    pub fn registry(&self) -> Result<Vec<User>, SessionError> {
        match self.storage.get(USERS_KEY) {
            Some(raw) => serde_json::from_str(&raw).map_err(SessionError::CorruptRegistry),
            None => Ok(Vec::new()),
        }
    }

    /// Create an account and sign it in.
    ///
    /// Name and email are trimmed. The password is stored as given.
    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Session, SessionError> {
        let email = email.trim();
        let mut users = self.registry()?;

        if users.iter().any(|u| u.email == email) {
            debug!(email, "registration rejected: email taken");
            return Err(SessionError::DuplicateEmail);
        }

        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        users.push(user.clone());
        let encoded = serde_json::to_string(&users).map_err(SessionError::Encode)?;

        // The registry is written last so a failed write leaves no account behind.
        let session = self.establish(user)?;
        if let Err(e) = self.storage.set(USERS_KEY, &encoded) {
            self.clear_session();
            return Err(e.into());
        }
        info!(user_id = %session.user.id, "registered new user");
        Ok(session)
    }

    /// Sign in with an exact email and password match.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<Session, SessionError> {
        let email = email.trim();
        let user = self
            .registry()?
            .into_iter()
            .find(|u| u.email == email)
            .filter(|u| u.password == password)
            .ok_or(SessionError::InvalidCredentials)?;

        info!(user_id = %user.id, "user signed in");
        self.establish(user)
    }

    /// Forget the signed-in user. Registered accounts stay.
    pub fn logout(&self) {
        self.clear_session();
        info!("user signed out");
    }

    /// The signed-in session, if the stored marker is complete and readable.
    pub fn current_session(&self) -> Option<Session> {
        if self.storage.get(IS_AUTHENTICATED_KEY).as_deref() != Some(AUTHENTICATED) {
            return None;
        }
        let raw = self.storage.get(CURRENT_USER_KEY)?;
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(Session::new(user)),
            Err(e) => {
                debug!(error = %e, "ignoring unreadable current user");
                None
            }
        }
    }

    /// Write both session markers, or neither.
    fn establish(&self, user: User) -> Result<Session, SessionError> {
        let encoded = serde_json::to_string(&user).map_err(SessionError::Encode)?;
        let written = self
            .storage
            .set(CURRENT_USER_KEY, &encoded)
            .and_then(|()| self.storage.set(IS_AUTHENTICATED_KEY, AUTHENTICATED));
        if let Err(e) = written {
            self.clear_session();
            return Err(e.into());
        }
        Ok(Session::new(user))
    }

    fn clear_session(&self) {
        self.storage.remove(IS_AUTHENTICATED_KEY);
        self.storage.remove(CURRENT_USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    fn store() -> SessionStore<MemoryStore> {
        SessionStore::new(MemoryStore::new())
    }

    /// Refuses writes to one key, delegating everything else.
    #[derive(Clone)]
    struct RejectingStore {
        inner: MemoryStore,
        rejected_key: &'static str,
    }

    impl KeyValueStore for RejectingStore {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if key == self.rejected_key {
                return Err(StorageError::Unavailable);
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) {
            self.inner.remove(key)
        }
    }

    #[test]
    fn test_register_signs_in() {
        let sessions = store();
        assert!(sessions.current_session().is_none());

        let session = sessions.register("  Ada ", " ada@example.com ", "secret1").unwrap();
        assert_eq!(session.user.name, "Ada");
        assert_eq!(session.user.email, "ada@example.com");
        assert!(!session.user.id.is_empty());

        assert_eq!(sessions.current_session(), Some(session.clone()));
        assert_eq!(sessions.registry().unwrap(), vec![session.user]);
    }

    #[test]
    fn test_register_duplicate_email_leaves_registry_unchanged() {
        let sessions = store();
        sessions.register("Ada", "ada@example.com", "secret1").unwrap();
        sessions.logout();
        let before = sessions.registry().unwrap();

        let err = sessions
            .register("Other", "ada@example.com", "different")
            .unwrap_err();
        assert!(matches!(err, SessionError::DuplicateEmail));
        assert_eq!(sessions.registry().unwrap(), before);
        assert!(sessions.current_session().is_none());
    }

    #[test]
    fn test_email_match_is_case_sensitive() {
        let sessions = store();
        sessions.register("Ada", "ada@example.com", "secret1").unwrap();
        sessions.register("Ada Upper", "ADA@example.com", "secret2").unwrap();
        assert_eq!(sessions.registry().unwrap().len(), 2);

        assert!(matches!(
            sessions.authenticate("Ada@Example.com", "secret1"),
            Err(SessionError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_register_then_authenticate_round_trip() {
        let sessions = store();
        let registered = sessions.register("Ada", "ada@example.com", "secret1").unwrap();
        sessions.logout();

        let session = sessions.authenticate("ada@example.com", "secret1").unwrap();
        assert_eq!(session.user.id, registered.user.id);
        assert_eq!(sessions.current_session(), Some(session));
    }

    #[test]
    fn test_authenticate_wrong_password() {
        let sessions = store();
        sessions.register("A", "a@b.com", "right").unwrap();
        sessions.logout();

        let err = sessions.authenticate("a@b.com", "wrong").unwrap_err();
        assert!(matches!(err, SessionError::InvalidCredentials));
        assert_eq!(err.to_string(), "Invalid email or password");
        assert!(sessions.current_session().is_none());
    }

    #[test]
    fn test_authenticate_unknown_email() {
        let sessions = store();
        let err = sessions.authenticate("nobody@example.com", "x").unwrap_err();
        assert!(matches!(err, SessionError::InvalidCredentials));
    }

    #[test]
    fn test_authenticate_trims_email() {
        let sessions = store();
        sessions.register("Ada", "ada@example.com", "secret1").unwrap();
        sessions.logout();
        assert!(sessions.authenticate(" ada@example.com\t", "secret1").is_ok());
    }

    #[test]
    fn test_logout_clears_session_keeps_registry() {
        let sessions = store();
        sessions.register("Ada", "ada@example.com", "secret1").unwrap();
        sessions.logout();
        assert!(sessions.current_session().is_none());
        assert_eq!(sessions.registry().unwrap().len(), 1);

        // Logging out twice is harmless.
        sessions.logout();
        assert!(sessions.current_session().is_none());
    }

    #[test]
    fn test_partial_session_markers_are_not_a_session() {
        let storage = MemoryStore::new();
        let sessions = SessionStore::new(storage.clone());
        let user = User {
            id: "1".into(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "secret1".into(),
        };
        let encoded = serde_json::to_string(&user).unwrap();

        // Flag without user.
        storage.set(IS_AUTHENTICATED_KEY, "true").unwrap();
        assert!(sessions.current_session().is_none());

        // User without flag.
        storage.remove(IS_AUTHENTICATED_KEY);
        storage.set(CURRENT_USER_KEY, &encoded).unwrap();
        assert!(sessions.current_session().is_none());

        // Flag with a value other than "true".
        storage.set(IS_AUTHENTICATED_KEY, "yes").unwrap();
        assert!(sessions.current_session().is_none());

        // Flag with unreadable user.
        storage.set(IS_AUTHENTICATED_KEY, "true").unwrap();
        storage.set(CURRENT_USER_KEY, "{not json").unwrap();
        assert!(sessions.current_session().is_none());

        storage.set(CURRENT_USER_KEY, &encoded).unwrap();
        assert_eq!(sessions.current_session(), Some(Session::new(user)));
    }

    #[test]
    fn test_failed_session_write_does_not_keep_account() {
        let inner = MemoryStore::new();
        let sessions = SessionStore::new(RejectingStore {
            inner: inner.clone(),
            rejected_key: CURRENT_USER_KEY,
        });

        let err = sessions.register("Ada", "ada@example.com", "secret1").unwrap_err();
        assert!(matches!(err, SessionError::Storage(StorageError::Unavailable)));
        assert!(sessions.registry().unwrap().is_empty());
        assert!(sessions.current_session().is_none());

        // Once storage recovers the same email registers normally.
        let sessions = SessionStore::new(inner);
        assert!(sessions.register("Ada", "ada@example.com", "secret1").is_ok());
        assert_eq!(sessions.registry().unwrap().len(), 1);
    }

    #[test]
    fn test_failed_flag_write_leaves_no_partial_session() {
        let inner = MemoryStore::new();
        let sessions = SessionStore::new(RejectingStore {
            inner: inner.clone(),
            rejected_key: IS_AUTHENTICATED_KEY,
        });

        assert!(sessions.register("Ada", "ada@example.com", "secret1").is_err());
        assert!(inner.get(CURRENT_USER_KEY).is_none());
        assert!(sessions.registry().unwrap().is_empty());
    }

    #[test]
    fn test_failed_registry_write_rolls_back_session() {
        let inner = MemoryStore::new();
        let sessions = SessionStore::new(RejectingStore {
            inner: inner.clone(),
            rejected_key: USERS_KEY,
        });

        let err = sessions.register("Ada", "ada@example.com", "secret1").unwrap_err();
        assert!(matches!(err, SessionError::Storage(_)));
        assert!(sessions.current_session().is_none());
        assert!(inner.get(CURRENT_USER_KEY).is_none());
        assert!(inner.get(USERS_KEY).is_none());
    }

    #[test]
    fn test_corrupt_registry_is_not_overwritten() {
        let storage = MemoryStore::new();
        storage.set(USERS_KEY, "oops").unwrap();
        let sessions = SessionStore::new(storage.clone());

        let err = sessions.register("Ada", "ada@example.com", "secret1").unwrap_err();
        assert!(matches!(err, SessionError::CorruptRegistry(_)));
        assert_eq!(storage.get(USERS_KEY).as_deref(), Some("oops"));
    }

    #[test]
    fn test_reads_registry_written_by_other_clients() {
        let storage = MemoryStore::new();
        storage
            .set(
                USERS_KEY,
                r#"[{"id":"1700000000000","name":"Grace","email":"grace@example.com","password":"hopper"}]"#,
            )
            .unwrap();
        let sessions = SessionStore::new(storage);

        let session = sessions.authenticate("grace@example.com", "hopper").unwrap();
        assert_eq!(session.user.id, "1700000000000");
        assert_eq!(session.user.display_name(), "Grace");
    }
}
