//! Route guard decision for protected views.

use store::Session;

use crate::auth::AuthState;

/// Outcome of [`authorize`].
#[derive(Debug, Clone, PartialEq)]
pub enum Access<V> {
    /// Render the requested view unchanged.
    Granted(V),
    /// No session: send the visitor to the login view instead.
    RedirectToLogin,
}

/// Gate `view` on the presence of a session. Evaluated on every render, never cached.
pub fn authorize<V>(session: Option<&Session>, view: V) -> Access<V> {
    match session {
        Some(_) => Access::Granted(view),
        None => Access::RedirectToLogin,
    }
}

/// The state to publish when durable storage disagrees with the in-memory
/// [`AuthState`], e.g. after another tab signed out. `None` when they agree.
pub fn refresh_auth(state: &AuthState, stored: Option<Session>) -> Option<AuthState> {
    (state.session != stored).then_some(AuthState { session: stored })
}
