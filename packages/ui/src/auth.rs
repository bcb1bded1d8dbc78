//! Authentication context and hooks for the UI.

use dioxus::prelude::*;
use store::Session;

use crate::sessions::{make_session_store, PlatformSessionStore};

/// Authentication state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Name shown in the navbar and welcome banner.
    pub fn display_name(&self) -> &str {
        self.session
            .as_ref()
            .map_or("User", |s| s.user.display_name())
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Get the durable session store shared by the auth views.
pub fn use_session_store() -> PlatformSessionStore {
    use_context::<PlatformSessionStore>()
}

/// Provider component that owns the session store and the auth state.
/// Wrap your app with this component to enable authentication.
///
/// The stored session is read once on mount; afterwards views update the
/// [`AuthState`] signal themselves after calling the store.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let sessions = use_context_provider(make_session_store);
    use_context_provider(|| {
        Signal::new(AuthState {
            session: sessions.current_session(),
        })
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    /// Called after the session is cleared — navigate to the login page.
    on_logout: EventHandler<()>,
) -> Element {
    let mut auth_state = use_auth();
    let sessions = use_session_store();

    let onclick = move |_| {
        sessions.logout();
        auth_state.set(AuthState::default());
        on_logout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
