//! Layout wrapping every route that needs a signed-in user.

use dioxus::prelude::*;
use ui::{authorize, refresh_auth, use_auth, use_session_store, Access};

use crate::Route;

/// Renders the child route when a session exists, otherwise replaces the
/// route with `/login`. Storage is re-read on every render so a sign-out in
/// another tab is honoured on the next navigation.
#[component]
pub fn Protected() -> Element {
    let mut auth = use_auth();
    let sessions = use_session_store();
    let nav = use_navigator();

    let stored = sessions.current_session();
    let refreshed = refresh_auth(&auth.peek(), stored.clone());
    if let Some(state) = refreshed {
        auth.set(state);
    }

    match authorize(stored.as_ref(), rsx! { Outlet::<Route> {} }) {
        Access::Granted(view) => view,
        Access::RedirectToLogin => {
            nav.replace(Route::Login {});
            rsx! {}
        }
    }
}
