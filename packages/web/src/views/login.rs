//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::use_auth;
use ui::views::LoginView;

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // If already logged in, go straight to the search view
    if auth().is_authenticated() {
        nav.replace(Route::Home {});
    }

    rsx! {
        LoginView {
            on_authenticated: move |_| {
                nav.push(Route::Home {});
            },
            on_navigate_signup: move |_| {
                nav.push(Route::Signup {});
            },
        }
    }
}
