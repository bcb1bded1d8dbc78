//! Registration page view with email/password form.

use dioxus::prelude::*;
use ui::use_auth;
use ui::views::SignupView;

use crate::Route;

/// Register page component.
#[component]
pub fn Signup() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // If already logged in, go straight to the search view
    if auth().is_authenticated() {
        nav.replace(Route::Home {});
    }

    rsx! {
        SignupView {
            on_registered: move |_| {
                nav.push(Route::Home {});
            },
            on_navigate_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}
