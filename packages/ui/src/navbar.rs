use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Top bar of the protected views: logo, a slot for the search box, user name
/// and logout button.
#[component]
pub fn Navbar(
    on_navigate_home: EventHandler<()>,
    on_logout: EventHandler<()>,
    children: Element,
) -> Element {
    let auth = use_auth();
    let user_name = auth().display_name().to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        nav {
            class: "navbar",
            div {
                class: "navbar-left",
                h1 {
                    class: "logo",
                    onclick: move |_| on_navigate_home.call(()),
                    "NETFLIX"
                }
            }
            div {
                class: "navbar-center",
                {children}
            }
            div {
                class: "navbar-right",
                span { class: "user-name", "{user_name}" }
                LogoutButton {
                    class: "logout-button",
                    on_logout: move |_| on_logout.call(()),
                }
            }
        }
    }
}
