use dioxus::prelude::*;
use tracing::{warn, Level};

use ui::{AppConfig, AuthProvider, CatalogProvider};
use views::{Home, Login, MovieDetail, Protected, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[layout(Protected)]
        #[route("/home")]
        Home {},
        #[route("/movie/:id")]
        MovieDetail { id: String },
    #[end_layout]
    #[route("/:..segments")]
    Unknown { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../movie-search.toml");

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialise logger: {e}");
    }
    dioxus::launch(App);
}

fn load_config() -> AppConfig {
    AppConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        warn!("Invalid {}, using defaults: {e}", AppConfig::filename());
        AppConfig::default()
    })
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            CatalogProvider {
                config: config,
                Router::<Route> {}
            }
        }
    }
}

/// Redirect `/` to `/home`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Home {});
    rsx! {}
}

/// Send unknown paths to `/home`; the guard takes it from there.
#[component]
fn Unknown(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    nav.replace(Route::Home {});
    rsx! {}
}
