use api::Catalog;
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::catalog::use_catalog;
use crate::debounce::Debouncer;
use crate::movie_card::MovieCard;
use crate::navbar::Navbar;
use crate::search::{SearchEdit, SearchPhase, SearchState};

/// Shared home view: debounced search box and result grid.
///
/// Platform packages provide the navigation callbacks.
#[component]
pub fn SearchView(
    /// Called with the catalog identifier of the clicked movie.
    on_select_movie: EventHandler<String>,
    on_navigate_home: EventHandler<()>,
    /// Called after logout — navigate to the login page.
    on_logout: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let catalog = use_catalog();
    let mut state = use_signal(SearchState::default);
    let mut debouncer = use_signal({
        let delay = catalog.debounce;
        move || Debouncer::new(delay)
    });

    let handle_input = move |evt: FormEvent| {
        let edit = state.write().edit(&evt.value());
        match edit {
            SearchEdit::Cleared => debouncer.write().cancel(),
            SearchEdit::Scheduled { ticket, query } => {
                let elapsed = debouncer.write().schedule();
                let client = catalog.client.clone();
                spawn(async move {
                    if !elapsed.await {
                        return;
                    }
                    let result = client.search_by_title(&query, 1).await;
                    state.write().settle(ticket, result);
                });
            }
        }
    };

    let user_name = auth().display_name().to_string();
    let query = state.read().query().to_string();
    let phase = state.read().phase().clone();
    let loading = state.read().is_loading();

    rsx! {
        div {
            class: "home-container",

            Navbar {
                on_navigate_home: move |_| on_navigate_home.call(()),
                on_logout: move |_| on_logout.call(()),
                div {
                    class: "search-container",
                    input {
                        class: "search-input",
                        r#type: "text",
                        placeholder: "Search for movies...",
                        value: "{query}",
                        oninput: handle_input,
                    }
                    if loading {
                        div { class: "search-loader" }
                    }
                }
            }

            main {
                class: "main-content",
                match phase {
                    SearchPhase::Idle => rsx! {
                        div {
                            class: "welcome-section",
                            h2 { "Welcome, {user_name}!" }
                            p { "Start searching for your favorite movies above." }
                        }
                    },
                    SearchPhase::Pending => rsx! {
                        div {
                            class: "loading-container",
                            div { class: "spinner" }
                            p { "Searching movies..." }
                        }
                    },
                    SearchPhase::Empty => rsx! {
                        div {
                            class: "empty-state",
                            p { "No movies found. Try a different search term." }
                        }
                    },
                    SearchPhase::Failed(message) => rsx! {
                        div {
                            class: "error-container",
                            p { class: "error-message", "{message}" }
                        }
                    },
                    SearchPhase::Results(movies) => rsx! {
                        div {
                            class: "movies-section",
                            h2 { class: "section-title", "Search Results for \"{query}\"" }
                            div {
                                class: "movies-grid",
                                for movie in movies {
                                    MovieCard {
                                        key: "{movie.imdb_id}",
                                        movie: movie,
                                        on_select: move |id: String| on_select_movie.call(id),
                                    }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}
