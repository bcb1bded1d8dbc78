use api::MovieDetail;
use dioxus::prelude::*;

use crate::catalog::use_catalog;
use crate::detail::{load_detail, DetailState};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Shared movie detail view.
///
/// Fetches the catalog entry once per identifier. Platform packages provide the
/// navigation callback for the back buttons.
#[component]
pub fn MovieDetailView(
    /// Catalog identifier from the route, e.g. "tt0372784".
    movie_id: String,
    /// Called by the back buttons — navigate to the search view.
    on_back: EventHandler<()>,
) -> Element {
    // Track the identifier in a signal so use_resource re-runs on route param change
    let mut id_signal = use_signal(|| movie_id.clone());
    if *id_signal.peek() != movie_id {
        id_signal.set(movie_id.clone());
    }

    let catalog = use_catalog();
    let mut state = use_signal(DetailState::default);

    let _loader = use_resource(move || {
        let id = id_signal();
        let client = catalog.client.clone();
        async move {
            state.set(DetailState::Loading);
            state.set(load_detail(&client, &id).await);
        }
    });

    let current = state();
    let body = match &current {
        DetailState::Loading => rsx! {
            div {
                class: "loading-container",
                div { class: "spinner" }
                p { "Loading movie details..." }
            }
        },
        DetailState::Loaded(detail) => rsx! {
            button {
                class: "back-button-top",
                onclick: move |_| on_back.call(()),
                "← Back to Home"
            }
            MovieDetailContent { detail: (**detail).clone() }
        },
        DetailState::NotFound(_) | DetailState::Failed(_) => {
            let message = current.error_message().unwrap_or_default().to_string();
            rsx! {
                div {
                    class: "error-container",
                    p { class: "error-message", "{message}" }
                    button {
                        class: "back-button",
                        onclick: move |_| on_back.call(()),
                        "Back to Home"
                    }
                }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "movie-details-container",
            {body}
        }
    }
}

#[component]
fn MovieDetailContent(detail: MovieDetail) -> Element {
    let sections = [
        ("Genre", detail.genre.clone()),
        ("Plot", detail.plot.clone()),
        ("Cast", detail.actors.clone()),
        ("Director", detail.director.clone()),
        ("Writer", detail.writer.clone()),
        ("Awards", detail.awards.clone()),
    ];

    rsx! {
        div {
            class: "movie-details-content",
            div {
                class: "movie-details-poster",
                if let Some(poster) = &detail.poster {
                    img { src: "{poster}", alt: "{detail.title}" }
                } else {
                    div { class: "poster-placeholder-large", span { "No Image Available" } }
                }
            }
            div {
                class: "movie-details-info",
                h1 { class: "movie-details-title", "{detail.title}" }
                div {
                    class: "movie-details-meta",
                    span { class: "movie-year", "{detail.year}" }
                    if let Some(rated) = &detail.rated {
                        span { class: "movie-rated", "{rated}" }
                    }
                    if let Some(runtime) = &detail.runtime {
                        span { class: "movie-runtime", "{runtime}" }
                    }
                }
                if !detail.ratings.is_empty() {
                    div {
                        class: "movie-ratings",
                        h3 { "Ratings" }
                        div {
                            class: "ratings-list",
                            for rating in &detail.ratings {
                                div {
                                    key: "{rating.source}",
                                    class: "rating-item",
                                    span { class: "rating-source", "{rating.source}:" }
                                    span { class: "rating-value", "{rating.value}" }
                                }
                            }
                        }
                    }
                }
                for (heading, text) in sections {
                    if let Some(text) = text {
                        div {
                            key: "{heading}",
                            class: "movie-section",
                            h3 { "{heading}" }
                            p { "{text}" }
                        }
                    }
                }
            }
        }
    }
}
