use api::MovieSummary;
use dioxus::prelude::*;

/// Poster tile for one search hit.
#[component]
pub fn MovieCard(movie: MovieSummary, on_select: EventHandler<String>) -> Element {
    let id = movie.imdb_id.clone();

    rsx! {
        div {
            class: "movie-card",
            onclick: move |_| on_select.call(id.clone()),
            div {
                class: "movie-card-poster",
                if let Some(poster) = &movie.poster {
                    img { src: "{poster}", alt: "{movie.title}" }
                } else {
                    div { class: "poster-placeholder", span { "No Image" } }
                }
                div {
                    class: "movie-card-overlay",
                    h3 { class: "movie-card-title", "{movie.title}" }
                    p { class: "movie-card-year", "{movie.year}" }
                }
            }
        }
    }
}
