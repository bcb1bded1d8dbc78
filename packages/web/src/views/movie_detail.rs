use dioxus::prelude::*;
use ui::views::MovieDetailView;

use crate::Route;

#[component]
pub fn MovieDetail(id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        MovieDetailView {
            movie_id: id,
            on_back: move |_| {
                nav.push(Route::Home {});
            },
        }
    }
}
