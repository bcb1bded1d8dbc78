use dioxus::prelude::*;
use ui::views::SearchView;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        SearchView {
            on_select_movie: move |id: String| {
                nav.push(Route::MovieDetail { id });
            },
            on_navigate_home: move |_| {
                nav.push(Route::Home {});
            },
            on_logout: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}
