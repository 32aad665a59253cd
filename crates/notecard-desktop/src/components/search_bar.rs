//! Search bar component

use dioxus::prelude::*;

use crate::state::AppState;

/// Search bar for filtering notes
#[component]
pub fn SearchBar() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        input {
            r#type: "text",
            class: "search-bar",
            placeholder: "Search your notes...",
            value: "{state.search_query}",
            oninput: move |evt| {
                state.search_query.set(evt.value());
            },
            style: "
                width: 100%;
                border: none;
                outline: none;
                font-size: 30px;
                font-weight: 600;
                letter-spacing: -0.02em;
                background: transparent;
                color: {colors.text_primary};
            ",
        }
    }
}
