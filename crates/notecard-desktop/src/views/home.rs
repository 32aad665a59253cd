//! Home view - main application screen

use dioxus::prelude::*;

use crate::components::{Header, NoteList, SearchBar};
use crate::state::AppState;

/// Home view component - the main application screen
#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: "home-container",
            style: "
                max-width: 1152px;
                margin: 0 auto;
                padding: 48px 20px;
                display: flex;
                flex-direction: column;
                gap: 24px;
            ",

            Header {}
            SearchBar {}

            div { style: "height: 1px; background: {colors.card_ring};" }

            NoteList {}
        }
    }
}
