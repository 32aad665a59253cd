//! App header with the theme toggle

use dioxus::prelude::*;

use super::button::{Button, ButtonVariant};
use crate::state::AppState;
use crate::theme::{mode_label, next_mode};

/// Title row
#[component]
pub fn Header() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let mode = state.settings.read().theme;
    let label = mode_label(mode);

    rsx! {
        div {
            class: "header",
            style: "display: flex; align-items: center; justify-content: space-between;",

            span {
                style: "font-size: 18px; font-weight: 700; color: {colors.accent};",
                "notecard"
            }

            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| state.set_theme_mode(next_mode(mode)),
                style: "padding: 4px 8px; font-size: 13px;",
                "Theme: {label}"
            }
        }
    }
}
