//! Themed dialog wrappers around `dioxus_primitives::dialog`
//!
//! The primitive owns modal behaviour: backdrop clicks and the escape key
//! report `on_open_change(false)`, and focus stays inside the content.

use dioxus::prelude::*;
use dioxus_primitives::dialog;

use crate::state::AppState;

/// Controlled modal root; renders nothing while closed
#[component]
pub fn DialogRoot(open: bool, on_open_change: EventHandler<bool>, children: Element) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    if !open {
        return rsx! {};
    }

    rsx! {
        dialog::DialogRoot {
            open: true,
            on_open_change: move |open: bool| on_open_change.call(open),
            style: "
                position: fixed;
                inset: 0;
                z-index: 50;
                display: flex;
                align-items: center;
                justify-content: center;
                background: {colors.overlay};
            ",
            {children}
        }
    }
}

/// Content panel of an open dialog
#[component]
pub fn DialogContent(#[props(into, default)] style: String, children: Element) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        dialog::DialogContent {
            style: "
                position: relative;
                display: flex;
                flex-direction: column;
                overflow: hidden;
                outline: none;
                width: 100%;
                max-width: 640px;
                height: 60vh;
                border-radius: 6px;
                background: {colors.dialog_bg};
                {style}
            ",
            {children}
        }
    }
}
