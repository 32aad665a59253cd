//! Capture card for adding notes

use dioxus::prelude::*;

use super::button::{Button, ButtonVariant};
use crate::state::AppState;

/// First cell of the grid: type a note and save it
#[component]
pub fn NewNoteCard() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let mut content = use_signal(String::new);

    let mut save_note = move || {
        let text = content.read().clone();
        match state.create_note(&text) {
            Ok(_) => content.set(String::new()),
            // Blank input: keep the card as it is
            Err(notecard_core::Error::EmptyContent) => {}
            Err(e) => tracing::error!("Failed to create note: {}", e),
        }
    };

    let handle_keydown = move |evt: Event<KeyboardData>| {
        // Ctrl/Cmd+Enter to save
        if evt.key() == Key::Enter && (evt.modifiers().meta() || evt.modifiers().ctrl()) {
            evt.prevent_default();
            save_note();
        }
    };

    rsx! {
        div {
            class: "new-note-card",
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                overflow: hidden;
                padding: 20px;
                border-radius: 6px;
                background: {colors.dialog_bg};
            ",

            span {
                style: "font-size: 14px; font-weight: 500; color: {colors.text_secondary};",
                "Add a note"
            }

            textarea {
                class: "new-note-input",
                style: "
                    flex: 1;
                    resize: none;
                    border: none;
                    outline: none;
                    font-family: inherit;
                    font-size: 14px;
                    line-height: 24px;
                    background: transparent;
                    color: {colors.text_muted};
                ",
                value: "{content}",
                placeholder: "Write something... (Ctrl+Enter to save)",
                oninput: move |evt| content.set(evt.value()),
                onkeydown: handle_keydown,
            }

            Button {
                variant: ButtonVariant::Primary,
                disabled: content.read().trim().is_empty(),
                onclick: move |_| save_note(),
                style: "padding: 8px 12px; border-radius: 4px;",
                "Save note"
            }
        }
    }
}
