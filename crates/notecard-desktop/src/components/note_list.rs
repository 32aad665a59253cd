//! Note list component

use dioxus::prelude::*;

use notecard_core::models::NoteId;
use notecard_core::NoteStore;

use super::{NewNoteCard, NoteCard};
use crate::state::AppState;

/// Grid of note cards, with the capture card first
#[component]
pub fn NoteList() -> Element {
    let state = use_context::<AppState>();
    let notes = state.visible_notes();
    let draft_policy = state.settings.read().draft_policy;
    let colors = (state.theme)().palette();
    let searching = !state.search_query.read().trim().is_empty();

    rsx! {
        div {
            class: "note-list",
            style: "
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(250px, 1fr));
                grid-auto-rows: 250px;
                gap: 24px;
            ",

            NewNoteCard {}

            if !(state.loaded)() {
                div {
                    style: "padding: 20px; color: {colors.text_muted};",
                    "Loading notes..."
                }
            } else if notes.is_empty() && searching {
                div {
                    style: "padding: 20px; color: {colors.text_muted};",
                    "No notes match your search"
                }
            }

            for note in notes {
                {
                    let note_id = note.id;

                    rsx! {
                        NoteCard {
                            key: "{note_id}",
                            note,
                            draft_policy,
                            on_note_updated: move |(id, content): (NoteId, String)| {
                                let mut store = state;
                                store.update_note(&id, &content)
                            },
                            on_note_deleted: move |id: NoteId| {
                                let mut store = state;
                                store.delete_note(&id)
                            },
                        }
                    }
                }
            }
        }
    }
}
