//! Note card component

use dioxus::prelude::*;

use notecard_core::models::{DraftPolicy, Note, NoteId};
use notecard_core::store::FnStore;
use notecard_core::time::format_relative_now;
use notecard_core::dialog::DismissReason;
use notecard_core::{CardMode, NoteCard as CardModel};

use super::button::{Button, ButtonVariant};
use super::dialog::{DialogContent, DialogRoot};
use crate::state::AppState;

/// A note rendered as a preview that opens into an editable detail view.
///
/// The card reports edits and deletions through the two callbacks and never
/// removes itself; the list drops it once the note is gone.
#[component]
pub fn NoteCard(
    note: Note,
    draft_policy: DraftPolicy,
    on_note_updated: Callback<(NoteId, String), notecard_core::Result<()>>,
    on_note_deleted: Callback<NoteId, notecard_core::Result<()>>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let mut card = use_signal({
        let note = note.clone();
        move || CardModel::new(&note, draft_policy)
    });

    // Track store refreshes so text committed by a save stops shadowing them
    use_effect(use_reactive((&note,), move |(note,)| {
        card.write().observe(&note);
    }));

    let (mode, shown, draft, error) = {
        let model = card.read();
        (
            model.mode(),
            model.display_content(&note).to_string(),
            model.draft().to_string(),
            model.last_error().map(str::to_string),
        )
    };
    let created = format_relative_now(note.created_at);

    let store = move || {
        FnStore::new(
            move |id: &NoteId, content: &str| on_note_updated.call((*id, content.to_string())),
            move |id: &NoteId| on_note_deleted.call(*id),
        )
    };

    let open_card = {
        let note = note.clone();
        move |_| card.write().open(&note)
    };

    let save_edit = {
        let note = note.clone();
        move |_| {
            // Failures are recorded on the card and shown below the content
            if let Err(e) = card.write().save(&note, &mut store()) {
                tracing::trace!("Save of note {} not applied: {}", note.id, e);
            }
        }
    };

    let delete_note = {
        let note = note.clone();
        move |_| {
            if let Err(e) = card.write().delete(&note, &mut store()) {
                tracing::trace!("Delete of note {} not applied: {}", note.id, e);
            }
        }
    };

    let mut preview_hovered = use_signal(|| false);
    let mut preview_focused = use_signal(|| false);
    let preview_ring = if preview_focused() {
        format!("box-shadow: 0 0 0 2px {};", colors.focus_ring)
    } else if preview_hovered() {
        format!("box-shadow: 0 0 0 2px {};", colors.card_ring)
    } else {
        String::new()
    };

    rsx! {
        button {
            r#type: "button",
            class: "note-card",
            style: "
                position: relative;
                display: flex;
                flex-direction: column;
                gap: 12px;
                overflow: hidden;
                text-align: left;
                padding: 20px;
                border: none;
                border-radius: 6px;
                outline: none;
                cursor: pointer;
                background: {colors.card_bg};
                {preview_ring}
            ",
            onclick: open_card,
            onmouseenter: move |_| preview_hovered.set(true),
            onmouseleave: move |_| preview_hovered.set(false),
            onfocus: move |_| preview_focused.set(true),
            onblur: move |_| preview_focused.set(false),

            span {
                style: "font-size: 14px; font-weight: 500; color: {colors.text_secondary};",
                "{created}"
            }
            p {
                style: "margin: 0; font-size: 14px; line-height: 24px; white-space: pre-line; color: {colors.text_muted};",
                "{shown}"
            }
            div {
                style: "
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    height: 50%;
                    pointer-events: none;
                    background: linear-gradient(to top, {colors.fade}, transparent);
                ",
            }
        }

        DialogRoot {
            open: mode != CardMode::Closed,
            on_open_change: move |open: bool| {
                if !open {
                    card.write().dismiss(DismissReason::Modal);
                }
            },

            DialogContent {
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| card.write().dismiss(DismissReason::CloseButton),
                    style: "position: absolute; top: 0; right: 0; padding: 6px 10px; font-size: 16px;",
                    "×"
                }

                div {
                    style: "flex: 1; display: flex; flex-direction: column; gap: 12px; padding: 20px;",

                    span {
                        style: "font-size: 14px; font-weight: 500; color: {colors.text_secondary};",
                        "{created}"
                    }

                    if mode == CardMode::Editing {
                        textarea {
                            class: "note-card-editor",
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
                            value: "{draft}",
                            autofocus: true,
                            oninput: move |evt: Event<FormData>| card.write().set_draft(evt.value()),
                        }
                    } else {
                        p {
                            style: "margin: 0; font-size: 14px; line-height: 24px; white-space: pre-line; overflow-y: auto; color: {colors.text_muted};",
                            "{shown}"
                        }
                    }

                    if let Some(error) = error {
                        div {
                            class: "note-card-error",
                            style: "font-size: 13px; color: {colors.danger};",
                            "{error}"
                        }
                    }
                }

                if mode == CardMode::Editing {
                    CardAction {
                        primary: true,
                        onclick: save_edit,
                        "Save changes"
                    }
                } else {
                    CardAction {
                        onclick: move |_| card.write().begin_edit(),
                        "Want to "
                        span { style: "color: {colors.link};", "edit this note" }
                        "?"
                    }
                }

                CardAction {
                    onclick: delete_note,
                    "Want to "
                    span { style: "color: {colors.danger};", "delete this note" }
                    "?"
                }
            }
        }
    }
}

/// Full-width action row at the bottom of the detail view
#[component]
fn CardAction(
    #[props(default)] primary: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let variant = if primary {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Secondary
    };

    rsx! {
        Button {
            variant,
            onclick: move |evt| onclick.call(evt),
            style: "width: 100%; padding: 16px 0; text-align: center;",
            {children}
        }
    }
}
