//! Note card state machine.
//!
//! A card is a preview that opens a modal detail view. Inside the detail view
//! the note is shown read-only or edited through a local draft. The card never
//! touches the note itself: saves and deletions go through a [`NoteStore`].
//!
//! ```text
//! Closed --open--> ReadOnly --begin_edit--> Editing
//!    ^                ^  ^                    |  |
//!    |                |  +------ save --------+  |
//!    |                +------ cancel_edit -------+
//!    +------------ dismiss (any open mode) ------+
//! ```

use crate::dialog::{Dialog, DismissReason, ModalState};
use crate::error::Result;
use crate::models::{is_blank, DraftPolicy, Note};
use crate::store::NoteStore;

/// What the card is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardMode {
    /// Only the preview is visible
    Closed,
    /// Detail view with static content
    ReadOnly,
    /// Detail view with the draft in a text area
    Editing,
}

/// Result of a save attempt that reached no store error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The store accepted the draft and the card went back to read-only
    Saved,
    /// Nothing was sent: the card was not editing or the draft was blank
    Rejected,
}

/// Draft state owned by a single card instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardState {
    is_editing: bool,
    edited_content: String,
}

impl CardState {
    /// Fresh draft seeded from the note's content
    #[must_use]
    pub fn new(note: &Note) -> Self {
        Self {
            is_editing: false,
            edited_content: note.content.clone(),
        }
    }

    /// Whether the text area is showing
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.is_editing
    }
}

/// One rendered note card.
///
/// Generic over the modal layer so hosts can plug in their own dialog.
#[derive(Debug, Clone)]
pub struct NoteCard<D = ModalState> {
    dialog: D,
    state: CardState,
    policy: DraftPolicy,
    /// Note content as last observed; a change means the store refreshed it.
    seen_content: String,
    /// Content accepted by the last save, shown until the note is refreshed.
    committed: Option<String>,
    last_error: Option<String>,
}

impl NoteCard<ModalState> {
    /// Card for `note` with the default modal layer
    #[must_use]
    pub fn new(note: &Note, policy: DraftPolicy) -> Self {
        Self::with_dialog(note, policy, ModalState::default())
    }
}

impl<D: Dialog> NoteCard<D> {
    /// Card for `note` using the given modal layer
    #[must_use]
    pub fn with_dialog(note: &Note, policy: DraftPolicy, dialog: D) -> Self {
        Self {
            dialog,
            state: CardState::new(note),
            policy,
            seen_content: note.content.clone(),
            committed: None,
            last_error: None,
        }
    }

    /// Current presentation mode
    #[must_use]
    pub fn mode(&self) -> CardMode {
        if !self.dialog.is_open() {
            CardMode::Closed
        } else if self.state.is_editing {
            CardMode::Editing
        } else {
            CardMode::ReadOnly
        }
    }

    /// The draft state
    #[must_use]
    pub const fn state(&self) -> &CardState {
        &self.state
    }

    /// Current draft text
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.state.edited_content
    }

    /// Message from the last store failure, cleared by the next success
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Track the note as currently held by the store.
    ///
    /// When its content differs from what was last seen, the store has
    /// refreshed it and any locally committed text is dropped.
    pub fn observe(&mut self, note: &Note) {
        if note.content != self.seen_content {
            self.seen_content.clone_from(&note.content);
            self.committed = None;
        }
    }

    /// Text for the read-only view and the preview
    #[must_use]
    pub fn display_content<'a>(&'a self, note: &'a Note) -> &'a str {
        match &self.committed {
            Some(committed) if note.content == self.seen_content => committed,
            _ => &note.content,
        }
    }

    /// Open the detail view. It always opens read-only.
    pub fn open(&mut self, note: &Note) {
        self.observe(note);
        if !self.dialog.open() {
            return;
        }

        self.state.is_editing = false;
        self.last_error = None;
        if self.policy == DraftPolicy::ResetOnOpen {
            // Reseed from what the read-only view shows, so an unrefreshed
            // note does not roll the draft back past a save
            self.state.edited_content = self.display_content(note).to_string();
        }
        tracing::debug!("Opened note card: {}", note.id);
    }

    /// Close the detail view, whatever triggered it
    pub fn dismiss(&mut self, reason: DismissReason) {
        self.dialog.dismiss(reason);
    }

    /// Switch from read-only to editing. The draft is left as it was.
    pub fn begin_edit(&mut self) {
        if self.mode() == CardMode::ReadOnly {
            self.state.is_editing = true;
        }
    }

    /// Leave editing without saving. The draft is kept.
    pub fn cancel_edit(&mut self) {
        if self.mode() == CardMode::Editing {
            self.state.is_editing = false;
        }
    }

    /// Replace the draft, one call per keystroke
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.state.edited_content = text.into();
    }

    /// Send the draft to the store and return to read-only.
    ///
    /// Blank drafts are refused without calling the store. If the store
    /// fails, the card stays in editing with the draft intact.
    pub fn save<S: NoteStore + ?Sized>(
        &mut self,
        note: &Note,
        store: &mut S,
    ) -> Result<SaveOutcome> {
        if self.mode() != CardMode::Editing || is_blank(&self.state.edited_content) {
            return Ok(SaveOutcome::Rejected);
        }

        match store.update_note(&note.id, &self.state.edited_content) {
            Ok(()) => {
                tracing::debug!("Saved edit for note: {}", note.id);
                self.seen_content.clone_from(&note.content);
                self.committed = Some(self.state.edited_content.clone());
                self.state.is_editing = false;
                self.last_error = None;
                Ok(SaveOutcome::Saved)
            }
            Err(e) => {
                tracing::warn!("Failed to update note {}: {}", note.id, e);
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Ask the store to delete the note. The card does not close itself;
    /// the host removes it once the note is gone.
    pub fn delete<S: NoteStore + ?Sized>(&mut self, note: &Note, store: &mut S) -> Result<()> {
        match store.delete_note(&note.id) {
            Ok(()) => {
                tracing::debug!("Requested deletion of note: {}", note.id);
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to delete note {}: {}", note.id, e);
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::NoteId;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct RecordingStore {
        updates: Vec<(NoteId, String)>,
        deletes: Vec<NoteId>,
        fail: bool,
    }

    impl NoteStore for RecordingStore {
        fn update_note(&mut self, id: &NoteId, content: &str) -> Result<()> {
            if self.fail {
                return Err(Error::Store("offline".to_string()));
            }
            self.updates.push((*id, content.to_string()));
            Ok(())
        }

        fn delete_note(&mut self, id: &NoteId) -> Result<()> {
            if self.fail {
                return Err(Error::Store("offline".to_string()));
            }
            self.deletes.push(*id);
            Ok(())
        }
    }

    fn buy_milk() -> Note {
        Note::with_id(NoteId::new(), "Buy milk", 1_700_000_000_000)
    }

    fn editing_card(note: &Note) -> NoteCard {
        let mut card = NoteCard::new(note, DraftPolicy::Preserve);
        card.open(note);
        card.begin_edit();
        card
    }

    #[test]
    fn starts_closed_with_note_content() {
        let note = buy_milk();
        let card = NoteCard::new(&note, DraftPolicy::Preserve);
        assert_eq!(card.mode(), CardMode::Closed);
        assert_eq!(card.draft(), "Buy milk");
        assert!(!card.state().is_editing());
    }

    #[test]
    fn open_and_close_never_updates() {
        let note = buy_milk();
        let mut store = RecordingStore::default();
        let mut card = NoteCard::new(&note, DraftPolicy::Preserve);

        card.open(&note);
        assert_eq!(card.mode(), CardMode::ReadOnly);
        card.dismiss(DismissReason::CloseButton);
        assert_eq!(card.mode(), CardMode::Closed);

        assert_eq!(card.save(&note, &mut store).unwrap(), SaveOutcome::Rejected);
        assert!(store.updates.is_empty());
    }

    #[test]
    fn blank_drafts_are_refused() {
        let note = buy_milk();
        for blank in ["", " ", "\n", "\t \n  ", "\u{3000}"] {
            let mut store = RecordingStore::default();
            let mut card = editing_card(&note);
            card.set_draft(blank);

            let outcome = card.save(&note, &mut store).unwrap();

            assert_eq!(outcome, SaveOutcome::Rejected);
            assert_eq!(card.mode(), CardMode::Editing);
            assert_eq!(card.draft(), blank);
            assert!(store.updates.is_empty());
        }
    }

    #[test]
    fn non_blank_drafts_are_sent_verbatim_once() {
        let note = buy_milk();
        for text in ["x", "  padded  ", "line one\nline two", "Buy milk"] {
            let mut store = RecordingStore::default();
            let mut card = editing_card(&note);
            card.set_draft(text);

            let outcome = card.save(&note, &mut store).unwrap();

            assert_eq!(outcome, SaveOutcome::Saved);
            assert_eq!(card.mode(), CardMode::ReadOnly);
            assert_eq!(store.updates, vec![(note.id, text.to_string())]);
        }
    }

    #[test]
    fn delete_calls_store_once_in_either_mode() {
        let note = buy_milk();

        let mut store = RecordingStore::default();
        let mut card = NoteCard::new(&note, DraftPolicy::Preserve);
        card.open(&note);
        card.delete(&note, &mut store).unwrap();
        assert_eq!(store.deletes, vec![note.id]);
        assert_eq!(card.mode(), CardMode::ReadOnly);

        let mut store = RecordingStore::default();
        let mut card = editing_card(&note);
        card.delete(&note, &mut store).unwrap();
        assert_eq!(store.deletes, vec![note.id]);
        assert_eq!(card.mode(), CardMode::Editing);
        assert!(store.updates.is_empty());
    }

    #[test]
    fn toggling_edit_mode_never_updates() {
        let note = buy_milk();
        let store = RecordingStore::default();
        let mut card = NoteCard::new(&note, DraftPolicy::Preserve);
        card.open(&note);

        for _ in 0..5 {
            card.begin_edit();
            assert_eq!(card.mode(), CardMode::Editing);
            card.set_draft("scratch");
            card.cancel_edit();
            assert_eq!(card.mode(), CardMode::ReadOnly);
        }

        assert!(store.updates.is_empty());
        assert_eq!(card.draft(), "scratch");
    }

    #[test]
    fn buy_milk_and_eggs_scenario() {
        let note = buy_milk();
        let mut store = RecordingStore::default();
        let mut card = NoteCard::new(&note, DraftPolicy::Preserve);

        card.open(&note);
        assert_eq!(card.mode(), CardMode::ReadOnly);
        assert_eq!(card.display_content(&note), "Buy milk");

        card.begin_edit();
        assert_eq!(card.draft(), "Buy milk");
        card.set_draft("Buy milk and eggs");
        card.save(&note, &mut store).unwrap();

        assert_eq!(
            store.updates,
            vec![(note.id, "Buy milk and eggs".to_string())]
        );
        assert_eq!(card.mode(), CardMode::ReadOnly);
        // The prop still holds the old content; the card shows what was saved.
        assert_eq!(card.display_content(&note), "Buy milk and eggs");
    }

    #[test]
    fn refreshed_note_wins_over_committed_text() {
        let note = buy_milk();
        let mut store = RecordingStore::default();
        let mut card = editing_card(&note);
        card.set_draft("Buy milk and eggs");
        card.save(&note, &mut store).unwrap();

        let refreshed = Note::with_id(note.id, "Buy oat milk", note.created_at);
        assert_eq!(card.display_content(&refreshed), "Buy oat milk");
        card.observe(&refreshed);
        assert_eq!(card.display_content(&refreshed), "Buy oat milk");
    }

    #[test]
    fn note_refreshed_back_to_old_content_shows_it() {
        let note = buy_milk();
        let mut store = RecordingStore::default();
        let mut card = editing_card(&note);
        card.set_draft("Buy milk and eggs");
        card.save(&note, &mut store).unwrap();

        let saved = Note::with_id(note.id, "Buy milk and eggs", note.created_at);
        card.observe(&saved);
        assert_eq!(card.display_content(&saved), "Buy milk and eggs");

        // Reverted elsewhere to the content the card started from
        card.observe(&note);
        assert_eq!(card.display_content(&note), "Buy milk");
    }

    #[test]
    fn reset_policy_reseeds_from_saved_text_until_refreshed() {
        let note = buy_milk();
        let mut store = RecordingStore::default();
        let mut card = NoteCard::new(&note, DraftPolicy::ResetOnOpen);
        card.open(&note);
        card.begin_edit();
        card.set_draft("Buy milk and eggs");
        card.save(&note, &mut store).unwrap();
        card.dismiss(DismissReason::CloseButton);

        card.open(&note);
        card.begin_edit();
        assert_eq!(card.draft(), "Buy milk and eggs");
        card.dismiss(DismissReason::CloseButton);

        let refreshed = Note::with_id(note.id, "Buy oat milk", note.created_at);
        card.open(&refreshed);
        card.begin_edit();
        assert_eq!(card.draft(), "Buy oat milk");
    }

    #[test]
    fn clearing_then_saving_stays_in_editing() {
        let note = buy_milk();
        let mut store = RecordingStore::default();
        let mut card = editing_card(&note);
        card.set_draft("");

        assert_eq!(card.save(&note, &mut store).unwrap(), SaveOutcome::Rejected);
        assert_eq!(card.mode(), CardMode::Editing);
        assert_eq!(card.draft(), "");
        assert!(store.updates.is_empty());
    }

    #[test]
    fn reopening_always_starts_read_only() {
        let note = buy_milk();
        let mut card = editing_card(&note);
        card.dismiss(DismissReason::Modal);
        card.open(&note);
        assert_eq!(card.mode(), CardMode::ReadOnly);
    }

    #[test]
    fn preserve_policy_keeps_abandoned_draft() {
        let note = buy_milk();
        let mut card = editing_card(&note);
        card.set_draft("Buy milk and");
        card.dismiss(DismissReason::Modal);

        card.open(&note);
        card.begin_edit();
        assert_eq!(card.draft(), "Buy milk and");
    }

    #[test]
    fn reset_policy_discards_abandoned_draft() {
        let note = buy_milk();
        let mut card = NoteCard::new(&note, DraftPolicy::ResetOnOpen);
        card.open(&note);
        card.begin_edit();
        card.set_draft("Buy milk and");
        card.dismiss(DismissReason::Modal);

        card.open(&note);
        card.begin_edit();
        assert_eq!(card.draft(), "Buy milk");
    }

    #[test]
    fn store_failure_keeps_draft_and_reports() {
        let note = buy_milk();
        let mut store = RecordingStore {
            fail: true,
            ..RecordingStore::default()
        };
        let mut card = editing_card(&note);
        card.set_draft("Buy milk and eggs");

        assert!(card.save(&note, &mut store).is_err());
        assert_eq!(card.mode(), CardMode::Editing);
        assert_eq!(card.draft(), "Buy milk and eggs");
        assert_eq!(card.last_error(), Some("Store error: offline"));
        assert_eq!(card.display_content(&note), "Buy milk");

        store.fail = false;
        card.save(&note, &mut store).unwrap();
        assert_eq!(card.last_error(), None);
    }

    #[test]
    fn delete_failure_is_reported() {
        let note = buy_milk();
        let mut store = RecordingStore {
            fail: true,
            ..RecordingStore::default()
        };
        let mut card = NoteCard::new(&note, DraftPolicy::Preserve);
        card.open(&note);

        assert!(card.delete(&note, &mut store).is_err());
        assert!(card.last_error().is_some());
        assert_eq!(card.mode(), CardMode::ReadOnly);
    }

    #[test]
    fn edit_affordance_ignored_while_closed() {
        let note = buy_milk();
        let mut card = NoteCard::new(&note, DraftPolicy::Preserve);
        card.begin_edit();
        assert_eq!(card.mode(), CardMode::Closed);
        assert!(!card.state().is_editing());
    }
}
