//! The contract between a card and whoever owns its note.

use crate::error::Result;
use crate::models::NoteId;

/// Trait for the store a card reports edits and deletions to.
///
/// Calls are synchronous. A returned error means the store did not apply the
/// change; the card surfaces it instead of assuming success.
pub trait NoteStore {
    /// Replace the content of the note with the given id
    fn update_note(&mut self, id: &NoteId, content: &str) -> Result<()>;

    /// Remove the note with the given id
    fn delete_note(&mut self, id: &NoteId) -> Result<()>;
}

/// Adapts a pair of callbacks into a [`NoteStore`].
///
/// ```
/// use notecard_core::store::{FnStore, NoteStore};
/// use notecard_core::NoteId;
///
/// let mut updates = Vec::new();
/// let mut store = FnStore::new(
///     |id: &NoteId, content: &str| {
///         updates.push((*id, content.to_string()));
///         Ok(())
///     },
///     |_id: &NoteId| Ok(()),
/// );
/// let id = NoteId::new();
/// store.update_note(&id, "hello").unwrap();
/// drop(store);
/// assert_eq!(updates, vec![(id, "hello".to_string())]);
/// ```
pub struct FnStore<U, D> {
    on_updated: U,
    on_deleted: D,
}

impl<U, D> FnStore<U, D>
where
    U: FnMut(&NoteId, &str) -> Result<()>,
    D: FnMut(&NoteId) -> Result<()>,
{
    /// Wrap the update and delete callbacks
    pub const fn new(on_updated: U, on_deleted: D) -> Self {
        Self {
            on_updated,
            on_deleted,
        }
    }
}

impl<U, D> NoteStore for FnStore<U, D>
where
    U: FnMut(&NoteId, &str) -> Result<()>,
    D: FnMut(&NoteId) -> Result<()>,
{
    fn update_note(&mut self, id: &NoteId, content: &str) -> Result<()> {
        (self.on_updated)(id, content)
    }

    fn delete_note(&mut self, id: &NoteId) -> Result<()> {
        (self.on_deleted)(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn fn_store_forwards_calls() {
        let mut deleted = Vec::new();
        let id = NoteId::new();
        {
            let mut store = FnStore::new(
                |_: &NoteId, _: &str| Err(Error::Store("read only".to_string())),
                |id: &NoteId| {
                    deleted.push(*id);
                    Ok(())
                },
            );
            assert!(store.update_note(&id, "x").is_err());
            store.delete_note(&id).unwrap();
        }
        assert_eq!(deleted, vec![id]);
    }
}
