use crate::error::StoreResult;
use crate::models::{NewNote, Note, NotePatch};

/// Owner of note identity and persistence.
///
/// Implementations must keep the contract identical regardless of backend:
/// ids start at 1, grow by one per create and are never reused, and every
/// operation on a missing id fails with [`StoreError::NotFound`].
///
/// [`StoreError::NotFound`]: crate::error::StoreError::NotFound
pub trait NoteStore: Send + Sync {
    /// Insert a note, assigning its id and `created_at`
    fn create(&self, note: NewNote) -> StoreResult<Note>;

    /// All stored notes. Ordering is backend defined.
    fn list(&self) -> StoreResult<Vec<Note>>;

    fn get(&self, id: i64) -> StoreResult<Note>;

    /// Replace the fields present in `patch` and stamp `updated_at`
    fn update(&self, id: i64, patch: NotePatch) -> StoreResult<Note>;

    /// Remove a note permanently and return it
    fn delete(&self, id: i64) -> StoreResult<Note>;
}
