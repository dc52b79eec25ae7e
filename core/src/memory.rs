use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::{StoreError, StoreResult};
use crate::models::{now_millis, NewNote, Note, NotePatch};
use crate::store::NoteStore;

/// Map and id counter, always locked together
#[derive(Debug)]
struct MemoryState {
    // Ids only grow, so key order is insertion order
    notes: BTreeMap<i64, Note>,
    next_id: i64,
}

/// Process-local note store. Contents are lost on restart.
#[derive(Debug)]
pub struct MemoryNoteStore {
    state: Mutex<MemoryState>,
}

impl Default for MemoryNoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState {
                notes: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, MemoryState>> {
        self.state.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl NoteStore for MemoryNoteStore {
    fn create(&self, note: NewNote) -> StoreResult<Note> {
        let mut state = self.lock()?;

        let id = state.next_id;
        state.next_id += 1;

        let note = Note {
            id,
            title: note.title,
            content: note.content,
            created_at: now_millis(),
            updated_at: None,
        };
        state.notes.insert(id, note.clone());

        Ok(note)
    }

    fn list(&self) -> StoreResult<Vec<Note>> {
        let state = self.lock()?;
        Ok(state.notes.values().cloned().collect())
    }

    fn get(&self, id: i64) -> StoreResult<Note> {
        let state = self.lock()?;
        state.notes.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    fn update(&self, id: i64, patch: NotePatch) -> StoreResult<Note> {
        let mut state = self.lock()?;
        let note = state.notes.get_mut(&id).ok_or(StoreError::NotFound(id))?;

        patch.apply_to(note, now_millis());

        Ok(note.clone())
    }

    fn delete(&self, id: i64) -> StoreResult<Note> {
        let mut state = self.lock()?;
        state.notes.remove(&id).ok_or(StoreError::NotFound(id))
    }
}
