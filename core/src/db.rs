use crate::error::{StoreError, StoreResult};
use crate::models::{now_millis, NewNote, Note, NotePatch};
use crate::schema;
use crate::store::NoteStore;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

const NOTE_COLUMNS: &str = "id, title, content, created_at, updated_at";

/// Open or create a notes database at the specified path
pub fn open_db(path: &Path) -> rusqlite::Result<Connection> {
    let conn = Connection::open(path)?;
    schema::initialize(&conn)?;
    Ok(conn)
}

/// Raw `notes` row, timestamps still in milliseconds
struct NoteRow {
    id: i64,
    title: String,
    content: String,
    created_at: i64,
    updated_at: Option<i64>,
}

impl NoteRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(NoteRow {
            id: row.get(0)?,
            title: row.get(1)?,
            content: row.get(2)?,
            created_at: row.get(3)?,
            updated_at: row.get(4)?,
        })
    }
}

fn from_millis(ms: i64) -> StoreResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms).ok_or(StoreError::InvalidTimestamp(ms))
}

impl TryFrom<NoteRow> for Note {
    type Error = StoreError;

    fn try_from(row: NoteRow) -> StoreResult<Self> {
        Ok(Note {
            id: row.id,
            title: row.title,
            content: row.content,
            created_at: from_millis(row.created_at)?,
            updated_at: row.updated_at.map(from_millis).transpose()?,
        })
    }
}

fn select_note(tx: &Transaction<'_>, id: i64) -> StoreResult<Option<Note>> {
    let row = tx
        .query_row(
            &format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = ?1"),
            params![id],
            NoteRow::from_row,
        )
        .optional()?;

    row.map(Note::try_from).transpose()
}

/// Note store backed by a single SQLite connection.
///
/// Every operation runs in its own transaction; dropping an uncommitted
/// transaction on an error path rolls it back.
#[derive(Debug)]
pub struct SqliteNoteStore {
    conn: Mutex<Connection>,
}

impl SqliteNoteStore {
    pub fn new(conn: Connection) -> StoreResult<Self> {
        schema::initialize(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open(path: &Path) -> StoreResult<Self> {
        Ok(Self {
            conn: Mutex::new(open_db(path)?),
        })
    }

    pub fn open_in_memory() -> StoreResult<Self> {
        Self::new(Connection::open_in_memory()?)
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl NoteStore for SqliteNoteStore {
    fn create(&self, note: NewNote) -> StoreResult<Note> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        let now = now_millis();

        tx.execute(
            "INSERT INTO notes (title, content, created_at) VALUES (?1, ?2, ?3)",
            params![note.title, note.content, now.timestamp_millis()],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        Ok(Note {
            id,
            title: note.title,
            content: note.content,
            created_at: now,
            updated_at: None,
        })
    }

    fn list(&self) -> StoreResult<Vec<Note>> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        let mut notes = Vec::new();
        {
            let mut stmt = tx.prepare(&format!("SELECT {NOTE_COLUMNS} FROM notes ORDER BY id"))?;
            let rows = stmt.query_map([], NoteRow::from_row)?;
            for row in rows {
                notes.push(Note::try_from(row?)?);
            }
        }
        tx.commit()?;

        Ok(notes)
    }

    fn get(&self, id: i64) -> StoreResult<Note> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        let note = select_note(&tx, id)?.ok_or(StoreError::NotFound(id))?;
        tx.commit()?;

        Ok(note)
    }

    fn update(&self, id: i64, patch: NotePatch) -> StoreResult<Note> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        let mut note = select_note(&tx, id)?.ok_or(StoreError::NotFound(id))?;
        patch.apply_to(&mut note, now_millis());

        tx.execute(
            "UPDATE notes SET title = ?1, content = ?2, updated_at = ?3 WHERE id = ?4",
            params![
                note.title,
                note.content,
                note.updated_at.map(|t| t.timestamp_millis()),
                id
            ],
        )?;
        tx.commit()?;

        Ok(note)
    }

    fn delete(&self, id: i64) -> StoreResult<Note> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        let note = select_note(&tx, id)?.ok_or(StoreError::NotFound(id))?;
        tx.execute("DELETE FROM notes WHERE id = ?1", params![id])?;
        tx.commit()?;

        Ok(note)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_and_get_note() {
        let dir = TempDir::new().unwrap();
        let store = SqliteNoteStore::open(&dir.path().join("test.db")).unwrap();

        let note = store.create(NewNote::new("A", "B")).unwrap();

        assert_eq!(note.id, 1);
        assert_eq!(note.title, "A");
        assert_eq!(note.content, "B");

        let retrieved = store.get(note.id).unwrap();
        assert_eq!(retrieved, note);
    }

    #[test]
    fn test_notes_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("test.db");

        let created = {
            let store = SqliteNoteStore::open(&db_path).unwrap();
            store.create(NewNote::new("kept", "on disk")).unwrap()
        };

        let store = SqliteNoteStore::open(&db_path).unwrap();
        assert_eq!(store.get(created.id).unwrap(), created);
    }

    #[test]
    fn test_ids_not_reused_after_deleting_last_row() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("test.db");

        {
            let store = SqliteNoteStore::open(&db_path).unwrap();
            store.create(NewNote::new("a", "")).unwrap();
            let second = store.create(NewNote::new("b", "")).unwrap();
            store.delete(second.id).unwrap();
        }

        let store = SqliteNoteStore::open(&db_path).unwrap();
        let third = store.create(NewNote::new("c", "")).unwrap();
        assert_eq!(third.id, 3);
    }

    #[test]
    fn test_update_stamps_updated_at() {
        let store = SqliteNoteStore::open_in_memory().unwrap();
        let note = store.create(NewNote::new("title", "body")).unwrap();
        assert!(note.updated_at.is_none());

        let updated = store
            .update(
                note.id,
                NotePatch {
                    title: Some("new title".to_string()),
                    content: None,
                },
            )
            .unwrap();

        assert_eq!(updated.title, "new title");
        assert_eq!(updated.content, "body");
        assert_eq!(updated.created_at, note.created_at);
        assert!(updated.updated_at.unwrap() >= note.created_at);

        assert_eq!(store.get(note.id).unwrap(), updated);
    }

    #[test]
    fn test_list_leaves_no_open_transaction() {
        let store = SqliteNoteStore::open_in_memory().unwrap();
        store.create(NewNote::new("first", "")).unwrap();
        store.create(NewNote::new("second", "")).unwrap();

        let titles: Vec<String> = store.list().unwrap().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["first", "second"]);

        assert!(store.lock().unwrap().is_autocommit());
    }

    #[test]
    fn test_corrupt_timestamp_is_reported() {
        let conn = Connection::open_in_memory().unwrap();
        schema::initialize(&conn).unwrap();
        conn.execute(
            "INSERT INTO notes (title, content, created_at) VALUES ('t', 'c', ?1)",
            params![i64::MAX],
        )
        .unwrap();

        let store = SqliteNoteStore::new(conn).unwrap();
        assert!(matches!(
            store.get(1),
            Err(StoreError::InvalidTimestamp(ms)) if ms == i64::MAX
        ));
    }
}
