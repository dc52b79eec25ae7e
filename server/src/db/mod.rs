use notes_core::{MemoryNoteStore, NoteStore, SqliteNoteStore};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::{
    config::{ServerConfig, StorageKind},
    errors::ApplicationError,
};

/// Build the store selected by `NOTES_STORAGE`
pub fn open_note_store(config: &ServerConfig) -> Result<Arc<dyn NoteStore>, ApplicationError> {
    match config.storage {
        StorageKind::Memory => {
            info!("Using in-memory note store, notes are lost on restart");
            Ok(Arc::new(MemoryNoteStore::new()))
        }
        StorageKind::Sqlite => Ok(Arc::new(open_sqlite_store(&config.db_path)?)),
    }
}

/// Open or create the notes database, creating its directory if needed
pub fn open_sqlite_store(path: &Path) -> Result<SqliteNoteStore, ApplicationError> {
    info!("Setting up notes database at {:?}", path);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let store = SqliteNoteStore::open(path)?;

    info!("Notes database ready");
    Ok(store)
}
