#![deny(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

pub mod db;
pub mod error;
pub mod memory;
pub mod models;
pub mod schema;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use db::{open_db, SqliteNoteStore};
pub use error::{StoreError, StoreResult, ValidationError};
pub use memory::MemoryNoteStore;
pub use models::{NewNote, Note, NotePatch};
pub use store::NoteStore;
pub use validation::Validate;
