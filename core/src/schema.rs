/// SQL schema for the notes database.
///
/// AUTOINCREMENT keeps SQLite from handing out the id of a deleted row again.
pub const SCHEMA_V1: &str = r#"
CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    created_at INTEGER NOT NULL,
    updated_at INTEGER
);

PRAGMA user_version = 1;
"#;

pub const CURRENT_VERSION: i32 = 1;

/// Get current schema version from database
pub fn get_schema_version(conn: &rusqlite::Connection) -> Result<i32, rusqlite::Error> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
}

/// Create the schema on a fresh database, accept an already current one
pub fn initialize(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    let version = get_schema_version(conn)?;

    if version == 0 {
        conn.execute_batch(SCHEMA_V1)?;
        return Ok(());
    }

    if version == CURRENT_VERSION {
        Ok(())
    } else {
        Err(rusqlite::Error::InvalidQuery)
    }
}
