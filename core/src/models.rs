use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored note with all metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    /// Sequential id assigned by the store, starting at 1
    pub id: i64,
    pub title: String,
    /// Note body, may be empty
    pub content: String,
    /// Set once when the note is created
    pub created_at: DateTime<Utc>,
    /// Set on every successful update, `None` until the first one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input for creating a note
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub content: String,
}

impl NewNote {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Partial update: only the fields that are `Some` replace stored values
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NotePatch {
    /// Apply the supplied fields to `note`, leaving `id` and `created_at` alone
    pub fn apply_to(self, note: &mut Note, now: DateTime<Utc>) {
        if let Some(title) = self.title {
            note.title = title;
        }
        if let Some(content) = self.content {
            note.content = content;
        }
        note.updated_at = Some(now);
    }
}

/// Current time truncated to millisecond precision.
///
/// Both stores use this so a note read back from SQLite (which keeps
/// milliseconds) compares equal to the one returned at creation.
pub fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}
