use chrono::{DateTime, Utc};
use notes_core::{NewNote, Note, NotePatch};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Note as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NoteDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Note> for NoteDto {
    fn from(note: Note) -> Self {
        NoteDto {
            id: note.id,
            title: note.title,
            content: note.content,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

/// Body of `POST /notes/`, both fields required
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateNoteDto {
    pub title: String,
    pub content: String,
}

impl From<CreateNoteDto> for NewNote {
    fn from(dto: CreateNoteDto) -> Self {
        NewNote::new(dto.title, dto.content)
    }
}

/// Body of `PUT /notes/{id}`, omitted fields keep their stored value
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct UpdateNoteDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl From<UpdateNoteDto> for NotePatch {
    fn from(dto: UpdateNoteDto) -> Self {
        NotePatch {
            title: dto.title,
            content: dto.content,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteNoteResponse {
    pub message: String,
    pub deleted_note: NoteDto,
}

impl DeleteNoteResponse {
    pub const MESSAGE: &'static str = "Note deleted successfully";

    pub fn new(note: Note) -> Self {
        DeleteNoteResponse {
            message: Self::MESSAGE.to_string(),
            deleted_note: note.into(),
        }
    }
}
