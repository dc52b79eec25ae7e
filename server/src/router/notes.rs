use aide::{
    axum::{routing::get_with, ApiRouter, IntoApiResponse},
    transform::TransformOperation,
};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use notes_core::{NewNote, NotePatch, Validate};
use tracing::info;

use crate::{
    errors::{ErrorBody, RestError, RestResult},
    extract::{NoteId, ValidJson},
    model::note::{CreateNoteDto, DeleteNoteResponse, NoteDto, UpdateNoteDto},
    state::AppState,
};

pub fn note_routes() -> ApiRouter<AppState> {
    ApiRouter::new()
        .api_route(
            "/notes",
            get_with(list_notes, list_notes_docs).post_with(create_note, create_note_docs),
        )
        .api_route(
            "/notes/",
            get_with(list_notes, list_notes_docs).post_with(create_note, create_note_docs),
        )
        .api_route(
            "/notes/:id",
            get_with(get_note, get_note_docs)
                .put_with(update_note, update_note_docs)
                .delete_with(delete_note, delete_note_docs),
        )
}

async fn create_note(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<CreateNoteDto>,
) -> impl IntoApiResponse {
    match perform_create(&state, body) {
        Ok(note) => (StatusCode::CREATED, Json(note)).into_response(),
        Err(e) => e.into_response(),
    }
}

fn perform_create(state: &AppState, body: CreateNoteDto) -> RestResult<NoteDto> {
    let new_note = NewNote::from(body);
    new_note.validate()?;

    let note = state.store.create(new_note)?;
    info!(id = note.id, "Created note");

    Ok(note.into())
}

fn create_note_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create note")
        .description("Create a note. The server assigns the id and creation time.")
        .tag("Notes")
        .response_with::<201, Json<NoteDto>, _>(|res| res.description("The stored note"))
        .response_with::<422, Json<ErrorBody>, _>(|res| {
            res.description("Missing or malformed title/content")
        })
}

async fn list_notes(State(state): State<AppState>) -> impl IntoApiResponse {
    match perform_list(&state) {
        Ok(notes) => (StatusCode::OK, Json(notes)).into_response(),
        Err(e) => e.into_response(),
    }
}

fn perform_list(state: &AppState) -> RestResult<Vec<NoteDto>> {
    let notes = state.store.list()?;
    Ok(notes.into_iter().map(NoteDto::from).collect())
}

fn list_notes_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List notes")
        .description("Get all notes")
        .tag("Notes")
        .response::<200, Json<Vec<NoteDto>>>()
}

async fn get_note(State(state): State<AppState>, NoteId(id): NoteId) -> impl IntoApiResponse {
    match state.store.get(id) {
        Ok(note) => (StatusCode::OK, Json(NoteDto::from(note))).into_response(),
        Err(e) => RestError::from(e).into_response(),
    }
}

fn get_note_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get note")
        .description("Get a single note by id")
        .tag("Notes")
        .response::<200, Json<NoteDto>>()
        .response_with::<404, Json<ErrorBody>, _>(|res| res.description("No note with this id"))
}

async fn update_note(
    State(state): State<AppState>,
    NoteId(id): NoteId,
    ValidJson(body): ValidJson<UpdateNoteDto>,
) -> impl IntoApiResponse {
    match perform_update(&state, id, body) {
        Ok(note) => (StatusCode::OK, Json(note)).into_response(),
        Err(e) => e.into_response(),
    }
}

fn perform_update(state: &AppState, id: i64, body: UpdateNoteDto) -> RestResult<NoteDto> {
    let patch = NotePatch::from(body);
    patch.validate()?;

    let note = state.store.update(id, patch)?;
    info!(id, "Updated note");

    Ok(note.into())
}

fn update_note_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Update note")
        .description("Replace the supplied fields of a note. Omitted fields keep their value.")
        .tag("Notes")
        .response::<200, Json<NoteDto>>()
        .response_with::<404, Json<ErrorBody>, _>(|res| res.description("No note with this id"))
        .response_with::<422, Json<ErrorBody>, _>(|res| res.description("Malformed body"))
}

async fn delete_note(State(state): State<AppState>, NoteId(id): NoteId) -> impl IntoApiResponse {
    match perform_delete(&state, id) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => e.into_response(),
    }
}

fn perform_delete(state: &AppState, id: i64) -> RestResult<DeleteNoteResponse> {
    let note = state.store.delete(id)?;
    info!(id, "Deleted note");

    Ok(DeleteNoteResponse::new(note))
}

fn delete_note_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete note")
        .description("Permanently delete a note. Its id is never reused.")
        .tag("Notes")
        .response::<200, Json<DeleteNoteResponse>>()
        .response_with::<404, Json<ErrorBody>, _>(|res| res.description("No note with this id"))
}
