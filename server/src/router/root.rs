use std::collections::BTreeMap;

use aide::{
    axum::{routing::get_with, ApiRouter, IntoApiResponse},
    transform::TransformOperation,
};
use axum::Json;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

pub const WELCOME_MESSAGE: &str = "Welcome to the notes API";

/// Informational index of the API
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RootResponse {
    pub message: String,
    pub docs: String,
    pub endpoints: BTreeMap<String, String>,
}

pub fn root_routes() -> ApiRouter<AppState> {
    ApiRouter::new().api_route("/", get_with(index, index_docs))
}

async fn index() -> impl IntoApiResponse {
    let endpoints = [
        ("create_note", "POST /notes/"),
        ("get_all_notes", "GET /notes/"),
        ("get_note", "GET /notes/{note_id}"),
        ("update_note", "PUT /notes/{note_id}"),
        ("delete_note", "DELETE /notes/{note_id}"),
    ]
    .into_iter()
    .map(|(name, route)| (name.to_string(), route.to_string()))
    .collect();

    Json(RootResponse {
        message: WELCOME_MESSAGE.to_string(),
        docs: "/docs".to_string(),
        endpoints,
    })
}

fn index_docs(op: TransformOperation) -> TransformOperation {
    op.summary("API index")
        .description("Lists the note endpoints and where the documentation lives")
        .tag("Root")
        .response::<200, Json<RootResponse>>()
}
