use aide::{
    axum::{routing::get_with, ApiRouter, IntoApiResponse},
    transform::TransformOperation,
};
use axum::Json;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct HealthResponse {
    pub status: String,
}

pub fn health_routes() -> ApiRouter<AppState> {
    ApiRouter::new().api_route("/health", get_with(ping, ping_docs))
}

pub async fn ping() -> impl IntoApiResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub fn ping_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Health check")
        .description("Health check endpoint")
        .tag("Health")
        .response::<200, Json<HealthResponse>>()
}
