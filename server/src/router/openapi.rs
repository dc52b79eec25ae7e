use std::sync::Arc;

use aide::{
    axum::{routing::get, ApiRouter, IntoApiResponse},
    openapi::OpenApi,
    redoc::Redoc,
    transform::TransformOpenApi,
};
use axum::{response::IntoResponse, Extension, Json};

use crate::state::AppState;

pub const OPENAPI_JSON_PATH: &str = "/docs/api.json";

pub fn docs_routes() -> ApiRouter<AppState> {
    ApiRouter::new()
        .route(
            "/docs",
            Redoc::new(OPENAPI_JSON_PATH)
                .with_title("Notes API")
                .axum_route(),
        )
        .route(OPENAPI_JSON_PATH, get(serve_docs))
}

async fn serve_docs(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoApiResponse {
    Json(&*api).into_response()
}

pub fn api_docs(api: TransformOpenApi) -> TransformOpenApi {
    api.title("Notes API")
        .summary("Create, list, fetch, update and delete notes")
        .description("JSON API over a single note store, in memory or SQLite backed.")
}
