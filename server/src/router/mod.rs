use aide::{axum::ApiRouter, openapi::OpenApi};
use axum::{http::HeaderValue, Extension, Router};
use health::health_routes;
use notes::note_routes;
use openapi::{api_docs, docs_routes};
use root::root_routes;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

pub mod health;
pub mod notes;
pub mod openapi;
pub mod root;

/// Cross-origin access for the listed origins, any method and header
pub fn cors_layer(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn setup_router(app_state: AppState, cors_origins: Vec<HeaderValue>) -> Router {
    aide::gen::on_error(|error| {
        tracing::warn!("OpenAPI generation: {error}");
    });

    aide::gen::extract_schemas(true);
    let mut api = OpenApi::default();

    aide::gen::infer_responses(true);

    ApiRouter::new()
        .merge(root_routes())
        .merge(health_routes())
        .merge(note_routes())
        .merge(docs_routes())
        .finish_api_with(&mut api, api_docs)
        .layer(Extension(Arc::new(api)))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
