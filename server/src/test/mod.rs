#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::http::{
    header::{
        ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS,
        ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_HEADERS,
        ACCESS_CONTROL_REQUEST_METHOD, ORIGIN,
    },
    HeaderValue, Method, StatusCode,
};
use axum_test::TestServer;
use notes_core::MemoryNoteStore;
use tempfile::TempDir;

use crate::{
    config::default_origins, db::open_sqlite_store, errors::ErrorBody, router::root::RootResponse,
    router::setup_router, state::AppState,
};


pub fn setup_server() -> TestServer {
    let state = AppState::new(Arc::new(MemoryNoteStore::new()));
    TestServer::new(setup_router(state, default_origins())).unwrap()
}

/// Server over a SQLite file; keep the `TempDir` alive for the test's duration
pub fn setup_sqlite_server() -> (TestServer, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = open_sqlite_store(&dir.path().join("data").join("notes.db")).unwrap();
    let state = AppState::new(Arc::new(store));

    (
        TestServer::new(setup_router(state, default_origins())).unwrap(),
        dir,
    )
}

#[tokio::test]
async fn root_lists_endpoints() {
    let server = setup_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let json = response.json::<RootResponse>();
    assert_eq!(json.docs, "/docs");
    assert_eq!(json.endpoints["create_note"], "POST /notes/");
    assert_eq!(json.endpoints.len(), 5);
}

#[tokio::test]
async fn health_ok() {
    let server = setup_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_json(&serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn openapi_document_lists_note_paths() {
    let server = setup_server();

    let response = server.get("/docs/api.json").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert!(json["paths"]["/notes/"]["post"].is_object());
    assert!(json["paths"]["/notes/"]["get"].is_object());
}

#[tokio::test]
async fn cors_allows_configured_origin() {
    let server = setup_server();

    let response = server
        .get("/notes/")
        .add_header(ORIGIN, HeaderValue::from_static("http://localhost:5173"))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:5173"
    );
}

#[tokio::test]
async fn cors_preflight_mirrors_method_and_headers() {
    let server = setup_server();

    let response = server
        .method(Method::OPTIONS, "/notes/1")
        .add_header(ORIGIN, HeaderValue::from_static("http://127.0.0.1:5173"))
        .add_header(ACCESS_CONTROL_REQUEST_METHOD, HeaderValue::from_static("PUT"))
        .add_header(
            ACCESS_CONTROL_REQUEST_HEADERS,
            HeaderValue::from_static("content-type,x-custom"),
        )
        .await;

    response.assert_status_ok();
    let headers = response.headers();
    assert_eq!(
        headers.get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://127.0.0.1:5173"
    );
    assert_eq!(headers.get(ACCESS_CONTROL_ALLOW_METHODS).unwrap(), "PUT");
    assert_eq!(
        headers.get(ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
        "content-type,x-custom"
    );
    assert_eq!(headers.get(ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(), "true");
}

#[tokio::test]
async fn cors_ignores_unknown_origin() {
    let server = setup_server();

    let response = server
        .get("/notes/")
        .add_header(ORIGIN, HeaderValue::from_static("http://evil.example"))
        .await;

    response.assert_status_ok();
    assert!(response
        .headers()
        .get(ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let server = setup_server();

    let response = server.get("/nope").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_json_is_unprocessable() {
    let server = setup_server();

    let response = server
        .post("/notes/")
        .text("{not json")
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(!response.json::<ErrorBody>().detail.is_empty());
}
