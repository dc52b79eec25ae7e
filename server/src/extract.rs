//! Request extractors that reject malformed input with a 422 `{"detail"}` body
//! instead of axum's plain-text rejections.

use aide::{gen::GenContext, openapi::Operation, operation::OperationInput};
use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use schemars::JsonSchema;
use serde::{de::DeserializeOwned, Deserialize};

use crate::errors::RestError;

/// JSON body that must deserialize into `T`
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ValidJson(value)),
            Err(rejection) => Err(RestError::Validation(rejection.body_text())),
        }
    }
}

impl<T: JsonSchema> OperationInput for ValidJson<T> {
    fn operation_input(ctx: &mut GenContext, operation: &mut Operation) {
        Json::<T>::operation_input(ctx, operation);
    }
}

#[derive(Deserialize, JsonSchema)]
pub struct NoteIdParam {
    /// Note id
    pub id: i64,
}

/// The `{id}` segment of `/notes/{id}`
pub struct NoteId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for NoteId
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<NoteIdParam>::from_request_parts(parts, state).await {
            Ok(Path(param)) => Ok(NoteId(param.id)),
            Err(rejection) => Err(RestError::Validation(rejection.body_text())),
        }
    }
}

impl OperationInput for NoteId {
    fn operation_input(ctx: &mut GenContext, operation: &mut Operation) {
        Path::<NoteIdParam>::operation_input(ctx, operation);
    }
}
