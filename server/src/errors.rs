use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use notes_core::{StoreError, ValidationError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

/// Errors that stop the server from starting or serving
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Missing environment variable {1}: {0}")]
    EnvError(std::env::VarError, String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot open note store: {0}")]
    Store(#[from] StoreError),

    #[error("Cannot serve: {0}")]
    CannotServe(std::io::Error),
}

pub type RestResult<T> = Result<T, RestError>;

/// Per-request failures, rendered as `{"detail": ...}`
#[derive(Error, Debug)]
pub enum RestError {
    #[error("Note with id {0} not found")]
    NotFound(i64),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Internal(String),
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ErrorBody {
    pub detail: String,
}

impl RestError {
    pub fn status(&self) -> StatusCode {
        match self {
            RestError::NotFound(_) => StatusCode::NOT_FOUND,
            RestError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for RestError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => RestError::NotFound(id),
            other => RestError::Internal(other.to_string()),
        }
    }
}

impl From<ValidationError> for RestError {
    fn from(err: ValidationError) -> Self {
        RestError::Validation(err.to_string())
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            RestError::Internal(message) => error!("Request failed: {}", message),
            other => debug!("Request rejected: {}", other),
        }

        let body = ErrorBody {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
