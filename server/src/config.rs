use std::path::PathBuf;
use std::str::FromStr;

use axum::http::HeaderValue;

use crate::errors::ApplicationError;

pub const DEFAULT_DB_PATH: &str = "./data/notes.db";

/// Vite dev server, both loopback spellings
pub const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://127.0.0.1:5173"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Memory,
    Sqlite,
}

impl FromStr for StorageKind {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageKind::Memory),
            "sqlite" => Ok(StorageKind::Sqlite),
            other => Err(ApplicationError::Config(format!(
                "Unknown NOTES_STORAGE '{}', expected 'memory' or 'sqlite'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: String,
    pub storage: StorageKind,
    pub db_path: PathBuf,
    pub cors_origins: Vec<HeaderValue>,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn from_env() -> Result<Self, ApplicationError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from any variable source, `lookup` returns `None` for unset names
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApplicationError> {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| {
                ApplicationError::EnvError(std::env::VarError::NotPresent, name.to_string())
            })
        };

        let host = required("NOTES_HOST")?;
        let port = required("NOTES_PORT")?;
        let storage = match lookup("NOTES_STORAGE") {
            Some(kind) => kind.parse::<StorageKind>()?,
            None => StorageKind::Memory,
        };
        let db_path = lookup("NOTES_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string());
        let cors_origins = match lookup("NOTES_CORS_ORIGINS") {
            Some(list) => parse_origins(&list)?,
            None => default_origins(),
        };

        Ok(ServerConfig {
            host,
            port,
            storage,
            db_path: PathBuf::from(db_path),
            cors_origins,
        })
    }
}

pub fn default_origins() -> Vec<HeaderValue> {
    DEFAULT_CORS_ORIGINS
        .iter()
        .map(|origin| HeaderValue::from_static(origin))
        .collect()
}

/// Comma separated origins, blanks ignored
pub fn parse_origins(list: &str) -> Result<Vec<HeaderValue>, ApplicationError> {
    list.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| {
                ApplicationError::Config(format!("Invalid CORS origin '{}'", origin))
            })
        })
        .collect()
}
