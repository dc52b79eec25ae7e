//! Input validation for note payloads.
//!
//! Shape checks (field present, field is a string) happen when a payload is
//! deserialized. The checks here run on already-typed input, before any
//! store call.

use crate::error::ValidationError;
use crate::models::{NewNote, NotePatch};

/// A typed payload that can check itself before reaching a store
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Titles must contain at least one non-whitespace character
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::new("title", "title must not be empty"));
    }
    Ok(())
}

impl Validate for NewNote {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_title(&self.title)
    }
}

impl Validate for NotePatch {
    fn validate(&self) -> Result<(), ValidationError> {
        match self.title {
            Some(ref title) => validate_title(title),
            None => Ok(()),
        }
    }
}
