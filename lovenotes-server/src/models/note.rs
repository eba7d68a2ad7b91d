//! Note request/response models
//!
//! Note text is trimmed on construction and must not be empty afterwards.

use serde::{Deserialize, Serialize};

use super::ValidationError;
use crate::db::repos::Note;

/// Validated, trimmed note text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteText(String);

impl NoteText {
    /// Trim surrounding whitespace and reject what is left if it is empty.
    ///
    /// # Example
    /// ```
    /// use lovenotes_server::models::NoteText;
    ///
    /// assert_eq!(NoteText::new("  hello  ").unwrap().as_str(), "hello");
    /// assert!(NoteText::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "Note text" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for NoteText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// POST /notes body
#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub text: String,
}

/// Note as returned by the list and create endpoints (no timestamp)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteResponse {
    pub id: i32,
    pub text: String,
}

impl From<Note> for NoteResponse {
    fn from(n: Note) -> Self {
        Self {
            id: n.id,
            text: n.text,
        }
    }
}
