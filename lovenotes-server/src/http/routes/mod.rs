//! Route handlers organized by resource

pub mod notes;
pub mod predictions;
pub mod root;
pub mod viewer;

use serde::Serialize;

/// `{"message": ...}` acknowledgment body
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
