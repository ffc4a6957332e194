//! Error types for the document JSON boundary.

use thiserror::Error;

/// Errors raised while reading or writing editor JSON.
///
/// Serialization to HTML/Markdown and extraction are total and never fail.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid node: {0}")]
    InvalidNode(String),
}

pub type Result<T> = std::result::Result<T, DocumentError>;
