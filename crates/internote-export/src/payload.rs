//! Payloads exchanged with the persistence and storage collaborators.

use internote_core::Document;
use serde::{Deserialize, Serialize};

/// What the save handler persists for a note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotePayload {
    pub content: Document,
    pub title: String,
    pub tags: Vec<String>,
}

/// What the export handler uploads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportPayload {
    pub title: String,
    pub content: String,
}
