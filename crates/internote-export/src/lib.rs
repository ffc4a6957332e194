//! # internote-export
//!
//! Turn Internote documents into the payloads the save and export handlers
//! pass on: `{ content, title, tags }` for persistence and `{ title, content }`
//! for file storage.
//!
//! ## Design
//!
//! Rendering is delegated to `internote-core`. The service adds:
//!
//! - **Custom rules**: override how an element type renders, including types
//!   the core does not know about
//! - **Remove filters**: drop matching elements from exports
//! - **Tag policy**: optional dedupe and hashtag validation for saved tags
//!
//! ## Example
//!
//! ```rust
//! use internote_export::{ExportFormat, ExportService};
//! use internote_core::Node;
//!
//! let service = ExportService::new();
//! let document = vec![Node::heading_one(vec![Node::text("Hello World")])];
//!
//! let payload = service.export(&document, ExportFormat::Markdown);
//! assert_eq!(payload.title, "Hello World");
//! assert_eq!(payload.content, "# Hello World\n");
//! ```

mod payload;
mod rules;
mod service;
mod utilities;

pub use payload::{ExportPayload, NotePayload};
pub use rules::{Filter, ReplacementFn, Rule, Rules};
pub use service::{ExportFormat, ExportOptions, ExportService};
pub use utilities::{is_hashtag, normalize_tags};

/// Error type for export operations
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Document error: {0}")]
    Document(#[from] internote_core::DocumentError),

    #[error("Unknown export format: {0}")]
    UnknownFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;
