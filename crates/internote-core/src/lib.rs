//! internote-core - rich-text document model and serialization
//!
//! This crate provides the editor's document tree together with converters to
//! HTML and Markdown and the derived data (outline, tags, title) shown beside
//! the editor. It is used by `internote-export` to build save and export
//! payloads.
//!
//! # Architecture
//!
//! ```text
//!                            ┌──────────────┐ ──html──────▶ HTML String
//! Editor JSON ──serde──────▶ │              │
//!                            │   Document   │ ──markdown──▶ Markdown String
//!                            │              │
//!                            └──────────────┘ ──extract───▶ outline / tags / title
//! ```
//!
//! Every operation is a pure read of the tree; nothing here mutates a document.
//!
//! # Example
//!
//! ```rust
//! use internote_core::{serialize_html, serialize_markdown, Node, Text};
//!
//! let document = vec![
//!     Node::heading_one(vec![Node::text("Hello World")]),
//!     Node::paragraph(vec![
//!         Node::text("This is "),
//!         Text::new("bold").bold().into(),
//!         Node::text(" text."),
//!     ]),
//! ];
//!
//! assert_eq!(
//!     serialize_html(&document),
//!     "<h1>Hello World</h1><p>This is <strong>bold</strong> text.</p>"
//! );
//! assert_eq!(
//!     serialize_markdown(&document),
//!     "# Hello World\n\nThis is **bold** text.\n"
//! );
//! ```

mod error;
mod escape;
mod extract;
mod html;
mod json;
mod markdown;
mod model;
mod options;
pub mod walk;
mod welcome;

pub use error::{DocumentError, Result};
pub use escape::escape_html;
pub use extract::{
    extract_all_tag_elements_from_value, extract_outline_from_value, extract_tags_from_value,
    extract_title_from_value, HeadingLevel, OutlineEntry, TagEntry,
};
pub use html::{serialize_html, serialize_html_with, HtmlRenderer};
pub use json::{document_to_json, parse_document};
pub use markdown::{serialize_markdown, serialize_markdown_with, MarkdownRenderer};
pub use model::{
    is_inline, is_text, is_void, Document, Element, ElementKind, Mark, Marks, Node, Text,
    INLINE_TYPES, MARK_ORDER, VOID_TYPES,
};
pub use options::{HtmlOptions, MarkdownOptions, NumberedListStyle};
pub use walk::{render_document, render_node, render_sequence, Context, Renderer};
pub use welcome::welcome_document;
