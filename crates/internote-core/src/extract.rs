//! Derived data for the views beside the editor
//!
//! Outline, tags and title are recomputed from the document after every edit.
//! All extractors are pure and total: an empty document yields empty results.
//!
//! Plain text is the concatenation of descendant text leaves with marks
//! ignored. Tag elements contribute no text to it.

use serde::Serialize;

use crate::model::{ElementKind, Node};
use crate::walk::visit;

/// Heading level of an outline entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeadingLevel {
    #[serde(rename = "heading-one")]
    One,
    #[serde(rename = "heading-two")]
    Two,
}

/// A heading in the document outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineEntry {
    /// Index path of the heading, e.g. `"3"` or `"1.0"`
    pub key: String,
    #[serde(rename = "type")]
    pub level: HeadingLevel,
    pub text: String,
}

/// A tag element found in the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagEntry {
    /// Index path of the tag element
    pub key: String,
    pub tag: String,
}

fn path_key(path: &[usize]) -> String {
    path.iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

/// Collect every heading, at any depth, in document order
pub fn extract_outline_from_value(document: &[Node]) -> Vec<OutlineEntry> {
    let mut outline = Vec::new();

    visit(document, |path, node| {
        let Node::Element(element) = node else {
            return;
        };
        let level = match element.kind {
            ElementKind::HeadingOne => HeadingLevel::One,
            ElementKind::HeadingTwo => HeadingLevel::Two,
            _ => return,
        };
        outline.push(OutlineEntry {
            key: path_key(path),
            level,
            text: element.plain_text(),
        });
    });

    outline
}

/// Collect every tag element, in document order
pub fn extract_all_tag_elements_from_value(document: &[Node]) -> Vec<TagEntry> {
    let mut tags = Vec::new();

    visit(document, |path, node| {
        if let Node::Element(element) = node {
            if let ElementKind::Tag { tag } = &element.kind {
                tags.push(TagEntry {
                    key: path_key(path),
                    tag: tag.clone(),
                });
            }
        }
    });

    tags
}

/// Tag strings in document order. Duplicates are kept.
pub fn extract_tags_from_value(document: &[Node]) -> Vec<String> {
    extract_all_tag_elements_from_value(document)
        .into_iter()
        .map(|entry| entry.tag)
        .collect()
}

/// Plain text of the first node, or `""` for an empty document
pub fn extract_title_from_value(document: &[Node]) -> String {
    document.first().map(Node::plain_text).unwrap_or_default()
}
