//! Editor JSON shape
//!
//! Nodes travel between the editor and the persistence layer as JSON objects:
//! an object with a `type` field is an element, an object with `text` and no
//! `type` is a text leaf. Mark flags are booleans on the text object and are
//! omitted when false.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DocumentError, Result};
use crate::model::{Document, Element, ElementKind, Mark, Marks, Node, Text};

/// Parse an editor JSON document (an array of nodes)
pub fn parse_document(json: &str) -> Result<Document> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize a document to editor JSON
pub fn document_to_json(document: &[Node]) -> Result<String> {
    Ok(serde_json::to_string(document)?)
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Wire form used for reading; every field is optional
#[derive(Deserialize)]
struct RawNode {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    children: Vec<Node>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underline: bool,
    #[serde(default)]
    code: bool,
    #[serde(default)]
    href: Option<String>,
    #[serde(rename = "openImmediately", default)]
    open_immediately: bool,
    #[serde(default)]
    tag: Option<String>,
}

/// Wire form used for writing, borrowing from the node
#[derive(Serialize)]
struct NodeOut<'a> {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    href: Option<&'a str>,
    #[serde(rename = "openImmediately", skip_serializing_if = "is_false")]
    open_immediately: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "is_false")]
    bold: bool,
    #[serde(skip_serializing_if = "is_false")]
    italic: bool,
    #[serde(skip_serializing_if = "is_false")]
    underline: bool,
    #[serde(skip_serializing_if = "is_false")]
    code: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<&'a [Node]>,
}

impl TryFrom<RawNode> for Node {
    type Error = DocumentError;

    fn try_from(raw: RawNode) -> Result<Self> {
        let Some(kind) = raw.kind else {
            let text = raw.text.ok_or_else(|| {
                DocumentError::InvalidNode("object has neither `type` nor `text`".to_string())
            })?;
            let marks = Marks::NONE
                .set(Mark::Bold, raw.bold)
                .set(Mark::Italic, raw.italic)
                .set(Mark::Underline, raw.underline)
                .set(Mark::Code, raw.code);
            return Ok(Node::Text(Text { text, marks }));
        };

        let kind = match kind.as_str() {
            "paragraph" => ElementKind::Paragraph,
            "heading-one" => ElementKind::HeadingOne,
            "heading-two" => ElementKind::HeadingTwo,
            "bulleted-list" => ElementKind::BulletedList,
            "numbered-list" => ElementKind::NumberedList,
            "list-item" => ElementKind::ListItem,
            "block-quote" => ElementKind::BlockQuote,
            "link" => ElementKind::Link {
                href: raw.href.unwrap_or_default(),
                open_immediately: raw.open_immediately,
            },
            "tag" => ElementKind::Tag {
                tag: raw.tag.unwrap_or_default(),
            },
            _ => ElementKind::Unknown(kind),
        };

        Ok(Node::Element(Element::new(kind, raw.children)))
    }
}

impl<'a> From<&'a Node> for NodeOut<'a> {
    fn from(node: &'a Node) -> Self {
        let mut out = NodeOut {
            kind: None,
            href: None,
            open_immediately: false,
            tag: None,
            text: None,
            bold: false,
            italic: false,
            underline: false,
            code: false,
            children: None,
        };

        match node {
            Node::Text(text) => {
                out.text = Some(text.text.as_str());
                out.bold = text.marks.contains(Mark::Bold);
                out.italic = text.marks.contains(Mark::Italic);
                out.underline = text.marks.contains(Mark::Underline);
                out.code = text.marks.contains(Mark::Code);
            }
            Node::Element(element) => {
                out.kind = Some(element.type_name());
                out.children = Some(element.children.as_slice());
                match &element.kind {
                    ElementKind::Link {
                        href,
                        open_immediately,
                    } => {
                        out.href = Some(href.as_str());
                        out.open_immediately = *open_immediately;
                    }
                    ElementKind::Tag { tag } => out.tag = Some(tag.as_str()),
                    _ => {}
                }
            }
        }

        out
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        NodeOut::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawNode::deserialize(deserializer)?;
        Node::try_from(raw).map_err(D::Error::custom)
    }
}
