//! HTML serialization
//!
//! Renders a document to an HTML fragment. Blocks are concatenated without
//! separators or indentation, and `href` values are emitted verbatim.

use crate::escape::escape_html;
use crate::model::{Element, ElementKind, Mark, Node};
use crate::options::HtmlOptions;
use crate::walk::{render_document, Context, Renderer};

/// Serialize a document to HTML with default options
pub fn serialize_html(document: &[Node]) -> String {
    serialize_html_with(document, &HtmlOptions::default())
}

/// Serialize a document to HTML
pub fn serialize_html_with(document: &[Node], options: &HtmlOptions) -> String {
    tracing::trace!(blocks = document.len(), "serializing document to HTML");
    render_document(&HtmlRenderer::new(options), document)
}

/// Render table for HTML output
#[derive(Debug, Clone, Copy)]
pub struct HtmlRenderer<'a> {
    options: &'a HtmlOptions,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(options: &'a HtmlOptions) -> Self {
        Self { options }
    }
}

fn wrap(tag: &str, children: &str) -> String {
    format!("<{tag}>{children}</{tag}>")
}

impl Renderer for HtmlRenderer<'_> {
    fn escape_text(&self, text: &str) -> String {
        escape_html(text)
    }

    fn wrap_mark(&self, mark: Mark, inner: String) -> String {
        match mark {
            Mark::Bold => wrap("strong", &inner),
            Mark::Italic => wrap("i", &inner),
            Mark::Underline => wrap("u", &inner),
            Mark::Code => wrap("code", &inner),
        }
    }

    fn render_element(&self, element: &Element, _ctx: &Context<'_>, children: String) -> String {
        match &element.kind {
            ElementKind::HeadingOne => wrap("h1", &children),
            ElementKind::HeadingTwo => wrap("h2", &children),
            ElementKind::BulletedList => wrap("ul", &children),
            ElementKind::NumberedList => wrap("ol", &children),
            ElementKind::ListItem => wrap("li", &children),
            ElementKind::BlockQuote => format!("<blockquote><p>{children}</p></blockquote>"),
            ElementKind::Paragraph => wrap("p", &children),
            ElementKind::Link { href, .. } => format!("<a href=\"{href}\">{children}</a>"),
            ElementKind::Tag { tag } => escape_html(tag),
            ElementKind::Unknown(name) => {
                tracing::debug!(element_type = %name, "unknown element type, rendering children only");
                children
            }
        }
    }

    fn block_separator(&self) -> &str {
        &self.options.block_separator
    }
}
