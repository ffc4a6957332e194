//! Markdown serialization
//!
//! Renders a document to Markdown. Top-level blocks are joined with a newline.
//! Text content is not escaped: `*` and `_` typed by the user pass through raw.
//! Underline is written as `_text_`, which most renderers display as emphasis.
//! Block elements nested inside an inline element render their children only.

use crate::model::{Element, ElementKind, Mark, Node};
use crate::options::{MarkdownOptions, NumberedListStyle};
use crate::walk::{render_document, Context, Renderer};

/// Serialize a document to Markdown with default options
pub fn serialize_markdown(document: &[Node]) -> String {
    serialize_markdown_with(document, &MarkdownOptions::default())
}

/// Serialize a document to Markdown
pub fn serialize_markdown_with(document: &[Node], options: &MarkdownOptions) -> String {
    tracing::trace!(blocks = document.len(), "serializing document to Markdown");
    render_document(&MarkdownRenderer::new(options), document)
}

/// Render table for Markdown output
#[derive(Debug, Clone, Copy)]
pub struct MarkdownRenderer<'a> {
    options: &'a MarkdownOptions,
}

impl<'a> MarkdownRenderer<'a> {
    pub fn new(options: &'a MarkdownOptions) -> Self {
        Self { options }
    }

    fn list_item_prefix(&self, ctx: &Context<'_>) -> String {
        match (self.options.numbered_list_style, ctx.parent) {
            (NumberedListStyle::Numerals, Some(ElementKind::NumberedList)) => {
                format!("{}. ", ctx.ordinal + 1)
            }
            _ => "- ".to_string(),
        }
    }
}

impl Renderer for MarkdownRenderer<'_> {
    fn escape_text(&self, text: &str) -> String {
        text.to_string()
    }

    fn wrap_mark(&self, mark: Mark, inner: String) -> String {
        let delimiter = match mark {
            Mark::Bold => "**",
            Mark::Italic => "*",
            Mark::Underline => "_",
            Mark::Code => "`",
        };
        format!("{delimiter}{inner}{delimiter}")
    }

    fn render_element(&self, element: &Element, ctx: &Context<'_>, children: String) -> String {
        // Block syntax inside a link would break the link
        if ctx.inline && !element.is_inline() {
            return children;
        }
        match &element.kind {
            ElementKind::HeadingOne => format!("# {children}\n"),
            ElementKind::HeadingTwo => format!("## {children}\n"),
            ElementKind::BulletedList | ElementKind::NumberedList => children,
            ElementKind::ListItem => format!("{}{children}\n", self.list_item_prefix(ctx)),
            ElementKind::BlockQuote => format!("> {children}\n"),
            ElementKind::Paragraph => format!("{children}\n"),
            ElementKind::Link { href, .. } => format!("[{children}]({href})"),
            ElementKind::Tag { tag } => tag.clone(),
            ElementKind::Unknown(name) => {
                tracing::debug!(element_type = %name, "unknown element type, rendering children only");
                format!("{children}\n")
            }
        }
    }

    fn block_separator(&self) -> &str {
        &self.options.block_separator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Text;

    fn text_children() -> Vec<Node> {
        vec![Node::text("Hello")]
    }

    #[test]
    fn test_heading_one() {
        let doc = vec![Node::heading_one(text_children())];
        assert_eq!(serialize_markdown(&doc), "# Hello\n");
    }

    #[test]
    fn test_heading_two() {
        let doc = vec![Node::heading_two(text_children())];
        assert_eq!(serialize_markdown(&doc), "## Hello\n");
    }

    #[test]
    fn test_paragraph() {
        let doc = vec![Node::paragraph(text_children())];
        assert_eq!(serialize_markdown(&doc), "Hello\n");
    }

    #[test]
    fn test_bulleted_list() {
        let doc = vec![Node::bulleted_list(vec![
            Node::list_item(vec![Node::text("One")]),
            Node::list_item(vec![Node::text("Two")]),
        ])];
        assert_eq!(serialize_markdown(&doc), "- One\n- Two\n");
    }

    #[test]
    fn test_numbered_list_uses_dashes_by_default() {
        let doc = vec![Node::numbered_list(vec![
            Node::list_item(vec![Node::text("One")]),
            Node::list_item(vec![Node::text("Two")]),
        ])];
        assert_eq!(serialize_markdown(&doc), "- One\n- Two\n");
    }

    #[test]
    fn test_numbered_list_with_numerals() {
        let options = MarkdownOptions {
            numbered_list_style: NumberedListStyle::Numerals,
            ..Default::default()
        };
        let doc = vec![
            Node::numbered_list(vec![
                Node::list_item(vec![Node::text("One")]),
                Node::list_item(vec![Node::text("Two")]),
                Node::list_item(vec![Node::text("Three")]),
            ]),
            Node::bulleted_list(vec![Node::list_item(vec![Node::text("Bullet")])]),
        ];
        assert_eq!(
            serialize_markdown_with(&doc, &options),
            "1. One\n2. Two\n3. Three\n\n- Bullet\n"
        );
    }

    #[test]
    fn test_blocks_inside_link_are_flattened() {
        let doc = vec![Node::paragraph(vec![Node::link(
            "https://example.com",
            vec![Node::heading_one(vec![Node::text("Big")])],
        )])];
        assert_eq!(serialize_markdown(&doc), "[Big](https://example.com)\n");
    }

    #[test]
    fn test_list_item() {
        let doc = vec![Node::list_item(text_children())];
        assert_eq!(serialize_markdown(&doc), "- Hello\n");
    }

    #[test]
    fn test_block_quote() {
        let doc = vec![Node::block_quote(text_children())];
        assert_eq!(serialize_markdown(&doc), "> Hello\n");
    }

    #[test]
    fn test_link() {
        let doc = vec![Node::link("https://example.com", text_children())];
        assert_eq!(serialize_markdown(&doc), "[Hello](https://example.com)");
    }

    #[test]
    fn test_tag_emits_literal_text() {
        let doc = vec![Node::tag("#hashtags")];
        assert_eq!(serialize_markdown(&doc), "#hashtags");
    }

    #[test]
    fn test_unknown_type_renders_children_with_newline() {
        let doc: Vec<Node> = vec![Element::new(
            ElementKind::Unknown("image".to_string()),
            vec![Node::text("caption")],
        )
        .into()];
        assert_eq!(serialize_markdown(&doc), "caption\n");
    }

    #[test]
    fn test_blocks_joined_with_newline() {
        let doc = vec![
            Node::heading_one(vec![Node::text("A")]),
            Node::paragraph(vec![Node::text("B")]),
        ];
        assert_eq!(serialize_markdown(&doc), "# A\n\nB\n");
    }

    #[test]
    fn test_special_characters_pass_through() {
        let doc = vec![Node::paragraph(vec![Node::text(r#"<b> & "q" *x* _y_"#)])];
        assert_eq!(serialize_markdown(&doc), "<b> & \"q\" *x* _y_\n");
    }

    #[test]
    fn test_mark_combinations() {
        let cases = [
            (false, false, false, "T"),
            (true, false, false, "**T**"),
            (false, true, false, "*T*"),
            (false, false, true, "_T_"),
            (true, true, false, "***T***"),
            (true, false, true, "**_T_**"),
            (false, true, true, "*_T_*"),
            (true, true, true, "***_T_***"),
        ];

        for (bold, italic, underline, expected) in cases {
            let mut text = Text::new("T");
            if bold {
                text = text.bold();
            }
            if italic {
                text = text.italic();
            }
            if underline {
                text = text.underline();
            }
            let doc = vec![Node::Text(text)];
            assert_eq!(
                serialize_markdown(&doc),
                expected,
                "bold={bold} italic={italic} underline={underline}"
            );
        }
    }

    #[test]
    fn test_code_mark() {
        let doc = vec![Node::Text(Text::new("x = 1").code().italic())];
        assert_eq!(serialize_markdown(&doc), "*`x = 1`*");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(serialize_markdown(&[]), "");
    }
}
