//! ExportService - the entry point used by the save and export handlers.

use std::fmt;
use std::str::FromStr;

use internote_core::{
    extract_outline_from_value, extract_tags_from_value, extract_title_from_value,
    parse_document, render_document, HtmlOptions, HtmlRenderer, MarkdownOptions,
    MarkdownRenderer, Node, OutlineEntry, Renderer,
};

use crate::payload::{ExportPayload, NotePayload};
use crate::rules::{Filter, Rule, RuleRenderer, Rules};
use crate::utilities::normalize_tags;
use crate::{ExportError, Result};

/// Output format of an export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Html,
    Markdown,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Html => f.write_str("html"),
            ExportFormat::Markdown => f.write_str("markdown"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "html" => Ok(ExportFormat::Html),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

/// Options for ExportService
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// HTML serialization options
    pub html: HtmlOptions,

    /// Markdown serialization options
    pub markdown: MarkdownOptions,

    /// Drop repeated tags from the save payload, keeping the first occurrence
    pub dedupe_tags: bool,

    /// Drop tags that are not `#` followed by non-space characters
    pub drop_invalid_tags: bool,
}

/// The main service for turning documents into save and export payloads
pub struct ExportService {
    options: ExportOptions,
    rules: Rules,
}

impl ExportService {
    /// Create a new ExportService with default options
    pub fn new() -> Self {
        Self {
            options: ExportOptions::default(),
            rules: Rules::new(),
        }
    }

    /// Create an ExportService with custom options
    pub fn with_options(options: ExportOptions) -> Self {
        Self {
            options,
            rules: Rules::new(),
        }
    }

    /// Add a custom rule
    pub fn add_rule(&mut self, key: &str, rule: Rule) -> &mut Self {
        self.rules.add(key, rule);
        self
    }

    /// Remove elements matching the filter from exports
    pub fn remove(&mut self, filter: Filter) -> &mut Self {
        self.rules.remove(filter);
        self
    }

    /// Apply a plugin
    pub fn use_plugin<F>(&mut self, plugin: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        plugin(self);
        self
    }

    /// Get the current options
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut ExportOptions {
        &mut self.options
    }

    /// Serialize a document to HTML
    pub fn to_html(&self, document: &[Node]) -> String {
        self.serialize(document, ExportFormat::Html)
    }

    /// Serialize a document to Markdown
    pub fn to_markdown(&self, document: &[Node]) -> String {
        self.serialize(document, ExportFormat::Markdown)
    }

    /// Serialize a document in the given format
    pub fn serialize(&self, document: &[Node], format: ExportFormat) -> String {
        tracing::trace!(blocks = document.len(), %format, "serializing document");
        match format {
            ExportFormat::Html => self.render(&HtmlRenderer::new(&self.options.html), document, format),
            ExportFormat::Markdown => {
                self.render(&MarkdownRenderer::new(&self.options.markdown), document, format)
            }
        }
    }

    fn render(&self, base: &dyn Renderer, document: &[Node], format: ExportFormat) -> String {
        if self.rules.is_empty() {
            render_document(base, document)
        } else {
            render_document(&RuleRenderer::new(base, &self.rules, format), document)
        }
    }

    /// Build the payload handed to the storage collaborator
    pub fn export(&self, document: &[Node], format: ExportFormat) -> ExportPayload {
        ExportPayload {
            title: extract_title_from_value(document),
            content: self.serialize(document, format),
        }
    }

    /// Build the payload handed to the persistence collaborator
    pub fn save_payload(&self, document: &[Node]) -> NotePayload {
        let tags = normalize_tags(extract_tags_from_value(document), &self.options);
        NotePayload {
            content: document.to_vec(),
            title: extract_title_from_value(document),
            tags,
        }
    }

    /// Document outline for the side panel
    pub fn outline(&self, document: &[Node]) -> Vec<OutlineEntry> {
        extract_outline_from_value(document)
    }

    /// Parse editor JSON and build its export payload
    pub fn export_json(&self, json: &str, format: ExportFormat) -> Result<ExportPayload> {
        let document = parse_document(json)?;
        Ok(self.export(&document, format))
    }

    /// Parse editor JSON and build its save payload
    pub fn save_payload_json(&self, json: &str) -> Result<NotePayload> {
        let document = parse_document(json)?;
        Ok(self.save_payload(&document))
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use internote_core::{welcome_document, Element, ElementKind, NumberedListStyle, Text};

    fn note() -> Vec<Node> {
        vec![
            Node::heading_one(vec![Node::text("Groceries "), Node::tag("#home")]),
            Node::numbered_list(vec![
                Node::list_item(vec![Node::text("Milk "), Node::tag("#home")]),
                Node::list_item(vec![Text::new("Eggs").bold().into()]),
            ]),
        ]
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("html".parse::<ExportFormat>().unwrap(), ExportFormat::Html);
        assert_eq!("Markdown".parse::<ExportFormat>().unwrap(), ExportFormat::Markdown);
        assert_eq!("md".parse::<ExportFormat>().unwrap(), ExportFormat::Markdown);
        assert!(matches!(
            "pdf".parse::<ExportFormat>(),
            Err(ExportError::UnknownFormat(f)) if f == "pdf"
        ));
    }

    #[test]
    fn test_default_output_matches_core() {
        let service = ExportService::new();
        let doc = welcome_document();
        assert_eq!(service.to_html(&doc), internote_core::serialize_html(&doc));
        assert_eq!(service.to_markdown(&doc), internote_core::serialize_markdown(&doc));
    }

    #[test]
    fn test_export_payload() {
        let service = ExportService::new();
        let payload = service.export(&note(), ExportFormat::Markdown);
        assert_eq!(payload.title, "Groceries ");
        assert_eq!(payload.content, "# Groceries #home\n\n- Milk #home\n- **Eggs**\n");
    }

    #[test]
    fn test_numbered_lists_option() {
        let mut service = ExportService::new();
        service.options_mut().markdown.numbered_list_style = NumberedListStyle::Numerals;
        assert_eq!(
            service.to_markdown(&note()),
            "# Groceries #home\n\n1. Milk #home\n2. **Eggs**\n"
        );
    }

    #[test]
    fn test_numbering_skips_removed_items() {
        let mut service = ExportService::new();
        service.options_mut().markdown.numbered_list_style = NumberedListStyle::Numerals;
        service.remove(Filter::predicate(|element| element.plain_text() == "drop"));

        let doc = vec![
            Node::numbered_list(vec![
                Node::list_item(vec![Node::text("a")]),
                Node::list_item(vec![Node::text("drop")]),
                Node::list_item(vec![Node::text("c")]),
            ]),
            Node::paragraph(vec![Node::text("drop")]),
            Node::paragraph(vec![Node::text("end")]),
        ];
        assert_eq!(service.to_markdown(&doc), "1. a\n2. c\n\nend\n");
        assert_eq!(service.to_html(&doc), "<ol><li>a</li><li>c</li></ol><p>end</p>");
    }

    #[test]
    fn test_save_payload_keeps_duplicate_tags_by_default() {
        let service = ExportService::new();
        let payload = service.save_payload(&note());
        assert_eq!(payload.title, "Groceries ");
        assert_eq!(payload.tags, vec!["#home", "#home"]);
        assert_eq!(payload.content, note());
    }

    #[test]
    fn test_save_payload_dedupes_tags() {
        let service = ExportService::with_options(ExportOptions {
            dedupe_tags: true,
            ..Default::default()
        });
        assert_eq!(service.save_payload(&note()).tags, vec!["#home"]);
    }

    #[test]
    fn test_custom_rule_overrides_builtin() {
        let mut service = ExportService::new();
        service.add_rule(
            "tag-links",
            Rule::for_kind("tag", |element, _, format| match (&element.kind, format) {
                (ElementKind::Tag { tag }, ExportFormat::Html) => {
                    format!("<a class=\"tag\" href=\"/tags/{}\">{tag}</a>", &tag[1..])
                }
                (ElementKind::Tag { tag }, ExportFormat::Markdown) => format!("`{tag}`"),
                _ => String::new(),
            }),
        );

        let doc = vec![Node::paragraph(vec![Node::text("see "), Node::tag("#work")])];
        assert_eq!(
            service.to_html(&doc),
            "<p>see <a class=\"tag\" href=\"/tags/work\">#work</a></p>"
        );
        assert_eq!(service.to_markdown(&doc), "see `#work`\n");
    }

    #[test]
    fn test_rule_for_unknown_type() {
        let mut service = ExportService::new();
        service.add_rule(
            "divider",
            Rule::for_kind("divider", |_, _, format| match format {
                ExportFormat::Html => "<hr>".to_string(),
                ExportFormat::Markdown => "---\n".to_string(),
            }),
        );

        let doc = vec![
            Node::paragraph(vec![Node::text("a")]),
            Element::new(ElementKind::Unknown("divider".to_string()), vec![]).into(),
        ];
        assert_eq!(service.to_html(&doc), "<p>a</p><hr>");
        assert_eq!(service.to_markdown(&doc), "a\n\n---\n");
    }

    #[test]
    fn test_remove_filter() {
        let mut service = ExportService::new();
        service.remove(Filter::kind("tag"));

        let doc = vec![Node::paragraph(vec![Node::text("x "), Node::tag("#private")])];
        assert_eq!(service.to_html(&doc), "<p>x </p>");
        assert_eq!(service.save_payload(&doc).tags, vec!["#private"]);
    }

    #[test]
    fn test_use_plugin() {
        fn no_quotes(service: &mut ExportService) {
            service.remove(Filter::kind("block-quote"));
        }

        let mut service = ExportService::new();
        service.use_plugin(no_quotes);

        let doc = vec![
            Node::block_quote(vec![Node::text("q")]),
            Node::paragraph(vec![Node::text("p")]),
        ];
        assert_eq!(service.to_html(&doc), "<p>p</p>");
    }

    #[test]
    fn test_json_entry_points() {
        let service = ExportService::new();
        let json = r##"[{"type":"heading-one","children":[{"text":"Hi "},{"type":"tag","tag":"#x","children":[{"text":""}]}]}]"##;

        let payload = service.export_json(json, ExportFormat::Html).unwrap();
        assert_eq!(payload.content, "<h1>Hi #x</h1>");

        let saved = service.save_payload_json(json).unwrap();
        assert_eq!(saved.tags, vec!["#x"]);

        assert!(matches!(
            service.save_payload_json("{"),
            Err(ExportError::Document(_))
        ));
    }

    #[test]
    fn test_service_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ExportService>();
    }
}
