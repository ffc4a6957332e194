//! Configuration options for document serialization

/// How items of a `numbered-list` are prefixed in Markdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberedListStyle {
    /// Same `- ` prefix as bulleted lists
    #[default]
    Dashed,
    /// Incrementing numerals: `1. `, `2. `, ...
    Numerals,
}

/// Options for HTML serialization
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    /// Inserted between top-level blocks (none by default)
    pub block_separator: String,
}

/// Options for Markdown serialization
#[derive(Debug, Clone)]
pub struct MarkdownOptions {
    /// Inserted between top-level blocks
    pub block_separator: String,

    /// Prefix style for numbered-list items
    pub numbered_list_style: NumberedListStyle,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            block_separator: "\n".to_string(),
            numbered_list_style: NumberedListStyle::Dashed,
        }
    }
}
