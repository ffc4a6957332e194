//! Rich-text document model
//!
//! This module defines the node taxonomy produced by the editor: text leaves
//! carrying marks, and typed elements carrying children. A document is a plain
//! ordered sequence of top-level nodes.

/// Element types that never render their children
pub const VOID_TYPES: &[&str] = &["tag"];

/// Element types that may appear inside block content. The walker marks
/// everything below one of these as inline context.
pub const INLINE_TYPES: &[&str] = &["tag", "link"];

/// Check if an element type is void
pub fn is_void(type_name: &str) -> bool {
    VOID_TYPES.contains(&type_name)
}

/// Check if an element type is inline
pub fn is_inline(type_name: &str) -> bool {
    INLINE_TYPES.contains(&type_name)
}

/// Check if a node is a text leaf
pub fn is_text(node: &Node) -> bool {
    matches!(node, Node::Text(_))
}

/// A document is an ordered sequence of top-level nodes, with no wrapping root
pub type Document = Vec<Node>;

/// A formatting mark applied to a run of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Code,
}

/// Fixed wrap order, outermost first. Serializers peel marks in this order.
pub const MARK_ORDER: [Mark; 4] = [Mark::Bold, Mark::Italic, Mark::Underline, Mark::Code];

impl Mark {
    fn bit(self) -> u8 {
        match self {
            Mark::Bold => 1,
            Mark::Italic => 1 << 1,
            Mark::Underline => 1 << 2,
            Mark::Code => 1 << 3,
        }
    }

    /// Field name used by the editor for this mark
    pub fn name(self) -> &'static str {
        match self {
            Mark::Bold => "bold",
            Mark::Italic => "italic",
            Mark::Underline => "underline",
            Mark::Code => "code",
        }
    }
}

/// Set of marks on a text node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Marks(u8);

impl Marks {
    pub const NONE: Marks = Marks(0);

    pub fn contains(self, mark: Mark) -> bool {
        self.0 & mark.bit() != 0
    }

    /// Returns a copy with `mark` set
    #[must_use]
    pub fn with(self, mark: Mark) -> Self {
        Marks(self.0 | mark.bit())
    }

    /// Returns a copy with `mark` cleared
    #[must_use]
    pub fn without(self, mark: Mark) -> Self {
        Marks(self.0 & !mark.bit())
    }

    /// Returns a copy with `mark` set or cleared
    #[must_use]
    pub fn set(self, mark: Mark, on: bool) -> Self {
        if on {
            self.with(mark)
        } else {
            self.without(mark)
        }
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The outermost mark still present, following [`MARK_ORDER`]
    pub fn outermost(self) -> Option<Mark> {
        MARK_ORDER.into_iter().find(|m| self.contains(*m))
    }

    /// Iterate the marks present, outermost first
    pub fn iter(self) -> impl Iterator<Item = Mark> {
        MARK_ORDER.into_iter().filter(move |m| self.contains(*m))
    }
}

impl FromIterator<Mark> for Marks {
    fn from_iter<I: IntoIterator<Item = Mark>>(iter: I) -> Self {
        iter.into_iter().fold(Marks::NONE, Marks::with)
    }
}

/// A text leaf
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Text {
    pub text: String,
    pub marks: Marks,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: Marks::NONE,
        }
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.marks = self.marks.with(Mark::Bold);
        self
    }

    #[must_use]
    pub fn italic(mut self) -> Self {
        self.marks = self.marks.with(Mark::Italic);
        self
    }

    #[must_use]
    pub fn underline(mut self) -> Self {
        self.marks = self.marks.with(Mark::Underline);
        self
    }

    #[must_use]
    pub fn code(mut self) -> Self {
        self.marks = self.marks.with(Mark::Code);
        self
    }
}

/// The type of an element, with any type-specific fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    Paragraph,
    HeadingOne,
    HeadingTwo,
    BulletedList,
    NumberedList,
    ListItem,
    BlockQuote,

    /// Hyperlink; `href` is carried verbatim and never validated
    Link {
        href: String,
        open_immediately: bool,
    },

    /// Hashtag; void, its children are never rendered
    Tag { tag: String },

    /// Element type this version does not know about
    Unknown(String),
}

impl ElementKind {
    /// Editor name of this element type, e.g. `heading-one`
    pub fn type_name(&self) -> &str {
        match self {
            ElementKind::Paragraph => "paragraph",
            ElementKind::HeadingOne => "heading-one",
            ElementKind::HeadingTwo => "heading-two",
            ElementKind::BulletedList => "bulleted-list",
            ElementKind::NumberedList => "numbered-list",
            ElementKind::ListItem => "list-item",
            ElementKind::BlockQuote => "block-quote",
            ElementKind::Link { .. } => "link",
            ElementKind::Tag { .. } => "tag",
            ElementKind::Unknown(name) => name,
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, ElementKind::HeadingOne | ElementKind::HeadingTwo)
    }
}

/// A typed element with children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub kind: ElementKind,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(kind: ElementKind, children: Vec<Node>) -> Self {
        Self { kind, children }
    }

    pub fn type_name(&self) -> &str {
        self.kind.type_name()
    }

    pub fn is_void(&self) -> bool {
        is_void(self.type_name())
    }

    pub fn is_inline(&self) -> bool {
        is_inline(self.type_name())
    }

    /// Concatenated text of all descendant text leaves, marks ignored.
    /// Tag elements contribute nothing.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        push_plain_text(&self.children, &mut out);
        out
    }
}

/// A node in the document tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(Text),
    Element(Element),
}

impl Node {
    /// Create a plain text node
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(Text::new(text))
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Element(Element::new(ElementKind::Paragraph, children))
    }

    pub fn heading_one(children: Vec<Node>) -> Self {
        Node::Element(Element::new(ElementKind::HeadingOne, children))
    }

    pub fn heading_two(children: Vec<Node>) -> Self {
        Node::Element(Element::new(ElementKind::HeadingTwo, children))
    }

    pub fn bulleted_list(items: Vec<Node>) -> Self {
        Node::Element(Element::new(ElementKind::BulletedList, items))
    }

    pub fn numbered_list(items: Vec<Node>) -> Self {
        Node::Element(Element::new(ElementKind::NumberedList, items))
    }

    pub fn list_item(children: Vec<Node>) -> Self {
        Node::Element(Element::new(ElementKind::ListItem, children))
    }

    pub fn block_quote(children: Vec<Node>) -> Self {
        Node::Element(Element::new(ElementKind::BlockQuote, children))
    }

    pub fn link(href: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Element(Element::new(
            ElementKind::Link {
                href: href.into(),
                open_immediately: false,
            },
            children,
        ))
    }

    /// Create a tag element with the editor's placeholder child
    pub fn tag(tag: impl Into<String>) -> Self {
        Node::Element(Element::new(
            ElementKind::Tag { tag: tag.into() },
            vec![Node::text("")],
        ))
    }

    pub fn is_text(&self) -> bool {
        is_text(self)
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and its descendants, marks ignored.
    /// Tag elements contribute nothing.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        push_plain_text(std::slice::from_ref(self), &mut out);
        out
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

fn push_plain_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(&text.text),
            Node::Element(element) if element.is_void() => {}
            Node::Element(element) => push_plain_text(&element.children, out),
        }
    }
}
