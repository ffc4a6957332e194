//! Depth-first traversal over a document tree
//!
//! Both serializers share the recursion defined here and differ only in their
//! [`Renderer`] table. Traversal visits each node once, in document order.

use crate::model::{Element, ElementKind, Mark, Marks, Node, Text};

/// Concatenate `render_one(n)` for every node, in order
pub fn render_sequence<F>(nodes: &[Node], mut render_one: F) -> String
where
    F: FnMut(&Node) -> String,
{
    let mut output = String::new();
    for node in nodes {
        output.push_str(&render_one(node));
    }
    output
}

/// Where an element sits in the tree
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    /// Kind of the enclosing element, `None` at the top level
    pub parent: Option<&'a ElementKind>,
    /// Index among its siblings
    pub index: usize,
    /// Position among the siblings that are actually rendered
    pub ordinal: usize,
    /// Nesting depth, 0 at the top level
    pub depth: usize,
    /// Whether an ancestor is an inline element
    pub inline: bool,
}

impl Context<'static> {
    pub const ROOT: Self = Context {
        parent: None,
        index: 0,
        ordinal: 0,
        depth: 0,
        inline: false,
    };
}

/// Per-format render table
pub trait Renderer {
    /// Escape the raw text of a leaf. Called once per leaf, innermost.
    fn escape_text(&self, text: &str) -> String;

    /// Wrap already-rendered content in one mark
    fn wrap_mark(&self, mark: Mark, inner: String) -> String;

    /// Render an element given its rendered children.
    /// Void elements receive an empty `children` string.
    fn render_element(&self, element: &Element, ctx: &Context<'_>, children: String) -> String;

    /// Inserted between top-level blocks
    fn block_separator(&self) -> &str;

    /// Elements for which this returns true render to nothing
    fn skip_element(&self, _element: &Element) -> bool {
        false
    }
}

/// Render a whole document, joining top-level blocks with the renderer's separator.
/// Skipped blocks produce neither output nor a separator.
pub fn render_document<R: Renderer + ?Sized>(renderer: &R, nodes: &[Node]) -> String {
    let separator = renderer.block_separator();
    let mut index = 0;
    let mut ordinal = 0;
    render_sequence(nodes, |node| {
        let ctx = Context {
            index,
            ordinal,
            ..Context::ROOT
        };
        index += 1;
        if is_skipped(renderer, node) {
            return String::new();
        }
        ordinal += 1;
        let rendered = render_node_in(renderer, node, &ctx);
        if ctx.ordinal == 0 {
            rendered
        } else {
            format!("{separator}{rendered}")
        }
    })
}

/// Render a single node as if it were at the top level
pub fn render_node<R: Renderer + ?Sized>(renderer: &R, node: &Node) -> String {
    if is_skipped(renderer, node) {
        return String::new();
    }
    render_node_in(renderer, node, &Context::ROOT)
}

fn is_skipped<R: Renderer + ?Sized>(renderer: &R, node: &Node) -> bool {
    matches!(node, Node::Element(element) if renderer.skip_element(element))
}

fn render_node_in<R: Renderer + ?Sized>(renderer: &R, node: &Node, ctx: &Context<'_>) -> String {
    match node {
        Node::Text(text) => render_text(renderer, text),
        Node::Element(element) => {
            let children = if element.is_void() {
                String::new()
            } else {
                render_children(renderer, element, ctx)
            };
            renderer.render_element(element, ctx, children)
        }
    }
}

fn render_children<R: Renderer + ?Sized>(
    renderer: &R,
    element: &Element,
    outer: &Context<'_>,
) -> String {
    let depth = outer.depth + 1;
    let inline = outer.inline || element.is_inline();
    let mut index = 0;
    let mut ordinal = 0;
    render_sequence(&element.children, |child| {
        let ctx = Context {
            parent: Some(&element.kind),
            index,
            ordinal,
            depth,
            inline,
        };
        index += 1;
        if is_skipped(renderer, child) {
            return String::new();
        }
        ordinal += 1;
        render_node_in(renderer, child, &ctx)
    })
}

/// Render a text leaf, peeling marks outermost first
pub fn render_text<R: Renderer + ?Sized>(renderer: &R, text: &Text) -> String {
    render_marked(renderer, &text.text, text.marks)
}

fn render_marked<R: Renderer + ?Sized>(renderer: &R, text: &str, marks: Marks) -> String {
    match marks.outermost() {
        Some(mark) => renderer.wrap_mark(mark, render_marked(renderer, text, marks.without(mark))),
        None => renderer.escape_text(text),
    }
}

/// Visit every node depth-first in document order, with its index path.
/// Children of void elements are not visited.
pub fn visit<'a, F>(nodes: &'a [Node], mut visitor: F)
where
    F: FnMut(&[usize], &'a Node),
{
    let mut path = Vec::new();
    visit_in(nodes, &mut path, &mut visitor);
}

fn visit_in<'a, F>(nodes: &'a [Node], path: &mut Vec<usize>, visitor: &mut F)
where
    F: FnMut(&[usize], &'a Node),
{
    for (i, node) in nodes.iter().enumerate() {
        path.push(i);
        visitor(path.as_slice(), node);
        if let Node::Element(element) = node {
            if !element.is_void() {
                visit_in(&element.children, path, visitor);
            }
        }
        path.pop();
    }
}
