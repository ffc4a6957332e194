//! The note shown to new users.

use crate::model::{Document, Node, Text};

fn item(children: Vec<Node>) -> Node {
    Node::list_item(children)
}

/// Build the canonical welcome document
pub fn welcome_document() -> Document {
    vec![
        Node::heading_one(vec![Node::text("Welcome to Internote")]),
        Node::paragraph(vec![
            Node::text("Internote is a place for your notes. Read the "),
            Node::link(
                "https://example.com/guide",
                vec![Node::text("getting started guide")],
            ),
            Node::text(" to learn more."),
        ]),
        Node::block_quote(vec![
            Node::text("Notes are saved "),
            Text::new("automatically").bold().into(),
            Node::text(" as you "),
            Text::new("type").italic().into(),
            Node::text(", and "),
            Text::new("everything").bold().italic().underline().into(),
            Node::text(" stays in sync."),
        ]),
        Node::heading_two(vec![Node::text("Things to try")]),
        Node::bulleted_list(vec![
            item(vec![Node::text("Make text "), Text::new("bold").bold().into()]),
            item(vec![Node::text("Make text "), Text::new("italic").italic().into()]),
            item(vec![
                Node::text("Make text "),
                Text::new("underlined").underline().into(),
            ]),
            item(vec![Node::text("Write "), Text::new("inline code").code().into()]),
            item(vec![
                Node::text("Combine "),
                Text::new("marks").bold().italic().into(),
            ]),
            item(vec![
                Node::text("Organize notes with hashtags like "),
                Node::tag("#ideas"),
            ]),
            item(vec![
                Node::text("Use "),
                Node::tag("#todo"),
                Node::text(" to track tasks"),
            ]),
            item(vec![
                Node::text("Add "),
                Node::link("https://example.com", vec![Node::text("links")]),
                Node::text(" to other pages"),
            ]),
            item(vec![
                Node::text("Start a line with "),
                Text::new("# ").code().into(),
                Node::text(" for a heading"),
            ]),
            item(vec![
                Node::text("Start a line with "),
                Text::new("> ").code().into(),
                Node::text(" for a quote"),
            ]),
            item(vec![Node::text(
                "Special characters like <, >, & and \" are escaped",
            )]),
            item(vec![
                Node::text("Export notes to "),
                Text::new("HTML").bold().into(),
                Node::text(" or "),
                Text::new("Markdown").bold().into(),
            ]),
        ]),
    ]
}
