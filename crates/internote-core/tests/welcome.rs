use pretty_assertions::assert_eq;
use scraper::{Html, Selector};

use internote_core::{
    document_to_json, extract_outline_from_value, extract_tags_from_value,
    extract_title_from_value, parse_document, serialize_html, serialize_markdown,
    welcome_document, HeadingLevel,
};

const WELCOME_HTML: &str = include_str!("fixtures/welcome.html");
const WELCOME_MARKDOWN: &str = include_str!("fixtures/welcome.md");
const WELCOME_JSON: &str = include_str!("fixtures/welcome.json");

#[test]
fn welcome_html_matches_fixture() {
    assert_eq!(serialize_html(&welcome_document()), WELCOME_HTML);
}

#[test]
fn welcome_markdown_matches_fixture() {
    assert_eq!(serialize_markdown(&welcome_document()), WELCOME_MARKDOWN);
}

#[test]
fn welcome_json_parses_to_document() {
    assert_eq!(parse_document(WELCOME_JSON).unwrap(), welcome_document());
}

#[test]
fn welcome_json_round_trips() {
    let json = document_to_json(&welcome_document()).unwrap();
    assert_eq!(parse_document(&json).unwrap(), welcome_document());
}

#[test]
fn welcome_html_is_well_formed() {
    let html = Html::parse_fragment(&serialize_html(&welcome_document()));
    let count = |selector: &str| {
        let selector = Selector::parse(selector).unwrap();
        html.select(&selector).count()
    };
    assert_eq!(count("h1"), 1);
    assert_eq!(count("h2"), 1);
    assert_eq!(count("ul > li"), 12);
    assert_eq!(count("blockquote > p > strong > i > u"), 1);
    assert_eq!(count("a[href]"), 2);

    let items = Selector::parse("li").unwrap();
    let escaped = html
        .select(&items)
        .nth(10)
        .map(|li| li.text().collect::<String>())
        .unwrap();
    assert_eq!(escaped, "Special characters like <, >, & and \" are escaped");
}

#[test]
fn welcome_derived_data() {
    let document = welcome_document();

    assert_eq!(extract_title_from_value(&document), "Welcome to Internote");
    assert_eq!(extract_tags_from_value(&document), vec!["#ideas", "#todo"]);

    let outline = extract_outline_from_value(&document);
    let summary: Vec<_> = outline
        .iter()
        .map(|entry| (entry.key.as_str(), entry.level, entry.text.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("0", HeadingLevel::One, "Welcome to Internote"),
            ("3", HeadingLevel::Two, "Things to try"),
        ]
    );
}

#[test]
fn serialization_leaves_document_untouched() {
    let document = welcome_document();
    let before = document.clone();

    serialize_html(&document);
    serialize_markdown(&document);
    extract_outline_from_value(&document);

    assert_eq!(document, before);
}

#[test]
fn empty_document() {
    assert_eq!(serialize_html(&[]), "");
    assert_eq!(serialize_markdown(&[]), "");
    assert!(extract_outline_from_value(&[]).is_empty());
    assert_eq!(extract_title_from_value(&[]), "");
    assert!(parse_document("[]").unwrap().is_empty());
}
