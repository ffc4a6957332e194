//! Tag normalization for save payloads.

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::service::ExportOptions;

/// `#` followed by one or more characters that are neither whitespace nor `#`
static HASHTAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#[^\s#]+$").unwrap());

/// Check if a tag string is a well-formed hashtag
pub fn is_hashtag(tag: &str) -> bool {
    HASHTAG_RE.is_match(tag)
}

/// Apply the tag policy from `options`, preserving document order
pub fn normalize_tags(tags: Vec<String>, options: &ExportOptions) -> Vec<String> {
    let before = tags.len();

    let tags: Vec<String> = if options.drop_invalid_tags {
        tags.into_iter().filter(|t| is_hashtag(t)).collect()
    } else {
        tags
    };

    let tags: Vec<String> = if options.dedupe_tags {
        tags.into_iter().collect::<IndexSet<_>>().into_iter().collect()
    } else {
        tags
    };

    if tags.len() != before {
        tracing::debug!(before, after = tags.len(), "normalized note tags");
    }

    tags
}
