//! Rule and Filter types for custom element rendering.

use internote_core::Element;

use crate::service::ExportFormat;

/// Type alias for replacement functions
pub type ReplacementFn = Box<dyn Fn(&Element, &str, ExportFormat) -> String + Send + Sync>;

/// A filter determines which elements a rule applies to
pub enum Filter {
    /// Match a single element type
    Kind(String),
    /// Match any of multiple element types
    Kinds(Vec<String>),
    /// Match using a predicate function
    Predicate(Box<dyn Fn(&Element) -> bool + Send + Sync>),
}

impl Filter {
    /// Create a filter for a single element type, e.g. `"block-quote"`
    pub fn kind(name: &str) -> Self {
        Filter::Kind(name.to_string())
    }

    /// Create a filter for multiple element types
    pub fn kinds(names: &[&str]) -> Self {
        Filter::Kinds(names.iter().map(|s| s.to_string()).collect())
    }

    /// Create a filter with a predicate
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&Element) -> bool + Send + Sync + 'static,
    {
        Filter::Predicate(Box::new(f))
    }

    /// Check if this filter matches an element
    pub fn matches(&self, element: &Element) -> bool {
        let type_name = element.type_name();
        match self {
            Filter::Kind(k) => type_name == k,
            Filter::Kinds(kinds) => kinds.iter().any(|k| k == type_name),
            Filter::Predicate(f) => f(element),
        }
    }
}

/// A rule defines how to render a matched element
pub struct Rule {
    /// Filter to determine which elements this rule applies to
    pub filter: Filter,
    /// Replacement function receiving the element, its rendered children and the target format
    pub replacement: ReplacementFn,
}

impl Rule {
    /// Create a new rule
    pub fn new<F>(filter: Filter, replacement: F) -> Self
    where
        F: Fn(&Element, &str, ExportFormat) -> String + Send + Sync + 'static,
    {
        Self {
            filter,
            replacement: Box::new(replacement),
        }
    }

    /// Create a rule that matches a single element type
    pub fn for_kind<F>(kind: &str, replacement: F) -> Self
    where
        F: Fn(&Element, &str, ExportFormat) -> String + Send + Sync + 'static,
    {
        Self::new(Filter::kind(kind), replacement)
    }

    /// Create a rule that matches multiple element types
    pub fn for_kinds<F>(kinds: &[&str], replacement: F) -> Self
    where
        F: Fn(&Element, &str, ExportFormat) -> String + Send + Sync + 'static,
    {
        Self::new(Filter::kinds(kinds), replacement)
    }

    /// Apply this rule's replacement
    pub fn replace(&self, element: &Element, children: &str, format: ExportFormat) -> String {
        (self.replacement)(element, children, format)
    }
}
