//! Rule system for customizing element rendering.

mod rule;

pub use rule::{Filter, ReplacementFn, Rule};

use indexmap::IndexMap;
use internote_core::{Context, Element, Mark, Renderer};

use crate::service::ExportFormat;

/// Collection of rules for rendering
pub struct Rules {
    /// Custom rules added by the user, checked in insertion order
    custom_rules: IndexMap<String, Rule>,
    /// Remove rules (render nothing)
    remove_rules: Vec<Filter>,
}

impl Rules {
    pub fn new() -> Self {
        Self {
            custom_rules: IndexMap::new(),
            remove_rules: Vec::new(),
        }
    }

    /// Add a custom rule. A rule added under an existing key replaces it in place.
    pub fn add(&mut self, key: &str, rule: Rule) {
        self.custom_rules.insert(key.to_string(), rule);
    }

    /// Add a remove filter
    pub fn remove(&mut self, filter: Filter) {
        self.remove_rules.push(filter);
    }

    /// Find the first custom rule for an element
    pub fn for_element(&self, element: &Element) -> Option<&Rule> {
        self.custom_rules
            .values()
            .find(|rule| rule.filter.matches(element))
    }

    /// Check if an element should be removed.
    /// A matching custom rule takes precedence over removal.
    pub fn should_remove(&self, element: &Element) -> bool {
        if self.for_element(element).is_some() {
            return false;
        }
        self.remove_rules.iter().any(|filter| filter.matches(element))
    }

    pub fn is_empty(&self) -> bool {
        self.custom_rules.is_empty() && self.remove_rules.is_empty()
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}

/// Renderer that consults custom rules before a built-in render table
pub(crate) struct RuleRenderer<'a> {
    base: &'a dyn Renderer,
    rules: &'a Rules,
    format: ExportFormat,
}

impl<'a> RuleRenderer<'a> {
    pub(crate) fn new(base: &'a dyn Renderer, rules: &'a Rules, format: ExportFormat) -> Self {
        Self {
            base,
            rules,
            format,
        }
    }
}

impl Renderer for RuleRenderer<'_> {
    fn escape_text(&self, text: &str) -> String {
        self.base.escape_text(text)
    }

    fn wrap_mark(&self, mark: Mark, inner: String) -> String {
        self.base.wrap_mark(mark, inner)
    }

    fn render_element(&self, element: &Element, ctx: &Context<'_>, children: String) -> String {
        match self.rules.for_element(element) {
            Some(rule) => rule.replace(element, &children, self.format),
            None => self.base.render_element(element, ctx, children),
        }
    }

    fn block_separator(&self) -> &str {
        self.base.block_separator()
    }

    fn skip_element(&self, element: &Element) -> bool {
        let skip = self.rules.should_remove(element);
        if skip {
            tracing::trace!(element_type = element.type_name(), "removing element");
        }
        skip
    }
}
