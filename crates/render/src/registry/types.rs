//! Registry type definitions: elements handed to renderers and the component table.

use crate::node::Html;
use folio_core::{SiteMetadata, TocEntry};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// An attribute value - either a literal string or a JS expression.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum AttrValue {
    /// A literal string value (from `key="value"`).
    Literal(String),
    /// A JS expression (from `key={expression}`), kept as source text.
    Expression(String),
}

impl AttrValue {
    /// Creates a literal attribute value.
    pub fn literal(value: impl Into<String>) -> Self {
        AttrValue::Literal(value.into())
    }

    /// Creates an expression attribute value.
    pub fn expression(value: impl Into<String>) -> Self {
        AttrValue::Expression(value.into())
    }

    /// Returns the raw value regardless of type.
    pub fn value(&self) -> &str {
        match self {
            AttrValue::Literal(value) | AttrValue::Expression(value) => value,
        }
    }

    /// Returns true if this is an expression.
    pub fn is_expression(&self) -> bool {
        matches!(self, AttrValue::Expression(_))
    }

    /// Interprets the value as a boolean flag (`flag`, `flag={true}`, `flag="true"`).
    pub fn as_bool(&self) -> Option<bool> {
        match self.value().trim() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }

    /// Interprets the value as a small integer (`toHeading={3}`).
    pub fn as_u8(&self) -> Option<u8> {
        self.value().trim().parse().ok()
    }

    /// Interprets the value as a list of strings.
    ///
    /// Literals are a single item; expressions may be a JSON string or array.
    pub fn as_string_list(&self) -> Option<Vec<String>> {
        match self {
            AttrValue::Literal(value) => Some(vec![value.clone()]),
            AttrValue::Expression(source) => {
                let source = source.trim();
                if source.starts_with('[') {
                    serde_json::from_str(source).ok()
                } else {
                    serde_json::from_str::<String>(source).ok().map(|s| vec![s])
                }
            }
        }
    }
}

/// A markup node handed to a renderer: tag name, attributes and rendered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag or component name (`a`, `pre`, `TOCInline`, ...).
    pub tag: String,
    /// Attributes, in name order.
    pub attributes: BTreeMap<String, AttrValue>,
    /// Children, already rendered.
    pub children: Html,
}

impl Element {
    /// Creates an element without attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            children: Html::default(),
        }
    }

    /// Adds a literal attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .insert(name.into(), AttrValue::Literal(value.into()));
        self
    }

    /// Adds an attribute with an explicit value kind.
    pub fn with_attr_value(mut self, name: impl Into<String>, value: AttrValue) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Sets the rendered children.
    pub fn with_children(mut self, children: Html) -> Self {
        self.children = children;
        self
    }

    /// Looks up an attribute.
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// Looks up an attribute's raw value.
    pub fn attr_str(&self, name: &str) -> Option<&str> {
        self.attr(name).map(AttrValue::value)
    }

    /// Returns true if the tag names a component (`Image`) rather than an HTML element (`img`).
    pub fn is_component(&self) -> bool {
        self.tag.chars().next().is_some_and(|c| c.is_ascii_uppercase())
    }
}

/// Per-page data available to every renderer.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Site-wide configuration.
    pub site: &'a SiteMetadata,
    /// Table of contents of the page being rendered.
    pub toc: &'a [TocEntry],
}

impl<'a> RenderContext<'a> {
    /// Creates a context for one page.
    pub fn new(site: &'a SiteMetadata, toc: &'a [TocEntry]) -> Self {
        Self { site, toc }
    }
}

/// A render function substituted for a tag's default markup.
pub type Renderer = fn(&Element, &RenderContext<'_>) -> Html;

/// Read-only mapping from tag name to renderer.
///
/// Built once by [`crate::registry::components`]; there is no way to add or
/// remove entries afterwards.
pub struct Components {
    entries: HashMap<&'static str, Renderer>,
}

impl Components {
    pub(crate) fn from_entries(
        entries: impl IntoIterator<Item = (&'static str, Renderer)>,
    ) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Returns the renderer registered for `tag`, if any.
    pub fn get(&self, tag: &str) -> Option<Renderer> {
        self.entries.get(tag).copied()
    }

    /// Check if a tag has a substitute renderer.
    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    /// Registered tag names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered tags.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders `element` with its substitute, or returns `None` so the caller
    /// can fall back to its default markup.
    pub fn render(&self, element: &Element, ctx: &RenderContext<'_>) -> Option<Html> {
        self.get(&element.tag).map(|render| render(element, ctx))
    }
}

impl std::fmt::Debug for Components {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Components")
            .field("tags", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_value_conversions() {
        assert_eq!(AttrValue::expression("true").as_bool(), Some(true));
        assert_eq!(AttrValue::literal("false").as_bool(), Some(false));
        assert_eq!(AttrValue::literal("yes").as_bool(), None);
        assert_eq!(AttrValue::expression(" 3 ").as_u8(), Some(3));
        assert_eq!(AttrValue::expression("props.depth").as_u8(), None);
    }

    #[test]
    fn test_attr_value_string_list() {
        assert_eq!(
            AttrValue::literal("Intro").as_string_list(),
            Some(vec!["Intro".to_string()])
        );
        assert_eq!(
            AttrValue::expression(r#"["Intro", "Outro"]"#).as_string_list(),
            Some(vec!["Intro".to_string(), "Outro".to_string()])
        );
        assert_eq!(
            AttrValue::expression(r#""Intro""#).as_string_list(),
            Some(vec!["Intro".to_string()])
        );
        assert_eq!(AttrValue::expression("someVar").as_string_list(), None);
    }

    #[test]
    fn test_element_builder() {
        let element = Element::new("Image")
            .with_attr("src", "/a.png")
            .with_attr_value("width", AttrValue::expression("38"));
        assert!(element.is_component());
        assert_eq!(element.attr_str("src"), Some("/a.png"));
        assert!(element.attr("width").unwrap().is_expression());
        assert!(!Element::new("img").is_component());
    }
}
