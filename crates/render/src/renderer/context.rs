//! Traversal state of the document renderer.

use crate::node::Html;
use crate::registry::{Components, Element, RenderContext, components};
use folio_core::{Slugger, TocEntry};

/// HTML elements that never have a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "source", "wbr"];

/// Rendering context for one document walk.
pub struct Context<'a> {
    page: RenderContext<'a>,
    components: &'static Components,
    slugger: Slugger,
    headings: Vec<TocEntry>,
}

impl<'a> Context<'a> {
    /// Creates a context using the site's component table.
    pub fn new(page: RenderContext<'a>) -> Self {
        Self {
            page,
            components: components(),
            slugger: Slugger::new(),
            headings: Vec::new(),
        }
    }

    /// Records a heading and returns its unique slug.
    pub fn add_heading(&mut self, text: &str, depth: u8) -> String {
        let slug = self.slugger.next_slug(text);
        self.headings.push(TocEntry::new(text, &slug, depth));
        slug
    }

    /// Renders `element` through its substitute renderer, or with the default markup.
    pub fn emit(&self, element: Element) -> Html {
        match self.components.render(&element, &self.page) {
            Some(html) => html,
            None => default_element(&element),
        }
    }

    /// Returns the collected headings.
    pub fn finish(self) -> Vec<TocEntry> {
        self.headings
    }
}

/// Default markup for tags without a substitute.
///
/// HTML elements are written as-is. Unknown components have no markup of
/// their own, so only their children are kept.
pub fn default_element(element: &Element) -> Html {
    if element.is_component() {
        log::warn!(
            "No renderer for component <{}>, rendering children only",
            element.tag
        );
        return element.children.clone();
    }

    let mut html = Html::raw("<");
    html.push_raw(&element.tag);
    for (name, value) in &element.attributes {
        let name = if name == "className" { "class" } else { name };
        match (value.is_expression(), value.as_bool()) {
            (true, Some(true)) => {
                html.push_raw(" ");
                html.push_raw(name);
            }
            (true, Some(false)) => {}
            _ => html.push_attr(name, value.value()),
        }
    }
    html.push_raw(">");

    if VOID_ELEMENTS.contains(&element.tag.as_str()) {
        return html;
    }
    html.append(&element.children);
    html.push_raw("</");
    html.push_raw(&element.tag);
    html.push_raw(">");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::AttrValue;

    #[test]
    fn test_default_element_attributes() {
        let element = Element::new("input")
            .with_attr("type", "checkbox")
            .with_attr_value("disabled", AttrValue::expression("true"))
            .with_attr_value("checked", AttrValue::expression("false"));
        insta::assert_snapshot!(
            default_element(&element).as_str(),
            @r#"<input disabled type="checkbox">"#
        );
    }

    #[test]
    fn test_default_element_class_name() {
        let element = Element::new("div")
            .with_attr("className", "note")
            .with_children(Html::text("a < b"));
        assert_eq!(
            default_element(&element).as_str(),
            r#"<div class="note">a &lt; b</div>"#
        );
    }

    #[test]
    fn test_unknown_component_keeps_children() {
        let element = Element::new("Callout").with_children(Html::raw("<p>hi</p>"));
        assert_eq!(default_element(&element).as_str(), "<p>hi</p>");
    }
}
