use crate::node::Html;
use crate::registry::{Element, RenderContext};

/// Renders a hyperlink.
///
/// Site-internal paths (`/...`) and in-page anchors (`#...`) stay in the
/// current tab; every other target opens in a new one.
pub fn render(element: &Element, _ctx: &RenderContext<'_>) -> Html {
    let href = element.attr_str("href");
    let mut html = Html::raw(r#"<a class="break-words""#);

    match href {
        Some(href) if href.starts_with('/') || href.starts_with('#') => {
            html.push_attr("href", href);
        }
        Some(href) => {
            html.push_raw(r#" target="_blank" rel="noopener noreferrer""#);
            html.push_attr("href", href);
        }
        None => {}
    }
    for name in ["title", "id", "aria-label"] {
        if let Some(value) = element.attr_str(name) {
            html.push_attr(name, value);
        }
    }

    html.push_raw(">");
    html.append(&element.children);
    html.push_raw("</a>");
    html
}
