use crate::node::Html;
use crate::registry::{Element, RenderContext};

/// Wraps a table in a horizontally scrollable container.
pub fn render(element: &Element, _ctx: &RenderContext<'_>) -> Html {
    let mut html = Html::raw(r#"<div class="w-full overflow-x-auto"><table>"#);
    html.append(&element.children);
    html.push_raw("</table></div>");
    html
}
