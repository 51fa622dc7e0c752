use crate::node::Html;
use crate::registry::{Element, RenderContext};

const COPY_BUTTON: &str = concat!(
    r#"<button aria-label="Copy code" type="button" data-copy-code"#,
    r#" class="absolute right-2 top-2 h-8 w-8 rounded border-2 bg-gray-700 p-1 dark:bg-gray-800">"#,
    r#"<span class="sr-only">Copy</span></button>"#,
);

/// Renders a code block inside a positioned container with a copy button.
///
/// The children (usually a single `<code>`) are emitted unchanged.
pub fn render(element: &Element, _ctx: &RenderContext<'_>) -> Html {
    let mut html = Html::raw(r#"<div class="relative">"#);
    html.push_raw(COPY_BUTTON);
    html.push_raw("<pre>");
    html.append(&element.children);
    html.push_raw("</pre></div>");
    html
}
