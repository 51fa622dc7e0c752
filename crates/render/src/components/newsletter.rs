use crate::node::Html;
use crate::registry::{Element, RenderContext};

/// Heading shown when the tag has no `title`.
pub const DEFAULT_TITLE: &str = "Subscribe to the newsletter";

/// Renders the newsletter subscription box.
///
/// The form posts to `apiUrl` when given, otherwise to the site's configured
/// newsletter endpoint.
pub fn render(element: &Element, ctx: &RenderContext<'_>) -> Html {
    let title = element.attr_str("title").unwrap_or(DEFAULT_TITLE);
    let action = element
        .attr_str("apiUrl")
        .unwrap_or_else(|| ctx.site.newsletter_api_url());

    let mut html = Html::raw(r#"<div class="flex items-center justify-center">"#);
    html.push_raw(r#"<div class="bg-gray-100 p-6 dark:bg-gray-800 sm:px-14 sm:py-8">"#);
    html.push_raw(r#"<div class="pb-1 text-lg font-semibold text-gray-800 dark:text-gray-100">"#);
    html.push_text(title);
    html.push_raw("</div>");

    html.push_raw(r#"<form class="flex flex-col sm:flex-row" method="post""#);
    html.push_attr("action", action);
    html.push_raw(">");
    html.push_raw(concat!(
        r#"<div><label for="email-input"><span class="sr-only">Email address</span>"#,
        r#"<input autocomplete="email" class="w-72 rounded-md px-4 focus:border-transparent focus:outline-none focus:ring-2 focus:ring-primary-600 dark:bg-black""#,
        r#" id="email-input" name="email" placeholder="Enter your email" required type="email">"#,
        r#"</label></div>"#,
        r#"<div class="mt-2 flex w-full rounded-md shadow-sm sm:ml-3 sm:mt-0">"#,
        r#"<button class="w-full rounded-md bg-primary-500 px-4 py-2 font-medium text-white sm:py-0" type="submit">Sign up</button>"#,
        r#"</div>"#,
    ));
    html.push_raw("</form></div></div>");
    html
}
