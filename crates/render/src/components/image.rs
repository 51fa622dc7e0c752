use crate::node::Html;
use crate::registry::{Element, RenderContext};
use folio_core::SiteMetadata;

/// Renders `<Image>` as a lazily loaded `<img>`.
///
/// Root-relative sources get the site's base path prepended.
pub fn render(element: &Element, ctx: &RenderContext<'_>) -> Html {
    let src = site_src(element.attr_str("src").unwrap_or_default(), ctx.site);
    img_tag(element, &src)
}

/// Resolves an image source against the site's base path.
///
/// Only root-relative paths are prefixed; absolute and protocol-relative
/// (`//host/...`) URLs are returned unchanged.
pub fn site_src(src: &str, site: &SiteMetadata) -> String {
    let root_relative = src.starts_with('/') && !src.starts_with("//");
    if root_relative && !site.base_path.is_empty() {
        format!("{}{}", site.base_path.trim_end_matches('/'), src)
    } else {
        src.to_string()
    }
}

/// Writes the `<img>` markup for an already resolved `src`.
pub(crate) fn img_tag(element: &Element, src: &str) -> Html {
    let mut html = Html::raw("<img");
    html.push_attr("src", src);
    html.push_attr("alt", element.attr_str("alt").unwrap_or_default());
    for name in ["width", "height", "title"] {
        if let Some(value) = element.attr_str(name) {
            html.push_attr(name, value);
        }
    }
    if let Some(class) = element.attr_str("className").or(element.attr_str("class")) {
        html.push_attr("class", class);
    }
    html.push_raw(r#" loading="lazy" decoding="async">"#);
    html
}
