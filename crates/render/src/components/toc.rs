use crate::node::Html;
use crate::registry::{Element, RenderContext};
use folio_core::TocEntry;

/// Options of the inline table of contents, read from `<TOCInline>` attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocOptions {
    /// Shallowest heading depth to include.
    pub from_heading: u8,
    /// Deepest heading depth to include.
    pub to_heading: u8,
    /// Heading texts to leave out (case-insensitive).
    pub exclude: Vec<String>,
    /// Wrap the list in a `<details>` disclosure.
    pub as_disclosure: bool,
    /// Start the disclosure closed.
    pub collapse: bool,
    /// Class of every `<ul>`.
    pub ul_class: Option<String>,
    /// Class of every `<li>`.
    pub li_class: Option<String>,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            from_heading: 1,
            to_heading: 6,
            exclude: Vec::new(),
            as_disclosure: false,
            collapse: false,
            ul_class: None,
            li_class: None,
        }
    }
}

impl TocOptions {
    /// Reads options from element attributes, keeping defaults for anything
    /// missing or malformed.
    pub fn from_element(element: &Element) -> Self {
        let mut options = Self::default();

        if let Some(value) = element.attr("fromHeading") {
            match value.as_u8() {
                Some(depth) => options.from_heading = depth,
                None => log::warn!("TOCInline: ignoring fromHeading={}", value.value()),
            }
        }
        if let Some(value) = element.attr("toHeading") {
            match value.as_u8() {
                Some(depth) => options.to_heading = depth,
                None => log::warn!("TOCInline: ignoring toHeading={}", value.value()),
            }
        }
        if let Some(value) = element.attr("exclude") {
            match value.as_string_list() {
                Some(list) => options.exclude = list,
                None => log::warn!("TOCInline: ignoring exclude={}", value.value()),
            }
        }
        options.as_disclosure = element
            .attr("asDisclosure")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        options.collapse = element
            .attr("collapse")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        options.ul_class = element.attr_str("ulClassName").map(str::to_string);
        options.li_class = element.attr_str("liClassName").map(str::to_string);
        options
    }

    fn includes(&self, entry: &TocEntry) -> bool {
        if entry.depth < self.from_heading || entry.depth > self.to_heading {
            return false;
        }
        let text = entry.text.to_lowercase();
        !self
            .exclude
            .iter()
            .any(|excluded| excluded.to_lowercase() == text)
    }
}

/// Renders `<TOCInline>` from the page's table of contents.
pub fn render(element: &Element, ctx: &RenderContext<'_>) -> Html {
    render_toc(ctx.toc, &TocOptions::from_element(element))
}

/// Renders table of contents entries as nested lists.
///
/// Each entry nests under the closest preceding entry that is shallower.
/// Returns empty markup when no entry survives filtering.
pub fn render_toc(entries: &[TocEntry], options: &TocOptions) -> Html {
    let items: Vec<&TocEntry> = entries.iter().filter(|e| options.includes(e)).collect();
    let mut html = Html::default();
    if items.is_empty() {
        return html;
    }

    if options.as_disclosure {
        html.push_raw(if options.collapse {
            "<details>"
        } else {
            "<details open>"
        });
        html.push_raw(
            r#"<summary class="ml-6 pb-2 pt-2 text-xl font-bold">Table of Contents</summary><div class="ml-6">"#,
        );
        write_list(&items, options, &mut html);
        html.push_raw("</div></details>");
    } else {
        write_list(&items, options, &mut html);
    }
    html
}

fn write_list(items: &[&TocEntry], options: &TocOptions, html: &mut Html) {
    if items.is_empty() {
        return;
    }

    html.push_raw("<ul");
    if let Some(class) = &options.ul_class {
        html.push_attr("class", class);
    }
    html.push_raw(">");

    let mut i = 0;
    while i < items.len() {
        let item = items[i];
        let mut end = i + 1;
        while end < items.len() && items[end].depth > item.depth {
            end += 1;
        }

        html.push_raw("<li");
        if let Some(class) = &options.li_class {
            html.push_attr("class", class);
        }
        html.push_raw("><a");
        html.push_attr("href", &item.anchor);
        html.push_raw(">");
        html.push_text(&item.text);
        html.push_raw("</a>");
        write_list(&items[i + 1..end], options, html);
        html.push_raw("</li>");

        i = end;
    }

    html.push_raw("</ul>");
}
