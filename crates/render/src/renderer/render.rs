//! Rendering functions for mdast nodes.

use super::context::Context;
use crate::node::Html;
use crate::registry::{AttrValue, Element};
use markdown::mdast::{AlignKind, AttributeContent, AttributeValue, Node};

/// Extracts plain text from a list of AST nodes (for heading text).
pub fn extract_text_from_nodes(nodes: &[Node]) -> String {
    let mut text = String::new();
    for node in nodes {
        extract_text_from_node(node, &mut text);
    }
    text.trim().to_string()
}

fn extract_text_from_node(node: &Node, buffer: &mut String) {
    match node {
        Node::Text(t) => buffer.push_str(&t.value),
        Node::InlineCode(code) => buffer.push_str(&code.value),
        Node::Strong(_) | Node::Emphasis(_) | Node::Link(_) | Node::Delete(_) => {
            for child in node.children().into_iter().flatten() {
                extract_text_from_node(child, buffer);
            }
        }
        _ => {}
    }
}

/// Renders a sequence of sibling nodes.
pub fn render_children(children: &[Node], ctx: &mut Context<'_>) -> Html {
    let mut html = Html::default();
    for child in children {
        html.append(&render_node(child, ctx));
    }
    html
}

fn element(tag: &str, children: &[Node], ctx: &mut Context<'_>) -> Html {
    let children = render_children(children, ctx);
    ctx.emit(Element::new(tag).with_children(children))
}

fn render_heading(heading: &markdown::mdast::Heading, ctx: &mut Context<'_>) -> Html {
    let text = extract_text_from_nodes(&heading.children);
    let slug = ctx.add_heading(&text, heading.depth);
    let children = render_children(&heading.children, ctx);
    ctx.emit(
        Element::new(format!("h{}", heading.depth))
            .with_attr("id", slug)
            .with_children(children),
    )
}

/// Code blocks become `pre > code`; the `pre` goes through the component table.
fn render_code(code: &markdown::mdast::Code, ctx: &mut Context<'_>) -> Html {
    let mut inner = Element::new("code").with_children(Html::text(&code.value));
    if let Some(lang) = &code.lang {
        inner = inner.with_attr("className", format!("language-{}", lang));
    }
    let inner = ctx.emit(inner);

    let mut pre = Element::new("pre").with_children(inner);
    if let Some(meta) = &code.meta {
        pre = pre.with_attr("data-meta", meta.clone());
    }
    ctx.emit(pre)
}

fn render_link(link: &markdown::mdast::Link, ctx: &mut Context<'_>) -> Html {
    let children = render_children(&link.children, ctx);
    let mut element = Element::new("a")
        .with_attr("href", link.url.clone())
        .with_children(children);
    if let Some(title) = &link.title {
        element = element.with_attr("title", title.clone());
    }
    ctx.emit(element)
}

fn render_image(image: &markdown::mdast::Image, ctx: &mut Context<'_>) -> Html {
    let mut element = Element::new("img")
        .with_attr("src", image.url.clone())
        .with_attr("alt", image.alt.clone());
    if let Some(title) = &image.title {
        element = element.with_attr("title", title.clone());
    }
    ctx.emit(element)
}

fn render_list(list: &markdown::mdast::List, ctx: &mut Context<'_>) -> Html {
    let mut children = Html::default();
    for child in &list.children {
        match child {
            Node::ListItem(item) => children.append(&render_list_item(item, list.spread, ctx)),
            other => children.append(&render_node(other, ctx)),
        }
    }

    let mut element = Element::new(if list.ordered { "ol" } else { "ul" });
    if let Some(start) = list.start.filter(|&start| list.ordered && start != 1) {
        element = element.with_attr("start", start.to_string());
    }
    ctx.emit(element.with_children(children))
}

/// Tight lists drop the `<p>` around their items' paragraphs.
fn render_list_item(
    item: &markdown::mdast::ListItem,
    spread: bool,
    ctx: &mut Context<'_>,
) -> Html {
    let mut children = Html::default();
    if let Some(checked) = item.checked {
        let checkbox = Element::new("input")
            .with_attr("type", "checkbox")
            .with_attr_value("disabled", AttrValue::expression("true"))
            .with_attr_value("checked", AttrValue::expression(checked.to_string()));
        children.append(&ctx.emit(checkbox));
        children.push_raw(" ");
    }
    for child in &item.children {
        match child {
            Node::Paragraph(para) if !spread => {
                children.append(&render_children(&para.children, ctx));
            }
            other => children.append(&render_node(other, ctx)),
        }
    }

    let mut element = Element::new("li").with_children(children);
    if item.checked.is_some() {
        element = element.with_attr("className", "task-list-item");
    }
    ctx.emit(element)
}

fn render_table(table: &markdown::mdast::Table, ctx: &mut Context<'_>) -> Html {
    let mut head = Html::default();
    let mut body = Html::default();

    for (index, row) in table.children.iter().enumerate() {
        let Node::TableRow(row) = row else {
            continue;
        };
        let is_header = index == 0;
        let mut cells = Html::default();
        for (column, cell) in row.children.iter().enumerate() {
            let Node::TableCell(cell) = cell else {
                continue;
            };
            let content = render_children(&cell.children, ctx);
            let mut element =
                Element::new(if is_header { "th" } else { "td" }).with_children(content);
            let align = match table.align.get(column) {
                Some(AlignKind::Left) => Some("left"),
                Some(AlignKind::Right) => Some("right"),
                Some(AlignKind::Center) => Some("center"),
                Some(AlignKind::None) | None => None,
            };
            if let Some(align) = align {
                element = element.with_attr("align", align);
            }
            cells.append(&ctx.emit(element));
        }

        let row = ctx.emit(Element::new("tr").with_children(cells));
        if is_header {
            head.append(&row);
        } else {
            body.append(&row);
        }
    }

    let mut children = ctx.emit(Element::new("thead").with_children(head));
    if !body.is_empty() {
        children.append(&ctx.emit(Element::new("tbody").with_children(body)));
    }
    ctx.emit(Element::new("table").with_children(children))
}

/// Renders an MDX JSX element; fragments (`<>...</>`) render their children only.
fn render_jsx(
    name: Option<&str>,
    attributes: &[AttributeContent],
    children: &[Node],
    ctx: &mut Context<'_>,
) -> Html {
    let rendered = render_children(children, ctx);
    let Some(tag) = name else {
        return rendered;
    };

    let mut element = Element::new(tag).with_children(rendered);
    for attr in attributes {
        match attr {
            AttributeContent::Property(prop) => {
                let value = match &prop.value {
                    Some(AttributeValue::Literal(s)) => AttrValue::literal(s.clone()),
                    Some(AttributeValue::Expression(expr)) => {
                        AttrValue::expression(expr.value.clone())
                    }
                    None => AttrValue::expression("true"),
                };
                element = element.with_attr_value(prop.name.clone(), value);
            }
            AttributeContent::Expression(_) => {
                log::warn!("Spread attributes on <{}> are not supported", tag);
            }
        }
    }
    ctx.emit(element)
}

fn render_footnote_reference(
    fnref: &markdown::mdast::FootnoteReference,
    ctx: &mut Context<'_>,
) -> Html {
    let id = folio_core::slugify(&fnref.identifier);
    let label = fnref.label.as_deref().unwrap_or(&fnref.identifier);
    let link = ctx.emit(
        Element::new("a")
            .with_attr("href", format!("#fn-{}", id))
            .with_attr("id", format!("fnref-{}", id))
            .with_children(Html::text(label)),
    );
    ctx.emit(Element::new("sup").with_children(link))
}

fn render_footnote_definition(
    fndef: &markdown::mdast::FootnoteDefinition,
    ctx: &mut Context<'_>,
) -> Html {
    let id = folio_core::slugify(&fndef.identifier);
    let children = render_children(&fndef.children, ctx);
    ctx.emit(
        Element::new("div")
            .with_attr("id", format!("fn-{}", id))
            .with_attr("className", "footnote")
            .with_children(children),
    )
}

/// Recursively renders an AST node.
pub fn render_node(node: &Node, ctx: &mut Context<'_>) -> Html {
    match node {
        Node::Root(root) => render_children(&root.children, ctx),
        Node::Text(text) => Html::text(&text.value),
        Node::Paragraph(para) => element("p", &para.children, ctx),
        Node::Heading(heading) => render_heading(heading, ctx),
        Node::Strong(strong) => element("strong", &strong.children, ctx),
        Node::Emphasis(emphasis) => element("em", &emphasis.children, ctx),
        Node::Delete(delete) => element("del", &delete.children, ctx),
        Node::Blockquote(quote) => element("blockquote", &quote.children, ctx),
        Node::InlineCode(code) => {
            ctx.emit(Element::new("code").with_children(Html::text(&code.value)))
        }
        Node::Code(code) => render_code(code, ctx),
        Node::Link(link) => render_link(link, ctx),
        Node::Image(image) => render_image(image, ctx),
        Node::List(list) => render_list(list, ctx),
        Node::ListItem(item) => render_list_item(item, true, ctx),
        Node::Table(table) => render_table(table, ctx),
        Node::ThematicBreak(_) => ctx.emit(Element::new("hr")),
        Node::Break(_) => ctx.emit(Element::new("br")),
        Node::Html(html) => Html::raw(html.value.clone()),
        Node::MdxJsxFlowElement(elem) => {
            render_jsx(elem.name.as_deref(), &elem.attributes, &elem.children, ctx)
        }
        Node::MdxJsxTextElement(elem) => {
            render_jsx(elem.name.as_deref(), &elem.attributes, &elem.children, ctx)
        }
        Node::FootnoteReference(fnref) => render_footnote_reference(fnref, ctx),
        Node::FootnoteDefinition(fndef) => render_footnote_definition(fndef, ctx),
        Node::Math(math) => ctx.emit(
            Element::new("div")
                .with_attr("className", "math math-display")
                .with_children(Html::text(&math.value)),
        ),
        Node::InlineMath(math) => ctx.emit(
            Element::new("span")
                .with_attr("className", "math math-inline")
                .with_children(Html::text(&math.value)),
        ),
        Node::Yaml(_) | Node::Toml(_) | Node::Definition(_) => Html::default(),
        Node::MdxjsEsm(_) | Node::MdxFlowExpression(_) | Node::MdxTextExpression(_) => {
            log::debug!("Dropping MDX expression/ESM node");
            Html::default()
        }
        other => match other.children() {
            Some(children) => render_children(children, ctx),
            None => {
                log::warn!("Unhandled markdown node type: {:?}", other);
                Html::default()
            }
        },
    }
}
