use folio_core::{SiteMetadata, TocEntry};
use folio_render::registry::RenderContext;
use folio_render::renderer::render_document;

fn parse(source: &str) -> markdown::mdast::Node {
    let options = markdown::ParseOptions {
        constructs: markdown::Constructs {
            code_indented: false,
            mdx_jsx_flow: true,
            mdx_jsx_text: true,
            html_flow: false,
            html_text: false,
            frontmatter: true,
            gfm_autolink_literal: true,
            gfm_footnote_definition: true,
            gfm_label_start_footnote: true,
            gfm_strikethrough: true,
            gfm_table: true,
            gfm_task_list_item: true,
            ..markdown::Constructs::default()
        },
        ..markdown::ParseOptions::default()
    };
    markdown::to_mdast(source, &options).expect("parse should succeed")
}

fn render(source: &str, toc: &[TocEntry]) -> (String, Vec<TocEntry>) {
    let site = SiteMetadata::default();
    let doc = render_document(&parse(source), &RenderContext::new(&site, toc));
    (doc.body.into_string(), doc.headings)
}

#[test]
fn links_use_the_substituted_renderer() {
    let (html, _) = render(
        "Read the [guide](/guide) or [MDN](https://developer.mozilla.org).",
        &[],
    );
    assert_eq!(
        html,
        concat!(
            r#"<p>Read the <a class="break-words" href="/guide">guide</a> or "#,
            r#"<a class="break-words" target="_blank" rel="noopener noreferrer" href="https://developer.mozilla.org">MDN</a>.</p>"#
        )
    );
}

#[test]
fn headings_get_ids_and_are_collected() {
    let (html, headings) = render("# Getting Started\n\n## Install\n\n## Install\n", &[]);
    assert!(html.starts_with(r#"<h1 id="getting-started">Getting Started</h1>"#));
    assert!(html.contains(r#"<h2 id="install-1">Install</h2>"#));
    assert_eq!(
        headings,
        vec![
            TocEntry::new("Getting Started", "getting-started", 1),
            TocEntry::new("Install", "install", 2),
            TocEntry::new("Install", "install-1", 2),
        ]
    );
}

#[test]
fn code_blocks_are_wrapped() {
    let (html, _) = render("```rust\nfn main() {}\n```\n", &[]);
    assert!(html.starts_with(r#"<div class="relative"><button aria-label="Copy code""#));
    assert!(html.ends_with(
        r#"<pre><code class="language-rust">fn main() {}</code></pre></div>"#
    ));
}

#[test]
fn tables_are_wrapped() {
    let (html, _) = render("| a | b |\n|---|:-:|\n| 1 | 2 |\n", &[]);
    assert!(html.starts_with(
        r#"<div class="w-full overflow-x-auto"><table><thead><tr><th>a</th>"#
    ));
    assert!(html.contains(r#"<th align="center">b</th>"#));
    assert!(html.contains(r#"<tbody><tr><td>1</td><td align="center">2</td></tr></tbody>"#));
    assert!(html.ends_with("</table></div>"));
}

#[test]
fn toc_inline_uses_page_toc() {
    let toc = vec![
        TocEntry::new("Getting Started", "getting-started", 1),
        TocEntry::new("Install", "install", 2),
        TocEntry::new("Details", "details", 3),
    ];
    let (html, _) = render("<TOCInline toc={props.toc} toHeading={2} />\n", &toc);
    insta::assert_snapshot!(
        html,
        @r##"<ul><li><a href="#getting-started">Getting Started</a><ul><li><a href="#install">Install</a></li></ul></li></ul>"##
    );
}

#[test]
fn image_and_newsletter_components() {
    let (html, _) = render(
        "<Image src=\"/static/cat.png\" alt=\"Cat\" width={100} height={80} />\n\n<BlogNewsletterForm title=\"Join\" />\n",
        &[],
    );
    assert!(html.contains(
        r#"<img src="/static/cat.png" alt="Cat" width="100" height="80" loading="lazy" decoding="async">"#
    ));
    assert!(html.contains(">Join</div>"));
    assert!(html.contains(r#"action="/api/newsletter""#));
}

#[test]
fn unregistered_tags_use_default_markup() {
    let (html, _) = render("![alt text](/x.png)\n\n> quoted\n\n- one\n- two\n", &[]);
    assert!(html.contains(r#"<img alt="alt text" src="/x.png">"#));
    assert!(!html.contains("loading=\"lazy\""));
    assert!(html.contains("<blockquote><p>quoted</p></blockquote>"));
    assert!(html.contains("<ul><li>one</li><li>two</li></ul>"));
}

#[test]
fn unknown_components_keep_their_children() {
    let (html, _) = render("<Callout>\n\nKept **text**\n\n</Callout>\n", &[]);
    assert_eq!(html, "<p>Kept <strong>text</strong></p>");
}

#[test]
fn text_is_escaped() {
    let (html, _) = render("Tom & Jerry `a<b>`\n", &[]);
    assert_eq!(html, "<p>Tom &amp; Jerry <code>a&lt;b&gt;</code></p>");
}
