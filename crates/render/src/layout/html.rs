//! Page markup for a bound post view.

use super::view::{AuthorView, NavLink, PostFooter, PostHeader, PostView};
use crate::components::{TocOptions, render_toc};
use crate::components::image;
use crate::node::{Html, Renderable};
use crate::registry::Element;

const LINK_CLASS: &str = "text-primary-500 hover:text-primary-600 dark:hover:text-primary-400";

impl<B: Renderable> PostView<B> {
    /// Materializes the whole page layout.
    pub fn to_html(&self) -> Html {
        let mut html = Html::raw(r#"<div class="grid grid-cols-5 grid-rows-1 gap-4">"#);

        html.push_raw(r#"<div class="pt-80 max-xl:hidden"><div class="sticky top-14">"#);
        html.push_raw(r#"<p class="pb-4 text-lg">Table of Contents</p>"#);
        html.append(&render_toc(&self.toc, &sidebar_toc_options()));
        html.push_raw("</div></div>");

        html.push_raw(r#"<div class="col-span-5 xl:col-span-3"><article>"#);
        write_header(&self.header, &mut html);
        html.push_raw(
            r#"<div class="pb-8"><div class="prose max-w-none pb-8 pt-10 dark:prose-invert">"#,
        );
        html.append(&self.body);
        html.push_raw("</div></div>");
        write_footer(&self.footer, &mut html);
        html.push_raw("</article></div>");

        html.push_raw(r#"<div class="col-start-5"></div></div>"#);
        html
    }
}

impl<B: Renderable> Renderable for PostView<B> {
    fn materialize(&self, out: &mut String) {
        self.to_html().materialize(out);
    }
}

fn sidebar_toc_options() -> TocOptions {
    TocOptions {
        ul_class: Some("flex flex-col gap-1".to_string()),
        li_class: Some("text-xs text-gray-500 hover:underline max-w-64".to_string()),
        ..TocOptions::default()
    }
}

fn write_header(header: &PostHeader, html: &mut Html) {
    html.push_raw(
        r#"<header class="pt-6 xl:pb-6"><div class="space-y-1 text-center flex flex-col gap-4">"#,
    );
    html.push_raw(r#"<h1 class="text-3xl font-extrabold leading-9 tracking-tight">"#);
    html.push_text(&header.title);
    html.push_raw("</h1>");

    html.push_raw(
        r#"<dl class="space-y-10"><div class="flex flex-row justify-center items-center gap-4">"#,
    );
    html.push_raw(r#"<dt class="sr-only">Published on</dt><dd><time"#);
    html.push_attr("datetime", &header.date.datetime);
    html.push_raw(">");
    html.push_text(&header.date.display);
    html.push_raw("</time></dd>");
    if let Some(tags) = &header.tags {
        html.push_raw(r#"<dt class="sr-only">Tags</dt><dd class="flex flex-wrap">"#);
        for tag in tags {
            html.push_raw(r#"<a class="mr-3 text-sm font-medium uppercase text-primary-500""#);
            html.push_attr("href", &tag.href);
            html.push_raw(">");
            html.push_text(&tag.text);
            html.push_raw("</a>");
        }
        html.push_raw("</dd>");
    }
    html.push_raw("</div></dl>");

    html.push_raw(
        r#"<dl class="flex flex-row items-center justify-center"><dt class="sr-only">Authors</dt><dd><ul class="flex flex-wrap justify-center gap-4">"#,
    );
    for author in &header.authors {
        write_author(author, html);
    }
    html.push_raw("</ul></dd></dl>");
    html.push_raw("</div></header>");
}

fn write_author(author: &AuthorView, html: &mut Html) {
    html.push_raw(r#"<li class="flex items-center space-x-2">"#);
    if let Some(avatar) = &author.avatar {
        let element = Element::new("Image")
            .with_attr("src", avatar)
            .with_attr("width", "38")
            .with_attr("height", "38")
            .with_attr("alt", "avatar")
            .with_attr("className", "h-10 w-10 rounded-full");
        html.append(&image::img_tag(&element, avatar));
    }
    html.push_raw(r#"<dl class="whitespace-nowrap text-sm font-medium leading-5">"#);
    html.push_raw(r#"<dt class="sr-only">Name</dt><dd>"#);
    html.push_text(&author.name);
    html.push_raw("</dd>");
    if let Some(github) = &author.github {
        html.push_raw(r#"<dt class="sr-only">Github</dt><dd><a"#);
        html.push_attr("href", &github.href);
        html.push_attr("class", LINK_CLASS);
        html.push_raw(">");
        html.push_text(&github.text);
        html.push_raw("</a></dd>");
    }
    html.push_raw("</dl></li>");
}

fn write_footer(footer: &PostFooter, html: &mut Html) {
    html.push_raw("<footer>");
    if !footer.navigation.is_empty() {
        html.push_raw(r#"<nav class="grid grid-cols-2 grid-rows-1 gap-2 py-4 xl:py-8">"#);
        for link in &footer.navigation {
            write_nav_link(link, html);
        }
        html.push_raw("</nav>");
    }
    html.push_raw(r#"<div class="pt-4 xl:pt-8"><a"#);
    html.push_attr("href", &footer.back_link.href);
    html.push_attr("class", LINK_CLASS);
    html.push_attr("aria-label", &footer.back_link.label);
    html.push_raw(">&larr; ");
    html.push_text(&footer.back_link.label);
    html.push_raw("</a></div></footer>");
}

fn write_nav_link(link: &NavLink, html: &mut Html) {
    html.push_raw("<a");
    html.push_attr("href", &link.href);
    html.push_raw(
        r#" class="group rounded-md border-solid border-gray-200 border-[1px] p-2"><h2 class="text-xs uppercase tracking-wide text-gray-500">"#,
    );
    html.push_text(&link.title);
    html.push_raw(r#"</h2><p class="text-primary-500">"#);
    html.push_text(&link.subtitle);
    html.push_raw("</p></a>");
}
