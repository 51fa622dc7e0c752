use folio_core::{AdjacentLink, AuthorRecord, ContentRecord, FormatError, SiteMetadata, TocEntry};
use folio_render::layout::{NavDirection, PostInput, bind_post};
use folio_render::registry::RenderContext;
use folio_render::{Html, Renderable, render_document};

fn record() -> ContentRecord {
    serde_json::from_str(
        r##"{
            "filePath": "data/blog/my-post.mdx",
            "path": "blog/my-post",
            "slug": "my-post",
            "date": "2024-03-05",
            "title": "My Post",
            "tags": ["a", "b", "c"],
            "toc": [{"value": "Intro", "url": "#intro", "depth": 2}]
        }"##,
    )
    .expect("valid content record")
}

#[test]
fn binds_the_full_view() {
    let record = record();
    let authors = vec![AuthorRecord {
        github: Some("https://github.com/alice".into()),
        ..AuthorRecord::named("Alice")
    }];
    let next = AdjacentLink::new("p2", "T2");
    let input = PostInput::new(&record, Html::raw("<p>hello</p>"))
        .with_authors(&authors)
        .with_adjacent(None, Some(&next));

    let view = bind_post(input, &SiteMetadata::default()).expect("bind should succeed");

    let tags: Vec<_> = view
        .header
        .tags
        .as_ref()
        .expect("tags present")
        .iter()
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(tags, ["a", "b", "c"]);

    assert_eq!(view.header.date.display, "Tuesday, March 5, 2024");
    assert_eq!(view.footer.back_link.href, "/blog");

    assert_eq!(view.footer.navigation.len(), 1);
    let link = &view.footer.navigation[0];
    assert_eq!(link.direction, NavDirection::Next);
    assert_eq!(link.href, "/p2");
    assert_eq!(link.subtitle, "T2");

    let alice = &view.header.authors[0];
    assert_eq!(alice.github.as_ref().map(|g| g.text.as_str()), Some("@alice"));
    assert!(alice.avatar.is_none());

    assert_eq!(view.toc, vec![TocEntry::new("Intro", "intro", 2)]);
}

#[test]
fn malformed_date_fails_the_page() {
    let mut record = record();
    record.date = "not-a-date".into();
    let err = bind_post(PostInput::new(&record, Html::default()), &SiteMetadata::default())
        .expect_err("bind should fail");
    assert!(matches!(err, FormatError::InvalidDate { ref input, .. } if input == "not-a-date"));
    assert!(err.to_string().contains("not-a-date"));
}

#[test]
fn view_serializes_without_body() {
    let record = record();
    let view = bind_post(
        PostInput::new(&record, Html::raw("<p>secret</p>")),
        &SiteMetadata::default(),
    )
    .unwrap();
    let json = serde_json::to_value(&view).unwrap();

    assert!(json.get("body").is_none());
    assert_eq!(json["header"]["title"], "My Post");
    assert_eq!(json["footer"]["backLink"]["href"], "/blog");
    assert_eq!(json["footer"]["navigation"], serde_json::json!([]));
    assert!(!json.to_string().contains("secret"));
}

/// A body from a different rendering technology still composes.
struct Shouting(&'static str);

impl Renderable for Shouting {
    fn materialize(&self, out: &mut String) {
        out.push_str("<p>");
        out.push_str(&self.0.to_uppercase());
        out.push_str("</p>");
    }
}

#[test]
fn body_is_opaque() {
    let record = record();
    let view = bind_post(PostInput::new(&record, Shouting("quiet")), &SiteMetadata::default())
        .unwrap();
    assert!(view.to_html().as_str().contains("<p>QUIET</p>"));
}

#[test]
fn rendered_document_feeds_the_layout() {
    let record = record();
    let site = SiteMetadata::default();
    let tree = markdown::to_mdast("## Intro\n\nSee [home](/).", &markdown::ParseOptions::default())
        .unwrap();
    let doc = render_document(&tree, &RenderContext::new(&site, &record.toc));
    assert_eq!(doc.headings, record.toc);

    let page = bind_post(PostInput::new(&record, doc.body), &site)
        .unwrap()
        .to_html();
    assert!(page.as_str().contains(r#"<h2 id="intro">Intro</h2>"#));
    assert!(page.as_str().contains(r#"<a class="break-words" href="/">home</a>"#));
}
