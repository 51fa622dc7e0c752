//! Binds a content record and its resolved metadata to a post view.

use super::view::{
    AuthorView, BackLink, DateView, GithubLink, NavDirection, NavLink, PostFooter, PostHeader,
    PostView, TagView,
};
use crate::components::image;
use crate::node::Renderable;
use folio_core::{
    AdjacentLink, AuthorRecord, ContentRecord, FormatError, SiteMetadata, format_post_date,
    slugify,
};

/// Prefix replaced by `@` in GitHub link text.
const GITHUB_PREFIX: &str = "https://github.com/";

/// Text of the link back to the collection.
pub const BACK_LINK_LABEL: &str = "Back to the blog";

/// Everything the layout needs for one post page.
#[derive(Debug, Clone)]
pub struct PostInput<'a, B> {
    /// The article's metadata.
    pub content: &'a ContentRecord,
    /// Resolved authors, in display order.
    pub authors: &'a [AuthorRecord],
    /// Previous article, absent for the first one.
    pub prev: Option<&'a AdjacentLink>,
    /// Next article, absent for the last one.
    pub next: Option<&'a AdjacentLink>,
    /// Pre-rendered body.
    pub body: B,
}

impl<'a, B> PostInput<'a, B> {
    /// Input with no authors and no neighbours.
    pub fn new(content: &'a ContentRecord, body: B) -> Self {
        Self {
            content,
            authors: &[],
            prev: None,
            next: None,
            body,
        }
    }

    /// Sets the authors.
    pub fn with_authors(mut self, authors: &'a [AuthorRecord]) -> Self {
        self.authors = authors;
        self
    }

    /// Sets the neighbours.
    pub fn with_adjacent(
        mut self,
        prev: Option<&'a AdjacentLink>,
        next: Option<&'a AdjacentLink>,
    ) -> Self {
        self.prev = prev;
        self.next = next;
        self
    }
}

/// Builds the structured view of a post page.
///
/// Missing optional data (tags, avatars, GitHub links, neighbours) only
/// leaves the matching element out. An unparseable date is an error.
///
/// # Examples
///
/// ```
/// use folio_core::{AdjacentLink, ContentRecord, SiteMetadata};
/// use folio_render::layout::{PostInput, bind_post};
/// use folio_render::node::Html;
///
/// let content = ContentRecord {
///     path: "blog/my-post".into(),
///     date: "2024-03-05".into(),
///     title: "My Post".into(),
///     ..ContentRecord::default()
/// };
/// let next = AdjacentLink::new("blog/next", "Next one");
/// let input = PostInput::new(&content, Html::raw("<p>body</p>")).with_adjacent(None, Some(&next));
///
/// let view = bind_post(input, &SiteMetadata::default()).unwrap();
/// assert_eq!(view.header.date.display, "Tuesday, March 5, 2024");
/// assert_eq!(view.footer.navigation.len(), 1);
/// assert_eq!(view.footer.back_link.href, "/blog");
/// ```
pub fn bind_post<B: Renderable>(
    input: PostInput<'_, B>,
    site: &SiteMetadata,
) -> Result<PostView<B>, FormatError> {
    let content = input.content;
    log::debug!("Binding post layout for '{}'", content.path);

    let display = format_post_date(&content.date, &site.locale)?;

    let header = PostHeader {
        title: content.title.clone(),
        date: DateView {
            datetime: content.date.clone(),
            display,
        },
        tags: bind_tags(&content.tags),
        authors: input
            .authors
            .iter()
            .map(|author| bind_author(author, site))
            .collect(),
    };

    let navigation = [
        (NavDirection::Previous, input.prev),
        (NavDirection::Next, input.next),
    ]
    .into_iter()
    .filter_map(|(direction, link)| bind_nav_link(direction, link?))
    .collect();

    let collection = content.collection().to_string();
    let footer = PostFooter {
        navigation,
        back_link: BackLink {
            href: format!("/{}", collection),
            collection,
            label: BACK_LINK_LABEL.to_string(),
        },
    };

    Ok(PostView {
        header,
        toc: content.toc.clone(),
        body: input.body,
        footer,
    })
}

fn bind_tags(tags: &[String]) -> Option<Vec<TagView>> {
    if tags.is_empty() {
        return None;
    }
    Some(
        tags.iter()
            .map(|tag| TagView {
                text: tag.clone(),
                href: format!("/tags/{}", slugify(tag)),
            })
            .collect(),
    )
}

fn bind_author(author: &AuthorRecord, site: &SiteMetadata) -> AuthorView {
    AuthorView {
        name: author.name.clone(),
        avatar: author.avatar.as_deref().map(|src| image::site_src(src, site)),
        github: author.github.as_ref().map(|url| GithubLink {
            href: url.clone(),
            text: github_handle(url),
        }),
    }
}

/// Link text for a GitHub profile URL: `https://github.com/alice` -> `@alice`.
///
/// URLs without the usual prefix are shown unchanged.
pub fn github_handle(url: &str) -> String {
    url.replacen(GITHUB_PREFIX, "@", 1)
}

/// A neighbour without a path cannot be linked to and is skipped.
fn bind_nav_link(direction: NavDirection, link: &AdjacentLink) -> Option<NavLink> {
    if link.path.is_empty() {
        return None;
    }
    Some(NavLink {
        direction,
        href: format!("/{}", link.path),
        title: direction.label().to_string(),
        subtitle: link.title.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Html;

    fn content() -> ContentRecord {
        ContentRecord {
            file_path: "blog/my-post.mdx".to_string(),
            path: "blog/my-post".to_string(),
            slug: "my-post".to_string(),
            date: "2024-03-05".to_string(),
            title: "My Post".to_string(),
            tags: Vec::new(),
            toc: Vec::new(),
        }
    }

    fn bind(content: &ContentRecord) -> PostView<Html> {
        bind_post(PostInput::new(content, Html::default()), &SiteMetadata::default()).unwrap()
    }

    #[test]
    fn test_tags_keep_order() {
        let mut record = content();
        record.tags = vec!["c".into(), "a".into(), "b".into()];
        let view = bind(&record);
        let tags: Vec<_> = view
            .header
            .tags
            .unwrap()
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(tags, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_tag_hrefs_are_slugged() {
        let mut record = content();
        record.tags = vec!["Next.js".into(), "Web Dev".into()];
        let tags = bind(&record).header.tags.unwrap();
        assert_eq!(tags[0].href, "/tags/nextjs");
        assert_eq!(tags[1].href, "/tags/web-dev");
    }

    #[test]
    fn test_no_tags_is_none() {
        assert!(bind(&content()).header.tags.is_none());
    }

    #[test]
    fn test_github_handle() {
        assert_eq!(github_handle("https://github.com/alice"), "@alice");
        assert_eq!(github_handle("https://gitlab.com/alice"), "https://gitlab.com/alice");
    }

    #[test]
    fn test_authors() {
        let record = content();
        let authors = vec![
            AuthorRecord {
                github: Some("https://github.com/alice".into()),
                ..AuthorRecord::named("Alice")
            },
            AuthorRecord {
                avatar: Some("/static/bob.png".into()),
                ..AuthorRecord::named("Bob")
            },
        ];
        let input = PostInput::new(&record, Html::default()).with_authors(&authors);
        let view = bind_post(input, &SiteMetadata::default()).unwrap();

        let alice = &view.header.authors[0];
        assert_eq!(alice.name, "Alice");
        assert!(alice.avatar.is_none());
        assert_eq!(
            alice.github,
            Some(GithubLink {
                href: "https://github.com/alice".into(),
                text: "@alice".into(),
            })
        );

        let bob = &view.header.authors[1];
        assert_eq!(bob.avatar.as_deref(), Some("/static/bob.png"));
        assert!(bob.github.is_none());
    }

    #[test]
    fn test_avatar_gets_base_path() {
        let site = SiteMetadata {
            base_path: "/sub".to_string(),
            ..SiteMetadata::default()
        };
        let record = content();
        let authors = vec![AuthorRecord {
            avatar: Some("/static/a.png".into()),
            ..AuthorRecord::named("Alice")
        }];
        let input = PostInput::new(&record, Html::default()).with_authors(&authors);
        let view = bind_post(input, &site).unwrap();
        assert_eq!(
            view.header.authors[0].avatar.as_deref(),
            Some("/sub/static/a.png")
        );
    }

    #[test]
    fn test_navigation() {
        let record = content();
        let prev = AdjacentLink::new("blog/p1", "T1");
        let next = AdjacentLink::new("p2", "T2");

        let only_next = PostInput::new(&record, Html::default()).with_adjacent(None, Some(&next));
        let view = bind_post(only_next, &SiteMetadata::default()).unwrap();
        assert_eq!(
            view.footer.navigation,
            vec![NavLink {
                direction: NavDirection::Next,
                href: "/p2".into(),
                title: "Next Article".into(),
                subtitle: "T2".into(),
            }]
        );

        let both = PostInput::new(&record, Html::default()).with_adjacent(Some(&prev), Some(&next));
        let view = bind_post(both, &SiteMetadata::default()).unwrap();
        let hrefs: Vec<_> = view.footer.navigation.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(hrefs, vec!["/blog/p1", "/p2"]);

        assert!(bind(&record).footer.navigation.is_empty());
    }

    #[test]
    fn test_adjacent_without_path_is_skipped() {
        let record = content();
        let empty = AdjacentLink::new("", "Nowhere");
        let input = PostInput::new(&record, Html::default()).with_adjacent(Some(&empty), None);
        let view = bind_post(input, &SiteMetadata::default()).unwrap();
        assert!(view.footer.navigation.is_empty());
    }

    #[test]
    fn test_back_link() {
        let view = bind(&content());
        assert_eq!(view.footer.back_link.collection, "blog");
        assert_eq!(view.footer.back_link.href, "/blog");
        assert_eq!(view.footer.back_link.label, BACK_LINK_LABEL);

        let mut record = content();
        record.path = String::new();
        let view = bind(&record);
        assert_eq!(view.footer.back_link.collection, "");
        assert_eq!(view.footer.back_link.href, "/");
    }

    #[test]
    fn test_invalid_date_is_error() {
        let mut record = content();
        record.date = "not-a-date".to_string();
        let result = bind_post(PostInput::new(&record, Html::default()), &SiteMetadata::default());
        assert!(matches!(result, Err(FormatError::InvalidDate { .. })));
    }

    #[test]
    fn test_site_locale_is_used() {
        let site = SiteMetadata {
            locale: "de-DE".to_string(),
            ..SiteMetadata::default()
        };
        let record = content();
        let view = bind_post(PostInput::new(&record, Html::default()), &site).unwrap();
        assert_eq!(view.header.date.display, "Dienstag, 5. März 2024");
        assert_eq!(view.header.date.datetime, "2024-03-05");
    }

    #[test]
    fn test_toc_and_body_pass_through() {
        let mut record = content();
        record.toc = vec![folio_core::TocEntry::new("Intro", "intro", 2)];
        let body = Html::raw("<p>opaque</p>");
        let input = PostInput::new(&record, body.clone());
        let view = bind_post(input, &SiteMetadata::default()).unwrap();
        assert_eq!(view.toc, record.toc);
        assert_eq!(view.body, body);
    }
}
