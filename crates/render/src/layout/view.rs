//! The structured page view produced by the post layout binder.

use folio_core::TocEntry;
use serde::Serialize;

/// A bound post page: header, sidebar TOC, body and footer.
///
/// The body is whatever the caller rendered upstream; it is carried
/// through untouched and never serialized.
#[derive(Debug, Clone, Serialize)]
pub struct PostView<B> {
    /// Title, date, tags and authors.
    pub header: PostHeader,
    /// Sidebar table of contents, as given by the content record.
    pub toc: Vec<TocEntry>,
    /// Pre-rendered article body.
    #[serde(skip)]
    pub body: B,
    /// Navigation and back-link.
    pub footer: PostFooter,
}

/// Post header block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostHeader {
    /// Article title.
    pub title: String,
    /// Publication date.
    pub date: DateView,
    /// Tags in input order; `None` when the record has no tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagView>>,
    /// Authors in input order.
    pub authors: Vec<AuthorView>,
}

/// A publication date in machine and display form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateView {
    /// Date string from the record, for `<time datetime>`.
    pub datetime: String,
    /// Locale-formatted date.
    pub display: String,
}

/// One tag chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagView {
    /// Tag text as written.
    pub text: String,
    /// Tag listing page, `/tags/<slug>`.
    pub href: String,
}

/// One author entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorView {
    /// Display name.
    pub name: String,
    /// Avatar image source, already resolved against the site base path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// GitHub profile link, shown only when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<GithubLink>,
}

/// A GitHub profile link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GithubLink {
    /// Profile URL.
    pub href: String,
    /// Link text, e.g. `@alice`.
    pub text: String,
}

/// Post footer block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostFooter {
    /// Zero, one or two article links, previous first.
    pub navigation: Vec<NavLink>,
    /// Link back to the collection.
    pub back_link: BackLink,
}

/// Which neighbour a navigation link points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NavDirection {
    /// The preceding article.
    Previous,
    /// The following article.
    Next,
}

impl NavDirection {
    /// Heading shown above the article title.
    pub fn label(self) -> &'static str {
        match self {
            NavDirection::Previous => "Previous Article",
            NavDirection::Next => "Next Article",
        }
    }
}

/// Link to an adjacent article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Previous or next.
    pub direction: NavDirection,
    /// Target, `/<path>`.
    pub href: String,
    /// Direction label.
    pub title: String,
    /// Adjacent article's title.
    pub subtitle: String,
}

/// Link back to the collection a post belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackLink {
    /// First path segment; empty when the post path is empty.
    pub collection: String,
    /// Target, `/<collection>`.
    pub href: String,
    /// Link text.
    pub label: String,
}
