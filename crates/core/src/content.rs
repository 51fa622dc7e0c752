//! Content records produced by the external content pipeline.
//!
//! All types here are read-only snapshots: the data layer builds them once
//! per page render and the layout only borrows them.

use serde::{Deserialize, Serialize};

/// One table-of-contents entry, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Visible heading text.
    #[serde(alias = "value")]
    pub text: String,
    /// Anchor URL, usually `#slug`.
    #[serde(alias = "url")]
    pub anchor: String,
    /// Heading depth (1-6).
    pub depth: u8,
}

impl TocEntry {
    /// Creates an entry pointing at `#slug`.
    pub fn new(text: impl Into<String>, slug: &str, depth: u8) -> Self {
        Self {
            text: text.into(),
            anchor: format!("#{}", slug),
            depth,
        }
    }
}

/// Metadata of one compiled article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    /// Source file path relative to the content root.
    pub file_path: String,
    /// Route path, e.g. `blog/my-post`.
    pub path: String,
    /// URL slug.
    pub slug: String,
    /// Publication date as written in the source (ISO 8601).
    pub date: String,
    /// Article title.
    pub title: String,
    /// Tags in author order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Table of contents.
    #[serde(default)]
    pub toc: Vec<TocEntry>,
}

impl ContentRecord {
    /// First segment of [`ContentRecord::path`], the collection this record belongs to.
    ///
    /// Returns an empty string for an empty path.
    ///
    /// ```
    /// use folio_core::ContentRecord;
    ///
    /// let record = ContentRecord {
    ///     path: "blog/my-post".into(),
    ///     ..ContentRecord::default()
    /// };
    /// assert_eq!(record.collection(), "blog");
    /// ```
    pub fn collection(&self) -> &str {
        self.path
            .trim_start_matches('/')
            .split('/')
            .next()
            .unwrap_or_default()
    }
}

/// An author as resolved by the data layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRecord {
    /// Display name.
    pub name: String,
    /// Avatar image reference.
    #[serde(default)]
    pub avatar: Option<String>,
    /// GitHub profile URL.
    #[serde(default)]
    pub github: Option<String>,
    /// Job title.
    #[serde(default)]
    pub occupation: Option<String>,
    /// Employer.
    #[serde(default)]
    pub company: Option<String>,
    /// Contact address.
    #[serde(default)]
    pub email: Option<String>,
    /// Twitter profile URL.
    #[serde(default)]
    pub twitter: Option<String>,
    /// LinkedIn profile URL.
    #[serde(default)]
    pub linkedin: Option<String>,
}

impl AuthorRecord {
    /// Creates an author with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Reference to the previous or next item of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacentLink {
    /// Route path of the adjacent item.
    pub path: String,
    /// Title of the adjacent item.
    pub title: String,
}

impl AdjacentLink {
    /// Creates a link to `path` titled `title`.
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
        }
    }
}
