#![deny(missing_docs)]
//! folio core: content records, date formatting, site configuration and slugs.

/// Content records handed over by the external content pipeline.
pub mod content;
/// Locale-aware post date formatting.
pub mod date;
/// Core error types.
pub mod error;
/// Site-wide configuration.
pub mod site;
/// Slug generation utilities.
pub mod slug;

pub use content::{AdjacentLink, AuthorRecord, ContentRecord, TocEntry};
pub use date::{Locale, format_post_date, parse_post_date};
pub use error::{ConfigError, FormatError};
pub use site::{NewsletterConfig, SiteMetadata};
pub use slug::{Slugger, slugify};
