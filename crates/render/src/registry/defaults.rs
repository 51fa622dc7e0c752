//! The site's fixed component table.
//!
//! Six tags are substituted; everything else keeps the document renderer's
//! default markup.

use super::types::{Components, Renderer};
use crate::components::{image, link, newsletter, pre, table, toc};
use once_cell::sync::Lazy;

/// Image component (`<Image src=... />`).
pub const IMAGE: &str = "Image";
/// Inline table of contents placeholder (`<TOCInline toc={props.toc} />`).
pub const TOC_INLINE: &str = "TOCInline";
/// Hyperlinks.
pub const LINK: &str = "a";
/// Preformatted code blocks.
pub const PRE: &str = "pre";
/// Tables.
pub const TABLE: &str = "table";
/// Newsletter subscription form.
pub const NEWSLETTER: &str = "BlogNewsletterForm";

static COMPONENTS: Lazy<Components> = Lazy::new(|| {
    Components::from_entries([
        (IMAGE, image::render as Renderer),
        (TOC_INLINE, toc::render as Renderer),
        (LINK, link::render as Renderer),
        (PRE, pre::render as Renderer),
        (TABLE, table::render as Renderer),
        (NEWSLETTER, newsletter::render as Renderer),
    ])
});

/// Returns the component table used to render MDX documents.
///
/// # Example
///
/// ```
/// use folio_render::registry::components;
///
/// let table = components();
/// assert!(table.contains("TOCInline"));
/// assert!(table.get("blockquote").is_none());
/// ```
pub fn components() -> &'static Components {
    &COMPONENTS
}
