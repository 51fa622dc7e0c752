//! Renderers substituted for MDX tags.

/// `<Image>` component.
pub mod image;
/// Hyperlink (`a`) renderer.
pub mod link;
/// Newsletter subscription form.
pub mod newsletter;
/// Code block (`pre`) wrapper.
pub mod pre;
/// Scrollable table wrapper.
pub mod table;
/// Inline table of contents.
pub mod toc;

pub use toc::{TocOptions, render_toc};
