//! Generic document renderer.
//!
//! Walks an already-compiled mdast tree and turns it into HTML. For every
//! node the renderer derives a tag name (`link` -> `a`, `code` -> `pre`, MDX
//! JSX elements -> their own name, ...), renders the children first, and then
//! asks the component table for a substitute renderer. Tags without one get
//! plain HTML markup.
//!
//! # Module Structure
//!
//! - `context` - Traversal state and the default element markup
//! - `render` - AST node rendering functions

mod context;
pub mod render;

pub use context::{Context, default_element};

use crate::node::Html;
use crate::registry::RenderContext;
use folio_core::TocEntry;
use markdown::mdast::Node;

/// Output of [`render_document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// Rendered body.
    pub body: Html,
    /// Headings in document order, with the ids given to them.
    pub headings: Vec<TocEntry>,
}

/// Renders a compiled document tree.
///
/// # Examples
///
/// ```
/// use folio_core::SiteMetadata;
/// use folio_render::registry::RenderContext;
/// use folio_render::renderer::render_document;
///
/// let tree = markdown::to_mdast("# Hi\n\nSee [docs](/docs).", &Default::default()).unwrap();
/// let site = SiteMetadata::default();
/// let doc = render_document(&tree, &RenderContext::new(&site, &[]));
///
/// assert_eq!(doc.headings[0].anchor, "#hi");
/// assert!(doc.body.as_str().contains(r#"<a class="break-words" href="/docs">docs</a>"#));
/// ```
pub fn render_document(tree: &Node, page: &RenderContext<'_>) -> RenderedDocument {
    let mut ctx = Context::new(*page);
    let body = render::render_node(tree, &mut ctx);
    let headings = ctx.finish();
    log::debug!(
        "Rendered document: {} bytes, {} headings",
        body.as_str().len(),
        headings.len()
    );
    RenderedDocument { body, headings }
}
