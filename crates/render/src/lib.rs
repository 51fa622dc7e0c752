#![deny(missing_docs)]
//! folio rendering: MDX component substitution, document rendering and the post layout.

/// Renderers substituted for MDX tags.
pub mod components;
/// Post layout binding and page markup.
pub mod layout;
/// Opaque rendered markup.
pub mod node;
/// Component registry mapping tag names to renderers.
pub mod registry;
/// Generic mdast document renderer.
pub mod renderer;

pub use layout::{PostInput, PostView, bind_post};
pub use node::{Html, Renderable};
pub use registry::{AttrValue, Components, Element, RenderContext, Renderer, components};
pub use renderer::{RenderedDocument, render_document};
