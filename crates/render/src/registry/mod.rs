/// The fixed component table.
pub mod defaults;
/// Registry type definitions.
pub mod types;

pub use defaults::components;
pub use types::{AttrValue, Components, Element, RenderContext, Renderer};
