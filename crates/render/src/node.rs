//! Opaque rendered output.
//!
//! Anything that can write itself as markup implements [`Renderable`]. The
//! post layout only ever calls [`Renderable::materialize`] on the body it is
//! given, so the upstream rendering technology stays swappable.

use serde::Serialize;
use std::borrow::Cow;

/// A unit of rendered markup.
pub trait Renderable {
    /// Appends this node's markup to `out`.
    fn materialize(&self, out: &mut String);

    /// Materializes into a fresh string.
    fn to_html_string(&self) -> String {
        let mut out = String::new();
        self.materialize(&mut out);
        out
    }
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn materialize(&self, out: &mut String) {
        (**self).materialize(out);
    }
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn materialize(&self, out: &mut String) {
        (**self).materialize(out);
    }
}

/// Escapes text content.
pub fn escape_text(s: &str) -> Cow<'_, str> {
    html_escape::encode_text(s)
}

/// Escapes a double-quoted attribute value.
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(s)
}

/// Trusted HTML markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Html(String);

impl Html {
    /// Wraps markup that is already safe to emit.
    pub fn raw(markup: impl Into<String>) -> Self {
        Html(markup.into())
    }

    /// Escapes `text` into markup.
    pub fn text(text: &str) -> Self {
        Html(escape_text(text).into_owned())
    }

    /// Appends markup verbatim.
    pub fn push_raw(&mut self, markup: &str) {
        self.0.push_str(markup);
    }

    /// Appends escaped text.
    pub fn push_text(&mut self, text: &str) {
        self.0.push_str(&escape_text(text));
    }

    /// Appends ` name="value"` with the value escaped.
    pub fn push_attr(&mut self, name: &str, value: &str) {
        self.0.push(' ');
        self.0.push_str(name);
        self.0.push_str("=\"");
        self.0.push_str(&escape_attr(value));
        self.0.push('"');
    }

    /// Appends another renderable.
    pub fn append(&mut self, node: &impl Renderable) {
        node.materialize(&mut self.0);
    }

    /// Borrows the markup.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the markup.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns true if no markup was produced.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Renderable for Html {
    fn materialize(&self, out: &mut String) {
        out.push_str(&self.0);
    }
}

impl std::fmt::Display for Html {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
