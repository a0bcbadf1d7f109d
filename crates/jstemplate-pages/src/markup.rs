//! Markup nodes for building HTML strings
//!
//! A [`MarkupNode`] is a single HTML element: a tag name, an ordered list of
//! attributes and already-serialized content. Nesting happens by serializing a
//! child into its parent's content, so there is no tree to walk at render time.
//!
//! ## Usage
//!
//! ```
//! use jstemplate_pages::markup::MarkupNode;
//!
//! let mut body = MarkupNode::new("body");
//! body.add(MarkupNode::new("div").attr("id", "root"));
//!
//! assert_eq!(body.to_html(), "<body><div id='root'></div></body>");
//! ```
//!
//! ## Quoting
//!
//! Attribute values are always wrapped in single quotes and are never
//! escaped. A value containing `'` yields malformed markup.

mod attrs;
mod node;

pub use attrs::Attributes;
pub use node::{ElementKind, MarkupNode};
