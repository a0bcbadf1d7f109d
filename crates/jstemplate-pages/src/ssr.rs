//! Server-side rendering of HTML shells
//!
//! - [`assemble`] composes the fixed document skeleton around a mount
//!   element and a script element.
//! - [`TemplateRenderer`] builds both elements for a script name and an
//!   optional context, then delegates to [`assemble`].

mod context;
mod document;
mod renderer;

pub use context::DATA_CONTENT_ATTR;
pub use document::{DOCTYPE, DOCUMENT_TITLE, STYLESHEET_PATH, assemble};
pub use renderer::{MOUNT_ID, SCRIPT_DIR, TemplateRenderer};
