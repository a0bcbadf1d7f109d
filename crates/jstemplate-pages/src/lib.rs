//! JSTemplate Pages - HTML shells for client-rendered scripts
//!
//! Renders a complete HTML document whose body holds a mount element and a
//! module script. Data computed on the server travels to the client as a JSON
//! `data-content` attribute on the mount element; the script reads it back
//! from `document.getElementById('root').dataset.content`.
//!
//! ## Architecture
//!
//! - [`markup`]: Element nodes and attribute encoding
//! - [`ssr`]: Document shell assembly and the [`TemplateRenderer`]
//! - [`settings`]: Renderer configuration (defaults, TOML, environment)
//! - [`error`]: Error types
//!
//! ## Example
//!
//! ```
//! use jstemplate_pages::TemplateRenderer;
//! use serde_json::json;
//!
//! let renderer = TemplateRenderer::new("/static/");
//! let html = renderer
//! 	.render_with_context("index", &json!({"title": "Welcome", "user": "John"}))
//! 	.unwrap();
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains(r#"data-content='{"title":"Welcome","user":"John"}'"#));
//! assert!(html.contains("src='/static/js/index.js'"));
//! ```
//!
//! ## Escaping
//!
//! Nothing is escaped. Attribute values are wrapped in single quotes as-is, so
//! a context whose JSON text contains a `'` produces malformed markup. Callers
//! own the content they embed.

pub mod error;
pub mod markup;
pub mod settings;
pub mod ssr;

pub use error::{RenderError, RenderResult, SettingsError, SettingsResult};
pub use markup::{Attributes, ElementKind, MarkupNode};
pub use settings::TemplateSettings;
pub use ssr::{TemplateRenderer, assemble};
