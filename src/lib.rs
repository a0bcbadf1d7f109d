//! # JSTemplate
//!
//! Server-side HTML shells for client-rendered pages.
//!
//! Each page is a fixed document with a `div#root` mount element and a module
//! script loaded from `{static_root}js/{name}.js`. Server data reaches the
//! script as JSON in the mount element's `data-content` attribute.
//!
//! ## Feature Flags
//!
//! - `pages` (default) - Re-exports [`jstemplate_pages`]
//!
//! ## Quick Start
//!
//! ```
//! # #[cfg(feature = "pages")]
//! # {
//! use jstemplate::TemplateRenderer;
//!
//! let renderer = TemplateRenderer::new("/static/");
//! let html = renderer.render("index");
//! assert!(html.contains("<script type='module' src='/static/js/index.js'></script>"));
//! # }
//! ```
//!
//! See `demos/server.rs` for an HTTP server wiring.

#[cfg(feature = "pages")]
pub use jstemplate_pages as pages;

#[cfg(feature = "pages")]
pub use jstemplate_pages::{
	Attributes, ElementKind, MarkupNode, RenderError, RenderResult, SettingsError,
	SettingsResult, TemplateRenderer, TemplateSettings, assemble,
};
