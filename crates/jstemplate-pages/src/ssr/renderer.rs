//! Template renderer for script-driven pages.

use super::context::{DATA_CONTENT_ATTR, to_json_text};
use super::document::assemble;
use crate::error::RenderResult;
use crate::markup::MarkupNode;
use crate::settings::TemplateSettings;
use serde::Serialize;

/// Script directory, relative to the static root.
pub const SCRIPT_DIR: &str = "js/";

/// `id` of the mount element the client script renders into.
pub const MOUNT_ID: &str = "root";

/// Renders HTML shells that load `{static_root}js/{name}.js` as a module.
///
/// The renderer is configured once and holds no mutable state, so a single
/// instance can be shared across threads and reused for every request.
///
/// # Example
///
/// ```
/// use jstemplate_pages::TemplateRenderer;
///
/// let renderer = TemplateRenderer::new("/assets/");
/// let html = renderer.render("test");
///
/// assert!(html.contains("src='/assets/js/test.js'"));
/// assert!(html.contains("href='/assets/css/style.css'"));
/// assert!(!html.contains("data-content"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRenderer {
	static_root: String,
	script_root: String,
}

impl Default for TemplateRenderer {
	fn default() -> Self {
		Self::from_settings(&TemplateSettings::default())
	}
}

impl TemplateRenderer {
	/// Creates a renderer serving assets under `static_root`.
	///
	/// The script root is `static_root` followed by `js/`. No separator is
	/// inserted: `"/static"` gives a script root of `"/staticjs/"`.
	pub fn new(static_root: impl Into<String>) -> Self {
		let static_root = static_root.into();
		let script_root = format!("{static_root}{SCRIPT_DIR}");
		Self {
			static_root,
			script_root,
		}
	}

	/// Creates a renderer from loaded settings.
	pub fn from_settings(settings: &TemplateSettings) -> Self {
		Self::new(settings.static_root.clone())
	}

	/// Returns the static asset root.
	pub fn static_root(&self) -> &str {
		&self.static_root
	}

	/// Returns the root that script paths are built from.
	pub fn script_root(&self) -> &str {
		&self.script_root
	}

	/// Renders a page without a context.
	pub fn render(&self, script_name: &str) -> String {
		tracing::debug!(script = script_name, context = false, "rendering template");
		self.render_document(script_name, None)
	}

	/// Renders a page with `context` embedded as JSON in the mount element.
	///
	/// A context that serializes to `null` is treated as absent.
	///
	/// # Errors
	///
	/// Returns [`RenderError::Serialization`](crate::RenderError::Serialization)
	/// if the context cannot be serialized. No document is produced in that
	/// case.
	pub fn render_with_context<T>(&self, script_name: &str, context: &T) -> RenderResult<String>
	where
		T: Serialize + ?Sized,
	{
		let json = to_json_text(context)?;
		tracing::debug!(
			script = script_name,
			context = json.is_some(),
			"rendering template"
		);
		Ok(self.render_document(script_name, json))
	}

	fn render_document(&self, script_name: &str, context_json: Option<String>) -> String {
		let mut mount = MarkupNode::new("div");
		mount.add_attribute("id", MOUNT_ID);
		if let Some(json) = context_json {
			mount.add_attribute(DATA_CONTENT_ATTR, json);
		}

		let mut script = MarkupNode::new("script");
		script
			.add_attribute("type", "module")
			.add_attribute("src", self.script_src(script_name));

		assemble(&self.static_root, &mount.to_html(), &script.to_html())
	}

	fn script_src(&self, script_name: &str) -> String {
		format!("{}{}.js", self.script_root, script_name)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::RenderError;
	use rstest::rstest;
	use serde::ser::{Error as _, Serializer};
	use serde_json::json;

	struct Cyclic;

	impl Serialize for Cyclic {
		fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
			Err(S::Error::custom("cyclic structure"))
		}
	}

	#[rstest]
	#[case("/static/", "/static/js/")]
	#[case("/static", "/staticjs/")]
	#[case("", "js/")]
	fn test_script_root(#[case] root: &str, #[case] expected: &str) {
		let renderer = TemplateRenderer::new(root);
		assert_eq!(renderer.static_root(), root);
		assert_eq!(renderer.script_root(), expected);
	}

	#[rstest]
	fn test_default_uses_static_root() {
		assert_eq!(TemplateRenderer::default().script_root(), "/static/js/");
	}

	#[rstest]
	fn test_render_exact_output() {
		let html = TemplateRenderer::new("/static/").render("index");
		assert_eq!(
			html,
			"<!DOCTYPE html><html><head><title>Web Application</title>\
			 <link rel='stylesheet' type='text/css' href='/static/css/style.css' /></head>\
			 <body><div id='root'></div>\
			 <script type='module' src='/static/js/index.js'></script></body></html>"
		);
	}

	#[rstest]
	fn test_render_with_context_attribute_follows_id() {
		let html = TemplateRenderer::new("/static/")
			.render_with_context("index", &json!({"title": "Welcome", "user": "John"}))
			.unwrap();
		assert!(html.contains(
			r#"<div id='root' data-content='{"title":"Welcome","user":"John"}'></div>"#
		));
	}

	#[rstest]
	fn test_null_context_renders_like_no_context() {
		let renderer = TemplateRenderer::new("/static/");
		let bare = renderer.render("index");
		assert_eq!(
			renderer.render_with_context("index", &json!(null)).unwrap(),
			bare
		);
		assert_eq!(
			renderer
				.render_with_context("index", &Option::<String>::None)
				.unwrap(),
			bare
		);
	}

	#[rstest]
	fn test_serialization_failure_propagates() {
		let err = TemplateRenderer::new("/static/")
			.render_with_context("index", &Cyclic)
			.unwrap_err();
		assert!(matches!(err, RenderError::Serialization(_)));
		assert!(err.to_string().contains("cyclic structure"));
	}

	#[rstest]
	fn test_renderer_is_shareable() {
		fn assert_send_sync<T: Send + Sync>() {}
		assert_send_sync::<TemplateRenderer>();
	}
}
