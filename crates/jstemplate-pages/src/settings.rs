//! Renderer settings
//!
//! Settings are layered, later sources overriding earlier ones:
//!
//! 1. [`TemplateSettings::default`]
//! 2. A TOML document ([`TemplateSettings::from_toml_str`],
//!    [`TemplateSettings::from_file`])
//! 3. Environment variables ([`TemplateSettings::with_env_overrides`])
//!
//! ```toml
//! static_root = "/assets/"
//! ```

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding [`TemplateSettings::static_root`].
pub const STATIC_ROOT_ENV: &str = "JSTEMPLATE_STATIC_ROOT";

/// Default static asset root.
pub const DEFAULT_STATIC_ROOT: &str = "/static/";

/// Configuration for a [`TemplateRenderer`](crate::TemplateRenderer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateSettings {
	/// URL prefix under which `js/` and `css/` are served.
	///
	/// Used verbatim; it should end with `/`.
	pub static_root: String,
}

impl Default for TemplateSettings {
	fn default() -> Self {
		Self {
			static_root: DEFAULT_STATIC_ROOT.to_string(),
		}
	}
}

impl TemplateSettings {
	/// Creates default settings.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the static root.
	pub fn static_root(mut self, static_root: impl Into<String>) -> Self {
		self.static_root = static_root.into();
		self
	}

	/// Parses settings from a TOML document. Missing keys keep their defaults.
	pub fn from_toml_str(source: &str) -> SettingsResult<Self> {
		Ok(toml::from_str(source)?)
	}

	/// Reads and parses a TOML settings file.
	pub fn from_file(path: impl AsRef<Path>) -> SettingsResult<Self> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		tracing::debug!(path = %path.display(), "loaded template settings");
		Self::from_toml_str(&source)
	}

	/// Applies overrides from the process environment.
	pub fn with_env_overrides(self) -> Self {
		self.with_overrides_from(|key| std::env::var(key).ok())
	}

	fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
		if let Some(static_root) = lookup(STATIC_ROOT_ENV) {
			tracing::debug!(%static_root, "static root overridden by environment");
			self.static_root = static_root;
		}
		self
	}
}
