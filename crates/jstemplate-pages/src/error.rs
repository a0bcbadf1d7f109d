//! Error types for rendering and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Result type for settings loading
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Errors raised while rendering a document.
#[derive(Debug, Error)]
pub enum RenderError {
	/// The render context could not be converted to JSON text
	#[error("Failed to serialize render context: {0}")]
	Serialization(#[from] serde_json::Error),
}

/// Errors raised while loading [`TemplateSettings`](crate::TemplateSettings).
#[derive(Debug, Error)]
pub enum SettingsError {
	/// The settings file could not be read
	#[error("Failed to read settings file {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The settings document is not valid TOML or has the wrong shape
	#[error("Invalid settings: {0}")]
	Parse(#[from] toml::de::Error),
}
