//! Render context serialization.
//!
//! The context is any [`Serialize`] value. It travels to the client as
//! compact JSON text in the mount element's `data-content` attribute.

use crate::error::RenderResult;
use serde::Serialize;

/// Attribute that carries the serialized context on the mount element.
pub const DATA_CONTENT_ATTR: &str = "data-content";

/// Serializes a context to JSON text.
///
/// Returns `Ok(None)` when the context serializes to `null`, in which case no
/// attribute should be emitted.
pub(super) fn to_json_text<T>(context: &T) -> RenderResult<Option<String>>
where
	T: Serialize + ?Sized,
{
	let json = serde_json::to_string(context)?;
	if json == "null" {
		Ok(None)
	} else {
		Ok(Some(json))
	}
}
