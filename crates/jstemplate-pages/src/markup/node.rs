//! The [`MarkupNode`] element type.

use super::attrs::Attributes;
use std::borrow::Cow;
use std::fmt::{self, Write as _};

/// How an element closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
	/// `<tag ...>content</tag>`
	Standard,
	/// `<tag ... />`, never has content.
	Void,
}

impl ElementKind {
	/// Classifies a tag name. HTML5 void elements are [`ElementKind::Void`].
	pub fn for_tag(tag: &str) -> Self {
		let is_void = matches!(
			tag,
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		if is_void { Self::Void } else { Self::Standard }
	}
}

/// A single HTML element with pre-serialized content.
///
/// Content is plain text that is emitted verbatim between the opening and
/// closing tags. [`MarkupNode::add`] serializes its argument and appends the
/// text, which is how elements are nested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupNode {
	tag: Cow<'static, str>,
	attrs: Attributes,
	content: String,
	kind: ElementKind,
}

impl MarkupNode {
	/// Creates an element, inferring its kind from the tag name.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let kind = ElementKind::for_tag(&tag);
		Self::with_kind(tag, kind)
	}

	/// Creates an element with an explicit kind.
	pub fn with_kind(tag: impl Into<Cow<'static, str>>, kind: ElementKind) -> Self {
		Self {
			tag: tag.into(),
			attrs: Attributes::new(),
			content: String::new(),
			kind,
		}
	}

	/// Creates an element with an initial set of attributes.
	pub fn with_attributes<K, V>(
		tag: impl Into<Cow<'static, str>>,
		attrs: impl IntoIterator<Item = (K, V)>,
	) -> Self
	where
		K: Into<Cow<'static, str>>,
		V: Into<Cow<'static, str>>,
	{
		let mut node = Self::new(tag);
		node.attrs.extend(attrs);
		node
	}

	/// Appends an attribute.
	pub fn add_attribute(
		&mut self,
		key: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> &mut Self {
		self.attrs.push(key, value);
		self
	}

	/// Replaces the content wholesale.
	pub fn set_content(&mut self, content: impl Into<String>) -> &mut Self {
		if self.reject_content() {
			return self;
		}
		self.content = content.into();
		self
	}

	/// Appends the serialized form of `child` to the content.
	///
	/// Accepts another node or any already-rendered markup.
	pub fn add(&mut self, child: impl fmt::Display) -> &mut Self {
		if self.reject_content() {
			return self;
		}
		// Writing into a String cannot fail.
		let _ = write!(self.content, "{child}");
		self
	}

	/// Builder form of [`MarkupNode::add_attribute`].
	pub fn attr(
		mut self,
		key: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.add_attribute(key, value);
		self
	}

	/// Builder form of [`MarkupNode::add`].
	pub fn child(mut self, child: impl fmt::Display) -> Self {
		self.add(child);
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes.
	pub fn attributes(&self) -> &Attributes {
		&self.attrs
	}

	/// Returns the content.
	pub fn content(&self) -> &str {
		&self.content
	}

	/// Returns the element kind.
	pub fn kind(&self) -> ElementKind {
		self.kind
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.kind == ElementKind::Void
	}

	/// Serializes the element.
	pub fn to_html(&self) -> String {
		let mut output = String::with_capacity(self.tag.len() * 2 + self.content.len() + 16);
		self.write_html(&mut output);
		output
	}

	fn write_html(&self, output: &mut String) {
		output.push('<');
		output.push_str(&self.tag);
		self.attrs.encode_into(output);

		match self.kind {
			ElementKind::Void => output.push_str(" />"),
			ElementKind::Standard => {
				output.push('>');
				output.push_str(&self.content);
				output.push_str("</");
				output.push_str(&self.tag);
				output.push('>');
			}
		}
	}

	fn reject_content(&self) -> bool {
		if self.is_void() {
			tracing::warn!(tag = %self.tag, "discarding content given to a void element");
			true
		} else {
			false
		}
	}
}

impl fmt::Display for MarkupNode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_html())
	}
}
