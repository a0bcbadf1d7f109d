//! Ordered attribute lists and their single-quoted encoding.

use std::borrow::Cow;
use std::fmt;

/// An ordered sequence of HTML attributes.
///
/// Pairs are kept in insertion order and duplicates are kept as well; the
/// list is only joined into text when the owning element is serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
	pairs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl Attributes {
	/// Creates an empty attribute list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends an attribute.
	pub fn push(&mut self, key: impl Into<Cow<'static, str>>, value: impl Into<Cow<'static, str>>) {
		self.pairs.push((key.into(), value.into()));
	}

	/// Returns the first value stored under `key`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.pairs
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_ref())
	}

	/// Returns `true` if any attribute is stored under `key`.
	pub fn contains(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	/// Returns the number of attributes.
	pub fn len(&self) -> usize {
		self.pairs.len()
	}

	/// Returns `true` if there are no attributes.
	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}

	/// Iterates over the pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.pairs.iter().map(|(k, v)| (k.as_ref(), v.as_ref()))
	}

	/// Writes every pair as ` key='value'`.
	///
	/// Each pair carries its own leading space so the result can follow a tag
	/// name directly. Values are written verbatim.
	pub fn encode_into(&self, output: &mut String) {
		for (key, value) in &self.pairs {
			output.push(' ');
			output.push_str(key);
			output.push_str("='");
			output.push_str(value);
			output.push('\'');
		}
	}
}

impl fmt::Display for Attributes {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut encoded = String::new();
		self.encode_into(&mut encoded);
		f.write_str(&encoded)
	}
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
	K: Into<Cow<'static, str>>,
	V: Into<Cow<'static, str>>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut attrs = Self::new();
		attrs.extend(iter);
		attrs
	}
}

impl<K, V> Extend<(K, V)> for Attributes
where
	K: Into<Cow<'static, str>>,
	V: Into<Cow<'static, str>>,
{
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
		for (key, value) in iter {
			self.push(key, value);
		}
	}
}
