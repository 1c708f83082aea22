//! Key-value property files.
//!
//! The format is the classic `.properties` syntax: one `key=value` entry per
//! logical line, `#` or `!` comments, backslash continuations and escapes.

mod parser;

use std::collections::HashMap;
use std::collections::hash_map;
use std::io::{self, Read};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use parser::ParseError;

/// A set of string properties. Later entries for the same key replace
/// earlier ones.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties {
	entries: HashMap<String, String>,
}

impl Properties {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse properties text.
	pub fn parse(text: &str) -> Result<Self, ParseError> {
		let mut properties = Self::new();
		properties.merge_text(text)?;
		Ok(properties)
	}

	/// Read every byte of `reader` and parse it.
	///
	/// Read failures are returned unchanged; malformed escapes surface as
	/// [`io::ErrorKind::InvalidData`].
	pub fn from_reader<R: Read>(reader: R) -> io::Result<Self> {
		let mut properties = Self::new();
		properties.load(reader)?;
		Ok(properties)
	}

	/// Add the entries read from `reader`, replacing existing keys.
	///
	/// Bytes are taken as UTF-8 when they form valid UTF-8, and as
	/// ISO-8859-1 otherwise. Java's `Properties.load(InputStream)` always
	/// reads ISO-8859-1, so Latin-1 text that happens to be valid UTF-8 reads
	/// differently here: `C3 A9` is `é`, not `Ã©`.
	pub fn load<R: Read>(&mut self, mut reader: R) -> io::Result<()> {
		let mut bytes = Vec::new();
		reader.read_to_end(&mut bytes)?;

		let text = match String::from_utf8(bytes) {
			Ok(text) => text,
			Err(err) => err.into_bytes().iter().map(|&byte| byte as char).collect(),
		};

		self.merge_text(&text)
			.map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
	}

	fn merge_text(&mut self, text: &str) -> Result<(), ParseError> {
		for (number, line) in parser::logical_lines(text) {
			let (key, value) = parser::parse_entry(&line, number)?;
			self.entries.insert(key, value);
		}
		Ok(())
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.entries.get(key).map(String::as_str)
	}

	/// Look up `key`, falling back to `default` when it is absent.
	pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
		self.get(key).unwrap_or(default)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
		self.entries.insert(key.into(), value.into())
	}

	pub fn remove(&mut self, key: &str) -> Option<String> {
		self.entries.remove(key)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries
			.iter()
			.map(|(key, value)| (key.as_str(), value.as_str()))
	}

	/// Render the entries as properties text, one `key=value` line each,
	/// sorted by key. Parsing the result gives back the same entries.
	pub fn to_text(&self) -> String {
		let mut text = String::new();
		for (key, value) in self.sorted() {
			parser::escape_into(&mut text, key, true);
			text.push('=');
			parser::escape_into(&mut text, value, false);
			text.push('\n');
		}
		text
	}

	/// Entries sorted by key, for stable output.
	pub fn sorted(&self) -> Vec<(&str, &str)> {
		let mut entries: Vec<_> = self.iter().collect();
		entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
		entries
	}

	pub fn into_map(self) -> HashMap<String, String> {
		self.entries
	}
}

impl FromStr for Properties {
	type Err = ParseError;

	fn from_str(text: &str) -> Result<Self, Self::Err> {
		Self::parse(text)
	}
}

impl From<HashMap<String, String>> for Properties {
	fn from(entries: HashMap<String, String>) -> Self {
		Self { entries }
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			entries: iter
				.into_iter()
				.map(|(key, value)| (key.into(), value.into()))
				.collect(),
		}
	}
}

impl IntoIterator for Properties {
	type Item = (String, String);
	type IntoIter = hash_map::IntoIter<String, String>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

/// Parse properties from an already open stream.
///
/// This is the building block under the name and URL loaders: I/O failures
/// are returned raw instead of being wrapped with a location.
pub fn load_properties_from_reader<R: Read>(reader: R) -> io::Result<Properties> {
	Properties::from_reader(reader)
}
