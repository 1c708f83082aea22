//! Resolve resource names to open streams.
//!
//! A name is first tried as a filesystem path. When nothing exists there it
//! is looked up as a bundled resource: configured resource directories first,
//! then embedded bundles in registration order. An existing local file always
//! wins, so a file next to the program overrides the default shipped with it.

mod bundle;
mod stream;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use include_dir::Dir;
use log::debug;

pub use bundle::register_bundle;
pub use stream::ResourceStream;

use crate::encoding::{Encoding, TextReader};
use crate::error::{ResourceError, Result};
use crate::properties::Properties;
use crate::settings::{self, Settings};
use crate::text::read_lines;

/// Lookup configuration for resources. Loading never mutates it.
#[derive(Clone, Debug, Default)]
pub struct ResourceLoader {
	resource_path: Vec<PathBuf>,
	bundles: Vec<&'static Dir<'static>>,
	encoding: Encoding,
}

impl ResourceLoader {
	/// A loader that only sees the filesystem.
	pub fn new() -> Self {
		Self::default()
	}

	/// A loader built from the process settings and the registered bundles.
	pub fn current() -> Self {
		let mut loader = Self::from_settings(settings::global());
		loader.bundles = bundle::registered();
		loader
	}

	/// A loader using `settings` but no bundles.
	pub fn from_settings(settings: &Settings) -> Self {
		Self {
			resource_path: settings.resource_path.clone(),
			bundles: Vec::new(),
			encoding: settings.default_encoding,
		}
	}

	/// Consult `dir` for bundled resources, after directories added earlier.
	pub fn with_resource_dir(mut self, dir: impl Into<PathBuf>) -> Self {
		self.resource_path.push(dir.into());
		self
	}

	/// Consult `bundle` for bundled resources, after bundles added earlier.
	pub fn with_bundle(mut self, bundle: &'static Dir<'static>) -> Self {
		self.bundles.push(bundle);
		self
	}

	/// Use `encoding` for readers opened without an explicit encoding.
	pub fn with_encoding(mut self, encoding: Encoding) -> Self {
		self.encoding = encoding;
		self
	}

	pub fn default_encoding(&self) -> Encoding {
		self.encoding
	}

	pub fn resource_path(&self) -> &[PathBuf] {
		&self.resource_path
	}

	/// Open `name`, trying the filesystem first and bundled resources second.
	pub fn get_stream(&self, name: &str) -> Result<ResourceStream> {
		if name.is_empty() {
			return Err(ResourceError::InvalidArgument("'name' must not be empty"));
		}

		let path = Path::new(name);
		if path.exists() {
			debug!("resolved '{name}' on the filesystem");
			return self.open_file(path);
		}

		self.find_bundled(name)?
			.ok_or_else(|| ResourceError::not_found(name))
	}

	fn find_bundled(&self, name: &str) -> Result<Option<ResourceStream>> {
		let Some(key) = bundle::resource_key(name) else {
			return Ok(None);
		};

		for dir in &self.resource_path {
			let candidate = dir.join(key);
			if candidate.is_file() {
				debug!("resolved '{name}' in resource directory {}", dir.display());
				return self.open_file(&candidate).map(Some);
			}
		}

		for (index, bundle) in self.bundles.iter().enumerate() {
			if let Some(bytes) = bundle::lookup(bundle, key) {
				debug!("resolved '{name}' in embedded bundle #{index}");
				return Ok(Some(ResourceStream::bundled(key, bytes)));
			}
		}

		debug!("'{name}' is neither a file nor a bundled resource");
		Ok(None)
	}

	/// Open `path` directly, without the bundled fallback.
	pub fn open_file(&self, path: impl AsRef<Path>) -> Result<ResourceStream> {
		open_path(path.as_ref()).map(ResourceStream::File)
	}

	/// Open `name` as text in the default encoding.
	pub fn get_reader(&self, name: &str) -> Result<TextReader<ResourceStream>> {
		let stream = self.get_stream(name)?;
		Ok(TextReader::new(stream, self.encoding))
	}

	/// Open `name` as text in the encoding called `label`.
	pub fn get_reader_with_encoding(
		&self,
		name: &str,
		label: &str,
	) -> Result<TextReader<ResourceStream>> {
		let encoding: Encoding = label.parse()?;
		let stream = self.get_stream(name)?;
		Ok(TextReader::new(stream, encoding))
	}

	/// Open `path` as text in the default encoding.
	pub fn file_reader(&self, path: impl AsRef<Path>) -> Result<TextReader<ResourceStream>> {
		let stream = self.open_file(path)?;
		Ok(TextReader::new(stream, self.encoding))
	}

	/// Open `path` as text in the encoding called `label`.
	pub fn file_reader_with_encoding(
		&self,
		path: impl AsRef<Path>,
		label: &str,
	) -> Result<TextReader<ResourceStream>> {
		let encoding: Encoding = label.parse()?;
		let stream = self.open_file(path)?;
		Ok(TextReader::new(stream, encoding))
	}

	/// Load properties from `location`.
	///
	/// Any failure to open or read the resource is reported once as
	/// [`ResourceError::Processing`] naming `location`.
	pub fn load_properties(&self, location: &str) -> Result<Properties> {
		self.get_stream(location)
			.and_then(|stream| Properties::from_reader(stream).map_err(ResourceError::from))
			.map_err(|err| err.processing(location))
	}

	/// Read `name` line by line and join the lines with nothing in between.
	///
	/// `"a\nb\nc\n"` loads as `"abc"`.
	pub fn load_text_file(&self, name: &str) -> Result<String> {
		let reader = BufReader::new(self.get_reader(name)?);
		let mut text = String::new();
		read_lines(reader, |line| text.push_str(&line))?;
		Ok(text)
	}

	/// Append every line of `name` to `lines` and hand the same vector back.
	pub fn load_text_lines<'a>(
		&self,
		name: &str,
		lines: &'a mut Vec<String>,
	) -> Result<&'a mut Vec<String>> {
		let reader = BufReader::new(self.get_reader(name)?);
		read_lines(reader, |line| lines.push(line))?;
		Ok(lines)
	}
}

/// Open a file for reading, reporting any failure as "not found".
pub(crate) fn open_path(path: &Path) -> Result<File> {
	let not_found = |source: io::Error| ResourceError::NotFound {
		name: path.display().to_string(),
		source: Some(source),
	};

	let file = File::open(path).map_err(not_found)?;
	let metadata = file.metadata().map_err(not_found)?;
	if metadata.is_dir() {
		return Err(not_found(io::Error::from(io::ErrorKind::IsADirectory)));
	}
	Ok(file)
}
