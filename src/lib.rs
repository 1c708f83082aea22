//! Open, decode and read resources that may live either on the filesystem or
//! inside the running program.
//!
//! A resource name is tried as a filesystem path first; only when nothing
//! exists there is it looked up among bundled resources (configured resource
//! directories, then embedded [`include_dir`] bundles registered with
//! [`register_bundle`]). Local files therefore override shipped defaults.
//!
//! The functions at the crate root use [`ResourceLoader::current`]. Build a
//! [`ResourceLoader`] directly to control the lookup without touching
//! process-wide state.

pub mod app_dirs;
pub mod encoding;
pub mod error;
pub mod logging;
pub mod properties;
pub mod settings;
pub mod text;

mod loader;
mod remote;

use std::path::Path;

pub use encoding::{Encoding, TextReader};
pub use error::{ResourceError, Result};
pub use loader::{ResourceLoader, ResourceStream, register_bundle};
pub use properties::{Properties, load_properties_from_reader};
pub use remote::{load_properties_from_url, open_url};
pub use settings::{Settings, SettingsSources};

/// Open `name` from the filesystem, or from the bundled resources when no
/// such path exists.
pub fn get_stream(name: &str) -> Result<ResourceStream> {
	ResourceLoader::current().get_stream(name)
}

/// Open an existing file without the bundled fallback.
pub fn open_file(path: impl AsRef<Path>) -> Result<ResourceStream> {
	ResourceLoader::current().open_file(path)
}

/// Open `name` as text in the default encoding.
pub fn get_reader(name: &str) -> Result<TextReader<ResourceStream>> {
	ResourceLoader::current().get_reader(name)
}

/// Open `name` as text in the encoding called `label`.
pub fn get_reader_with_encoding(name: &str, label: &str) -> Result<TextReader<ResourceStream>> {
	ResourceLoader::current().get_reader_with_encoding(name, label)
}

/// Open `path` as text in the default encoding.
pub fn file_reader(path: impl AsRef<Path>) -> Result<TextReader<ResourceStream>> {
	ResourceLoader::current().file_reader(path)
}

/// Open `path` as text in the encoding called `label`.
pub fn file_reader_with_encoding(
	path: impl AsRef<Path>,
	label: &str,
) -> Result<TextReader<ResourceStream>> {
	ResourceLoader::current().file_reader_with_encoding(path, label)
}

/// Load properties from `location`, reporting failures as
/// [`ResourceError::Processing`].
pub fn load_properties(location: &str) -> Result<Properties> {
	ResourceLoader::current().load_properties(location)
}

/// Read `name` into one string, lines joined with no separator.
pub fn load_text_file(name: &str) -> Result<String> {
	ResourceLoader::current().load_text_file(name)
}

/// Append the lines of `name` to `lines`, returning the same vector.
pub fn load_text_lines<'a>(name: &str, lines: &'a mut Vec<String>) -> Result<&'a mut Vec<String>> {
	ResourceLoader::current().load_text_lines(name, lines)
}
