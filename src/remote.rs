//! Properties behind a URL.

use log::debug;
use url::Url;

use crate::error::{ResourceError, Result};
use crate::loader::{ResourceStream, open_path};
use crate::properties::Properties;

/// Open the resource `url` points at.
///
/// `file:` URLs are always supported; `http` and `https` need the `http`
/// feature.
pub fn open_url(url: &Url) -> Result<ResourceStream> {
	let unsupported = || ResourceError::UnsupportedScheme {
		url: url.to_string(),
	};

	match url.scheme() {
		"file" => {
			let path = url.to_file_path().map_err(|()| unsupported())?;
			debug!("opening {url} from the filesystem");
			open_path(&path).map(ResourceStream::File)
		}
		#[cfg(feature = "http")]
		"http" | "https" => {
			debug!("fetching {url}");
			let response = ureq::get(url.as_str()).call().map_err(Box::new)?;
			Ok(ResourceStream::Remote(Box::new(response.into_reader())))
		}
		_ => Err(unsupported()),
	}
}

/// Load properties from `url`.
///
/// Failures are reported once as [`ResourceError::Processing`], located by
/// the URL's path.
pub fn load_properties_from_url(url: &Url) -> Result<Properties> {
	open_url(url)
		.and_then(|stream| Properties::from_reader(stream).map_err(ResourceError::from))
		.map_err(|err| err.processing(url.path()))
}

#[cfg(test)]
mod tests {
	use std::fs;

	use tempfile::tempdir;

	use super::*;

	#[test]
	fn file_urls_are_loaded() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("remote.properties");
		fs::write(&path, "host=localhost\nport=8080\n").unwrap();

		let url = Url::from_file_path(&path).unwrap();
		let properties = load_properties_from_url(&url).unwrap();

		assert_eq!(properties.get("host"), Some("localhost"));
		assert_eq!(properties.get("port"), Some("8080"));
	}

	#[test]
	fn missing_file_is_a_processing_fault_naming_the_path() {
		let dir = tempdir().unwrap();
		let url = Url::from_file_path(dir.path().join("absent.properties")).unwrap();

		let err = load_properties_from_url(&url).unwrap_err();

		assert!(matches!(err, ResourceError::Processing { .. }));
		assert!(err.to_string().contains(url.path()));
		assert!(err.is_not_found());
	}

	#[test]
	fn unknown_schemes_are_rejected() {
		let url = Url::parse("gopher://example.org/app.properties").unwrap();
		let err = open_url(&url).unwrap_err();
		assert!(matches!(err, ResourceError::UnsupportedScheme { .. }));
	}
}
