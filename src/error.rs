use std::io;

use thiserror::Error;

/// Errors produced while resolving, opening or reading a resource.
#[derive(Debug, Error)]
pub enum ResourceError {
	/// A required argument was missing or empty. No I/O was attempted.
	#[error("invalid argument: {0}")]
	InvalidArgument(&'static str),

	/// Neither the filesystem nor any bundle produced the resource.
	#[error("no file or resource found: {name}")]
	NotFound {
		name: String,
		#[source]
		source: Option<io::Error>,
	},

	/// The requested character encoding is not known.
	#[error("unsupported encoding '{label}'")]
	UnsupportedEncoding { label: String },

	/// A URL used a scheme that cannot be opened.
	#[error("unsupported URL scheme in '{url}'")]
	UnsupportedScheme { url: String },

	/// The remote end of an HTTP request failed.
	#[cfg(feature = "http")]
	#[error("HTTP request failed: {0}")]
	Http(#[from] Box<ureq::Error>),

	/// A convenience loader failed; carries the location it was asked for.
	#[error("'{location}' could not be loaded")]
	Processing {
		location: String,
		#[source]
		source: Box<ResourceError>,
	},

	#[error("I/O error: {0}")]
	Io(#[from] io::Error),
}

impl ResourceError {
	pub(crate) fn not_found(name: impl Into<String>) -> Self {
		Self::NotFound {
			name: name.into(),
			source: None,
		}
	}

	/// Wrap `self` once with the location a convenience loader was given.
	///
	/// Argument errors never touched the resource and pass through as-is.
	pub(crate) fn processing(self, location: impl Into<String>) -> Self {
		match self {
			Self::InvalidArgument(_) => self,
			other => Self::Processing {
				location: location.into(),
				source: Box::new(other),
			},
		}
	}

	/// Whether this error, or the error it wraps, means "nothing was found".
	pub fn is_not_found(&self) -> bool {
		match self {
			Self::NotFound { .. } => true,
			Self::Processing { source, .. } => source.is_not_found(),
			_ => false,
		}
	}
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = ResourceError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn not_found_message_names_the_resource() {
		let err = ResourceError::not_found("conf/app.properties");
		assert_eq!(
			err.to_string(),
			"no file or resource found: conf/app.properties"
		);
		assert!(err.is_not_found());
	}

	#[test]
	fn processing_wraps_io_failures_once() {
		let err = ResourceError::not_found("x").processing("x");
		assert_eq!(err.to_string(), "'x' could not be loaded");
		assert!(err.is_not_found());
		assert!(std::error::Error::source(&err).is_some());
	}

	#[test]
	fn processing_leaves_argument_errors_alone() {
		let err = ResourceError::InvalidArgument("'name' must not be empty").processing("");
		assert!(matches!(err, ResourceError::InvalidArgument(_)));
	}
}
