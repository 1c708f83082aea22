use std::fmt;
use std::fs::File;
use std::io::{self, Cursor, Read};

/// An open resource. The caller owns it; dropping it releases the handle.
pub enum ResourceStream {
	/// A file opened from the filesystem or from a resource directory.
	File(File),
	/// A resource embedded in the program.
	Bundled {
		name: String,
		bytes: Cursor<&'static [u8]>,
	},
	/// The body of a remote response.
	Remote(Box<dyn Read + Send + Sync>),
}

impl ResourceStream {
	pub(crate) fn bundled(name: &str, bytes: &'static [u8]) -> Self {
		Self::Bundled {
			name: name.to_string(),
			bytes: Cursor::new(bytes),
		}
	}

	/// Whether the stream came from an embedded bundle.
	pub fn is_bundled(&self) -> bool {
		matches!(self, Self::Bundled { .. })
	}
}

impl Read for ResourceStream {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		match self {
			Self::File(file) => file.read(buf),
			Self::Bundled { bytes, .. } => bytes.read(buf),
			Self::Remote(body) => body.read(buf),
		}
	}
}

impl fmt::Debug for ResourceStream {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::File(file) => f.debug_tuple("File").field(file).finish(),
			Self::Bundled { name, bytes } => f
				.debug_struct("Bundled")
				.field("name", name)
				.field("len", &bytes.get_ref().len())
				.finish(),
			Self::Remote(_) => f.write_str("Remote(..)"),
		}
	}
}
