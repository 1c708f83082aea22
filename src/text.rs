//! Line handling shared by the text loaders and the properties parser.
//!
//! A line ends at `\n`, `\r\n` or a lone `\r`; the terminator is never part
//! of the line. A final line without a terminator still counts.

use std::io::{self, BufRead};

/// Iterator over the lines of an in-memory string.
#[derive(Clone, Debug)]
pub struct Lines<'a> {
	rest: &'a str,
}

impl<'a> Lines<'a> {
	pub fn new(text: &'a str) -> Self {
		Self { rest: text }
	}
}

impl<'a> Iterator for Lines<'a> {
	type Item = &'a str;

	fn next(&mut self) -> Option<&'a str> {
		if self.rest.is_empty() {
			return None;
		}

		match self.rest.find(['\n', '\r']) {
			Some(end) => {
				let line = &self.rest[..end];
				let skip = if self.rest[end..].starts_with("\r\n") { 2 } else { 1 };
				self.rest = &self.rest[end + skip..];
				Some(line)
			}
			None => Some(std::mem::take(&mut self.rest)),
		}
	}
}

/// Feed every line of `reader` to `sink`, in order.
///
/// Lines handed to `sink` before an I/O failure stay delivered; the failure
/// is returned as-is.
pub fn read_lines<R: BufRead>(mut reader: R, mut sink: impl FnMut(String)) -> io::Result<()> {
	let mut buf = Vec::new();

	loop {
		buf.clear();
		if reader.read_until(b'\n', &mut buf)? == 0 {
			return Ok(());
		}

		let terminated = buf.last() == Some(&b'\n');
		if terminated {
			buf.pop();
			if buf.last() == Some(&b'\r') {
				buf.pop();
			}
		}

		let text = String::from_utf8(std::mem::take(&mut buf))
			.map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;

		// `read_until` only stops at `\n`, so lone `\r` breaks are split here.
		let mut pieces: Vec<&str> = text.split('\r').collect();
		if !terminated && text.ends_with('\r') {
			pieces.pop();
		}
		for piece in pieces {
			sink(piece.to_string());
		}
	}
}
