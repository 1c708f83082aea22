//! Character encodings and the decoding reader used for text resources.
//!
//! [`TextReader`] turns a byte stream in any supported [`Encoding`] into a
//! stream of UTF-8 bytes, so the usual `BufRead` machinery can be layered on
//! top of it.

use std::fmt;
use std::io::{self, Read};
use std::str::FromStr;

use crate::error::ResourceError;

const CHUNK_SIZE: usize = 8 * 1024;

/// Encodings a text resource may be stored in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
	#[default]
	Utf8,
	Ascii,
	Latin1,
	Utf16Be,
	Utf16Le,
	/// UTF-16 with byte-order detection; big-endian when no BOM is present.
	Utf16,
}

impl Encoding {
	/// Look up an encoding by label, ignoring case and the usual punctuation
	/// differences between aliases (`UTF-8`, `utf8`, `utf_8`).
	pub fn for_label(label: &str) -> Option<Self> {
		let key: String = label
			.trim()
			.chars()
			.filter(|ch| !matches!(ch, '-' | '_' | ' '))
			.map(|ch| ch.to_ascii_lowercase())
			.collect();

		let encoding = match key.as_str() {
			"utf8" | "unicode11utf8" => Self::Utf8,
			"usascii" | "ascii" | "iso646us" | "646" | "cp367" | "ansix3.41968" => Self::Ascii,
			"iso88591" | "latin1" | "l1" | "cp819" | "ibm819" | "88591" => Self::Latin1,
			"utf16be" | "unicodebigunmarked" | "xutf16be" => Self::Utf16Be,
			"utf16le" | "unicodelittleunmarked" => Self::Utf16Le,
			"utf16" | "unicode" => Self::Utf16,
			_ => return None,
		};
		Some(encoding)
	}

	/// Canonical name of the encoding.
	pub fn name(self) -> &'static str {
		match self {
			Self::Utf8 => "UTF-8",
			Self::Ascii => "US-ASCII",
			Self::Latin1 => "ISO-8859-1",
			Self::Utf16Be => "UTF-16BE",
			Self::Utf16Le => "UTF-16LE",
			Self::Utf16 => "UTF-16",
		}
	}
}

impl fmt::Display for Encoding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Encoding {
	type Err = ResourceError;

	fn from_str(label: &str) -> Result<Self, Self::Err> {
		Self::for_label(label).ok_or_else(|| ResourceError::UnsupportedEncoding {
			label: label.to_string(),
		})
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Endian {
	Big,
	Little,
}

/// Decoder state for one stream.
#[derive(Debug)]
enum Decoder {
	Utf8,
	Ascii,
	Latin1,
	Utf16 { endian: Option<Endian> },
}

impl Decoder {
	fn new(encoding: Encoding) -> Self {
		match encoding {
			Encoding::Utf8 => Self::Utf8,
			Encoding::Ascii => Self::Ascii,
			Encoding::Latin1 => Self::Latin1,
			Encoding::Utf16Be => Self::Utf16 {
				endian: Some(Endian::Big),
			},
			Encoding::Utf16Le => Self::Utf16 {
				endian: Some(Endian::Little),
			},
			Encoding::Utf16 => Self::Utf16 { endian: None },
		}
	}

	/// Decode as much of `input` as possible into `out`, returning how many
	/// input bytes were consumed. Unconsumed bytes must be offered again with
	/// the next chunk, or with `last` set once the source is exhausted.
	fn decode(&mut self, input: &[u8], out: &mut String, last: bool) -> usize {
		match self {
			Self::Utf8 => decode_utf8(input, out, last),
			Self::Ascii => {
				out.extend(input.iter().map(|&byte| {
					if byte.is_ascii() {
						byte as char
					} else {
						char::REPLACEMENT_CHARACTER
					}
				}));
				input.len()
			}
			Self::Latin1 => {
				out.extend(input.iter().map(|&byte| byte as char));
				input.len()
			}
			Self::Utf16 { endian } => decode_utf16(endian, input, out, last),
		}
	}
}

fn decode_utf8(input: &[u8], out: &mut String, last: bool) -> usize {
	let mut rest = input;

	loop {
		match std::str::from_utf8(rest) {
			Ok(valid) => {
				out.push_str(valid);
				return input.len();
			}
			Err(err) => {
				let (valid, after) = rest.split_at(err.valid_up_to());
				out.push_str(&String::from_utf8_lossy(valid));

				match err.error_len() {
					Some(len) => {
						out.push(char::REPLACEMENT_CHARACTER);
						rest = &after[len..];
					}
					// Truncated sequence: wait for more input unless there is none.
					None if !last => return input.len() - after.len(),
					None => {
						out.push(char::REPLACEMENT_CHARACTER);
						return input.len();
					}
				}
			}
		}
	}
}

fn decode_utf16(endian: &mut Option<Endian>, input: &[u8], out: &mut String, last: bool) -> usize {
	let mut consumed = 0;

	if endian.is_none() {
		match input {
			[0xFE, 0xFF, ..] => {
				*endian = Some(Endian::Big);
				consumed = 2;
			}
			[0xFF, 0xFE, ..] => {
				*endian = Some(Endian::Little);
				consumed = 2;
			}
			[_] if !last => return 0,
			_ => *endian = Some(Endian::Big),
		}
	}
	let endian = endian.unwrap_or(Endian::Big);

	let body = &input[consumed..];
	let mut units: Vec<u16> = body
		.chunks_exact(2)
		.map(|pair| match endian {
			Endian::Big => u16::from_be_bytes([pair[0], pair[1]]),
			Endian::Little => u16::from_le_bytes([pair[0], pair[1]]),
		})
		.collect();
	let mut used = units.len() * 2;

	if !last {
		// A high surrogate at the end of a chunk waits for its partner.
		if let Some(&unit) = units.last() {
			if (0xD800..=0xDBFF).contains(&unit) {
				units.pop();
				used -= 2;
			}
		}
	}

	out.extend(
		char::decode_utf16(units.iter().copied())
			.map(|unit| unit.unwrap_or(char::REPLACEMENT_CHARACTER)),
	);

	if last && body.len() - used == 1 {
		out.push(char::REPLACEMENT_CHARACTER);
		used += 1;
	}

	consumed + used
}

/// A reader yielding UTF-8 text decoded from an underlying byte stream.
pub struct TextReader<R> {
	inner: R,
	encoding: Encoding,
	decoder: Decoder,
	pending: Vec<u8>,
	decoded: Vec<u8>,
	position: usize,
	finished: bool,
}

impl<R: Read> TextReader<R> {
	pub fn new(inner: R, encoding: Encoding) -> Self {
		Self {
			inner,
			encoding,
			decoder: Decoder::new(encoding),
			pending: Vec::new(),
			decoded: Vec::new(),
			position: 0,
			finished: false,
		}
	}

	pub fn encoding(&self) -> Encoding {
		self.encoding
	}

	pub fn get_ref(&self) -> &R {
		&self.inner
	}

	pub fn into_inner(self) -> R {
		self.inner
	}

	/// Refill `decoded` from the source. Returns `false` at end of input.
	fn fill(&mut self) -> io::Result<bool> {
		let mut text = String::new();

		while text.is_empty() {
			if self.finished {
				return Ok(false);
			}

			let mut chunk = [0u8; CHUNK_SIZE];
			let read = match self.inner.read(&mut chunk) {
				Ok(read) => read,
				Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
				Err(err) => return Err(err),
			};

			let last = read == 0;
			self.finished = last;
			self.pending.extend_from_slice(&chunk[..read]);

			let consumed = self.decoder.decode(&self.pending, &mut text, last);
			self.pending.drain(..consumed);
		}

		self.decoded = text.into_bytes();
		self.position = 0;
		Ok(true)
	}
}

impl<R: Read> Read for TextReader<R> {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		if self.position >= self.decoded.len() && !self.fill()? {
			return Ok(0);
		}

		let available = &self.decoded[self.position..];
		let count = available.len().min(buf.len());
		buf[..count].copy_from_slice(&available[..count]);
		self.position += count;
		Ok(count)
	}
}

impl<R> fmt::Debug for TextReader<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TextReader")
			.field("encoding", &self.encoding)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;

	use super::*;

	/// Hands out one byte per read to exercise chunk boundaries.
	struct Trickle(Cursor<Vec<u8>>);

	impl Read for Trickle {
		fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
			let len = buf.len().min(1);
			self.0.read(&mut buf[..len])
		}
	}

	fn decode_all(bytes: Vec<u8>, encoding: Encoding) -> String {
		let mut text = String::new();
		TextReader::new(Trickle(Cursor::new(bytes)), encoding)
			.read_to_string(&mut text)
			.unwrap();
		text
	}

	#[test]
	fn labels_resolve_case_insensitively() {
		assert_eq!(Encoding::for_label("utf8"), Some(Encoding::Utf8));
		assert_eq!(Encoding::for_label("UTF-8"), Some(Encoding::Utf8));
		assert_eq!(Encoding::for_label("Latin1"), Some(Encoding::Latin1));
		assert_eq!(Encoding::for_label("ISO-8859-1"), Some(Encoding::Latin1));
		assert_eq!(Encoding::for_label("us-ascii"), Some(Encoding::Ascii));
		assert_eq!(Encoding::for_label("UTF-16LE"), Some(Encoding::Utf16Le));
		assert_eq!(Encoding::for_label("klingon"), None);
	}

	#[test]
	fn unknown_label_is_unsupported_encoding() {
		let err = "EBCDIC-XYZ".parse::<Encoding>().unwrap_err();
		assert!(matches!(err, ResourceError::UnsupportedEncoding { label } if label == "EBCDIC-XYZ"));
	}

	#[test]
	fn latin1_maps_bytes_to_code_points() {
		assert_eq!(decode_all(vec![b'c', 0xE9, b'!'], Encoding::Latin1), "cé!");
	}

	#[test]
	fn ascii_replaces_high_bytes() {
		assert_eq!(decode_all(vec![b'a', 0xFF, b'b'], Encoding::Ascii), "a\u{FFFD}b");
	}

	#[test]
	fn utf16_survives_split_surrogates() {
		let bytes: Vec<u8> = "a😀b".encode_utf16().flat_map(u16::to_le_bytes).collect();
		assert_eq!(decode_all(bytes, Encoding::Utf16Le), "a😀b");
	}

	#[test]
	fn utf16_detects_byte_order_mark() {
		let mut bytes = vec![0xFF, 0xFE];
		bytes.extend("hi".encode_utf16().flat_map(u16::to_le_bytes));
		assert_eq!(decode_all(bytes, Encoding::Utf16), "hi");

		let bytes: Vec<u8> = "hi".encode_utf16().flat_map(u16::to_be_bytes).collect();
		assert_eq!(decode_all(bytes, Encoding::Utf16), "hi");
	}

	#[test]
	fn utf16_dangling_byte_becomes_replacement() {
		assert_eq!(decode_all(vec![0x00, b'x', 0x00], Encoding::Utf16Be), "x\u{FFFD}");
	}

	#[test]
	fn utf8_sequences_survive_chunk_boundaries() {
		assert_eq!(decode_all("grüße".as_bytes().to_vec(), Encoding::Utf8), "grüße");
	}

	#[test]
	fn malformed_utf8_becomes_replacement() {
		assert_eq!(decode_all(vec![b'a', 0xFF, b'b', 0xC3], Encoding::Utf8), "a\u{FFFD}b\u{FFFD}");
	}
}
