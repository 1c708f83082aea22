use thiserror::Error;

use crate::text::Lines;

/// Errors raised while parsing properties text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
	/// A `\u` escape was not followed by four hexadecimal digits.
	#[error("malformed \\uxxxx escape on line {line}")]
	MalformedUnicodeEscape { line: usize },
}

fn is_blank(ch: char) -> bool {
	matches!(ch, ' ' | '\t' | '\x0c')
}

fn trim_blank_start(line: &str) -> &str {
	line.trim_start_matches(is_blank)
}

/// Whether the line ends in an odd number of backslashes, i.e. continues on
/// the next natural line.
fn continues(line: &str) -> bool {
	line.bytes().rev().take_while(|&byte| byte == b'\\').count() % 2 == 1
}

/// Join natural lines into logical `(line number, text)` entries, dropping
/// blank and comment lines.
pub(super) fn logical_lines(text: &str) -> Vec<(usize, String)> {
	let mut natural = Lines::new(text).enumerate();
	let mut logical = Vec::new();

	while let Some((index, line)) = natural.next() {
		let line = trim_blank_start(line);
		if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
			continue;
		}

		let mut joined = String::new();
		let mut current = line;
		while continues(current) {
			joined.push_str(&current[..current.len() - 1]);
			match natural.next() {
				Some((_, next)) => current = trim_blank_start(next),
				None => {
					current = "";
					break;
				}
			}
		}
		joined.push_str(current);

		logical.push((index + 1, joined));
	}

	logical
}

/// Split one logical line into its unescaped key and value.
pub(super) fn parse_entry(line: &str, number: usize) -> Result<(String, String), ParseError> {
	let chars: Vec<char> = line.chars().collect();
	let len = chars.len();

	let mut key_end = len;
	let mut value_start = len;
	let mut has_separator = false;
	let mut escaped = false;

	for (index, &ch) in chars.iter().enumerate() {
		if !escaped && (ch == '=' || ch == ':') {
			key_end = index;
			value_start = index + 1;
			has_separator = true;
			break;
		}
		if !escaped && is_blank(ch) {
			key_end = index;
			value_start = index + 1;
			break;
		}
		escaped = ch == '\\' && !escaped;
	}

	while let Some(&ch) = chars.get(value_start) {
		if !is_blank(ch) {
			if has_separator || (ch != '=' && ch != ':') {
				break;
			}
			has_separator = true;
		}
		value_start += 1;
	}

	let key = unescape(&chars[..key_end], number)?;
	let value = unescape(&chars[value_start..], number)?;
	Ok((key, value))
}

fn unescape(chars: &[char], number: usize) -> Result<String, ParseError> {
	let mut out = String::with_capacity(chars.len());
	// Consecutive `\uXXXX` escapes are UTF-16 code units; pairs form one char.
	let mut units: Vec<u16> = Vec::new();
	let mut iter = chars.iter();

	while let Some(&ch) = iter.next() {
		if ch == '\\' && iter.as_slice().first() == Some(&'u') {
			iter.next();
			let mut code = 0u16;
			for _ in 0..4 {
				let digit = iter
					.next()
					.and_then(|digit| digit.to_digit(16))
					.ok_or(ParseError::MalformedUnicodeEscape { line: number })?;
				code = code * 16 + digit as u16;
			}
			units.push(code);
			continue;
		}

		flush_units(&mut units, &mut out);
		if ch != '\\' {
			out.push(ch);
			continue;
		}

		match iter.next().copied() {
			Some('t') => out.push('\t'),
			Some('r') => out.push('\r'),
			Some('n') => out.push('\n'),
			Some('f') => out.push('\x0c'),
			Some(other) => out.push(other),
			None => {}
		}
	}
	flush_units(&mut units, &mut out);

	Ok(out)
}

fn flush_units(units: &mut Vec<u16>, out: &mut String) {
	out.extend(
		char::decode_utf16(units.drain(..))
			.map(|unit| unit.unwrap_or(char::REPLACEMENT_CHARACTER)),
	);
}

/// Append `text` escaped so that [`parse_entry`] reads it back unchanged.
///
/// Keys escape every space; values only a leading one.
pub(super) fn escape_into(out: &mut String, text: &str, is_key: bool) {
	for (index, ch) in text.chars().enumerate() {
		match ch {
			'\\' => out.push_str("\\\\"),
			'\t' => out.push_str("\\t"),
			'\n' => out.push_str("\\n"),
			'\r' => out.push_str("\\r"),
			'\x0c' => out.push_str("\\f"),
			'=' | ':' | '#' | '!' => {
				out.push('\\');
				out.push(ch);
			}
			' ' if is_key || index == 0 => out.push_str("\\ "),
			_ => out.push(ch),
		}
	}
}
