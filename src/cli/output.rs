use std::collections::BTreeMap;
use std::io::{self, Write};

use anyhow::Result;
use resload::Properties;

use super::OutputFormat;

/// Render properties as sorted, escaped `key=value` lines.
pub(crate) fn format_properties_plain(properties: &Properties) -> String {
	properties.to_text()
}

/// Render properties as a pretty JSON object with sorted keys.
pub(crate) fn format_properties_json(properties: &Properties) -> Result<String> {
	let sorted: BTreeMap<&str, &str> = properties.iter().collect();
	Ok(serde_json::to_string_pretty(&sorted)?)
}

/// Print properties in the chosen format.
pub(crate) fn print_properties(properties: &Properties, format: OutputFormat) -> Result<()> {
	match format {
		OutputFormat::Plain => print!("{}", format_properties_plain(properties)),
		OutputFormat::Json => println!("{}", format_properties_json(properties)?),
	}
	Ok(())
}

/// Print lines prefixed with right-aligned line numbers.
pub(crate) fn print_lines(lines: &[String]) -> Result<()> {
	let width = lines.len().to_string().len();
	let mut out = io::stdout().lock();
	for (index, line) in lines.iter().enumerate() {
		writeln!(out, "{:>width$}  {line}", index + 1)?;
	}
	Ok(())
}
