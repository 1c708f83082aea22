mod cli;

use std::io::{self, Write};

use anyhow::{Context, Result};
use cli::{CliArgs, Command, parse_cli, print_lines, print_properties};
use resload::{ResourceLoader, SettingsSources, load_properties_from_url, settings};
use url::Url;

fn main() -> Result<()> {
	resload::logging::initialize();
	let cli = parse_cli();
	let loader = build_loader(&cli)?;
	run(&loader, cli.command)
}

/// Combine settings from the config files with the CLI resource directories.
fn build_loader(cli: &CliArgs) -> Result<ResourceLoader> {
	let sources = SettingsSources {
		skip_defaults: cli.no_config,
		extra_files: cli.config.clone(),
	};
	let settings = settings::load(&sources).context("failed to load settings")?;

	Ok(cli
		.resource_dirs
		.iter()
		.fold(ResourceLoader::from_settings(&settings), |loader, dir| {
			loader.with_resource_dir(dir)
		}))
}

fn run(loader: &ResourceLoader, command: Command) -> Result<()> {
	match command {
		Command::Cat { name, encoding } => {
			let mut reader = match encoding {
				Some(label) => loader.get_reader_with_encoding(&name, &label)?,
				None => loader.get_reader(&name)?,
			};
			let mut out = io::stdout().lock();
			io::copy(&mut reader, &mut out).with_context(|| format!("failed to read '{name}'"))?;
			out.flush()?;
		}
		Command::Text { name } => println!("{}", loader.load_text_file(&name)?),
		Command::Lines { name } => {
			let mut lines = Vec::new();
			print_lines(loader.load_text_lines(&name, &mut lines)?)?;
		}
		Command::Props { location, format } => {
			let properties = match location_url(&location) {
				Some(url) => load_properties_from_url(&url)?,
				None => loader.load_properties(&location)?,
			};
			print_properties(&properties, format)?;
		}
	}
	Ok(())
}

/// Treat `location` as a URL only when it has a real scheme; `C:\x` is a path.
fn location_url(location: &str) -> Option<Url> {
	Url::parse(location)
		.ok()
		.filter(|url| url.scheme().len() > 1)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn urls_and_paths_are_told_apart() {
		assert!(location_url("file:///etc/app.properties").is_some());
		assert!(location_url("https://example.org/app.properties").is_some());
		assert!(location_url("config/app.properties").is_none());
		assert!(location_url("C:\\config\\app.properties").is_none());
	}
}
