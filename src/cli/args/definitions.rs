use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser, Subcommand, ValueEnum};

use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `resload` binary.
#[derive(Parser, Debug)]
#[command(
	name = "resload",
	version,
	long_version = long_version(),
	about = "Resolve files or bundled resources and print their contents",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "RESLOAD_CONFIG",
		action = ArgAction::Append,
		global = true,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		global = true,
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'd',
		long = "resource-dir",
		value_name = "DIR",
		action = ArgAction::Append,
		global = true,
		help = "Directory searched for resources after the configured ones (repeatable)"
	)]
	pub(crate) resource_dirs: Vec<PathBuf>,
	#[command(subcommand)]
	pub(crate) command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub(crate) enum Command {
	/// Copy the decoded text of a resource to stdout.
	Cat {
		#[arg(value_name = "NAME")]
		name: String,
		#[arg(
			short,
			long,
			value_name = "ENCODING",
			help = "Character encoding of the resource (default: configured encoding)"
		)]
		encoding: Option<String>,
	},
	/// Print a resource with all of its lines joined together.
	Text {
		#[arg(value_name = "NAME")]
		name: String,
	},
	/// Print the lines of a resource, numbered.
	Lines {
		#[arg(value_name = "NAME")]
		name: String,
	},
	/// Print the properties stored at a resource name or URL.
	Props {
		#[arg(value_name = "LOCATION")]
		location: String,
		#[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
		format: OutputFormat,
	},
}

/// Output formats supported by the `props` command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
