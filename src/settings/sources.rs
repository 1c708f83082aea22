use std::env;
use std::path::PathBuf;

use config::{Config, Environment, File};

use super::{SettingsError, SettingsSources};
use crate::app_dirs;

const ENV_PREFIX: &str = "RESLOAD";

/// Build a [`Config`] from the default locations, the extra files and the
/// environment.
pub(super) fn build_config(sources: &SettingsSources) -> Result<Config, SettingsError> {
	let mut builder = Config::builder();

	if !sources.skip_defaults {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &sources.extra_files {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		Environment::with_prefix(ENV_PREFIX)
			.prefix_separator("_")
			.separator("__")
			.try_parsing(true)
			.list_separator(",")
			.with_list_parse_key("resource_path"),
	);

	Ok(builder.build()?)
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(path) = app_dirs::settings_file() {
		files.push(path);
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".resload.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use std::fs;

	use tempfile::tempdir;

	use super::*;
	use crate::encoding::Encoding;
	use crate::settings::load;

	#[test]
	fn default_files_include_current_directory_variant() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".resload.toml")));
	}

	#[test]
	fn extra_files_are_merged() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("custom.toml");
		fs::write(
			&path,
			"resource_path = [\"/opt/app/resources\"]\ndefault_encoding = \"ISO-8859-1\"\n",
		)
		.unwrap();

		let settings = load(&SettingsSources {
			skip_defaults: true,
			extra_files: vec![path],
		})
		.unwrap();

		assert_eq!(settings.resource_path, vec![PathBuf::from("/opt/app/resources")]);
		assert_eq!(settings.default_encoding, Encoding::Latin1);
	}

	#[test]
	fn single_underscore_environment_variables_are_read() {
		let old = env::var_os("RESLOAD_DEFAULT_ENCODING");
		// SAFETY: Setting a variable only this test reads.
		unsafe {
			env::set_var("RESLOAD_DEFAULT_ENCODING", "latin1");
		}

		let settings = load(&SettingsSources {
			skip_defaults: true,
			extra_files: Vec::new(),
		});

		// SAFETY: Restoring the value captured at the start of the test.
		unsafe {
			match old {
				Some(value) => env::set_var("RESLOAD_DEFAULT_ENCODING", value),
				None => env::remove_var("RESLOAD_DEFAULT_ENCODING"),
			}
		}

		assert_eq!(settings.unwrap().default_encoding, Encoding::Latin1);
	}

	#[test]
	fn missing_extra_file_is_an_error() {
		let dir = tempdir().unwrap();
		let result = load(&SettingsSources {
			skip_defaults: true,
			extra_files: vec![dir.path().join("absent.toml")],
		});
		assert!(matches!(result, Err(SettingsError::Config(_))));
	}
}
