//! Where `resload` keeps its user-level settings.
//!
//! `RESLOAD_CONFIG_DIR` replaces the platform configuration directory when it
//! is set to a non-empty value.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;

const CONFIG_DIR_ENV: &str = "RESLOAD_CONFIG_DIR";
const SETTINGS_FILE_NAME: &str = "resources.toml";

/// The directory holding the user settings file.
pub fn config_dir() -> Result<PathBuf> {
	match env::var_os(CONFIG_DIR_ENV) {
		Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
		_ => ProjectDirs::from("org", "resload", "resload")
			.map(|dirs| dirs.config_local_dir().to_path_buf())
			.context("no home directory to place resload settings in"),
	}
}

/// The user settings file, whether or not it exists.
pub fn settings_file() -> Result<PathBuf> {
	Ok(config_dir()?.join(SETTINGS_FILE_NAME))
}

#[cfg(test)]
mod tests {
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn override_directory_holds_the_settings_file() {
		let dir = tempdir().unwrap();
		let old = env::var_os(CONFIG_DIR_ENV);
		// SAFETY: Adjusting the override for the duration of this test.
		unsafe {
			env::set_var(CONFIG_DIR_ENV, dir.path());
		}

		let resolved = (config_dir().unwrap(), settings_file().unwrap());

		// SAFETY: Restoring the value captured at the start of the test.
		unsafe {
			match old {
				Some(value) => env::set_var(CONFIG_DIR_ENV, value),
				None => env::remove_var(CONFIG_DIR_ENV),
			}
		}

		assert_eq!(resolved.0, dir.path());
		assert_eq!(resolved.1, dir.path().join("resources.toml"));
	}
}
