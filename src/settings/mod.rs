//! Loader settings.
//!
//! Settings come from, lowest precedence first, `<config dir>/resources.toml`,
//! `./.resload.toml`, any extra files the caller names, and `RESLOAD_*`
//! environment variables. They are deserialised into a raw form and then
//! validated into [`Settings`].

mod errors;
mod raw;
mod sources;

use std::path::PathBuf;
use std::sync::OnceLock;

use log::warn;

use crate::encoding::Encoding;

pub use errors::SettingsError;

/// Validated settings for a [`ResourceLoader`](crate::ResourceLoader).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
	/// Directories searched for bundled resources before embedded bundles.
	pub resource_path: Vec<PathBuf>,
	/// Encoding for text readers opened without an explicit encoding.
	pub default_encoding: Encoding,
}

/// Which configuration files to read.
#[derive(Clone, Debug, Default)]
pub struct SettingsSources {
	/// Skip `resources.toml` and `.resload.toml`.
	pub skip_defaults: bool,
	/// Additional files, each of which must exist.
	pub extra_files: Vec<PathBuf>,
}

/// Load and validate settings from `sources`.
pub fn load(sources: &SettingsSources) -> Result<Settings, SettingsError> {
	let config = sources::build_config(sources)?;
	let raw: raw::RawSettings = config.try_deserialize()?;
	raw.resolve()
}

/// Settings from the default sources, loaded once per process.
///
/// A broken configuration is reported and replaced by defaults so that the
/// crate-level loading functions keep working.
pub(crate) fn global() -> &'static Settings {
	static SETTINGS: OnceLock<Settings> = OnceLock::new();
	SETTINGS.get_or_init(|| {
		load(&SettingsSources::default()).unwrap_or_else(|err| {
			warn!("ignoring resload settings: {err}");
			Settings::default()
		})
	})
}
