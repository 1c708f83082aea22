use std::path::PathBuf;

use serde::Deserialize;

use super::{Settings, SettingsError};
use crate::encoding::Encoding;

/// Settings exactly as they were deserialised.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawSettings {
	pub(super) resource_path: Vec<PathBuf>,
	pub(super) default_encoding: Option<String>,
}

impl RawSettings {
	pub(super) fn resolve(self) -> Result<Settings, SettingsError> {
		let default_encoding = match self.default_encoding.as_deref().map(str::trim) {
			None | Some("") => Encoding::default(),
			Some(label) => Encoding::for_label(label).ok_or_else(|| {
				SettingsError::UnknownEncoding {
					label: label.to_string(),
				}
			})?,
		};

		let resource_path = self
			.resource_path
			.into_iter()
			.filter(|dir| !dir.as_os_str().is_empty())
			.collect();

		Ok(Settings {
			resource_path,
			default_encoding,
		})
	}
}
