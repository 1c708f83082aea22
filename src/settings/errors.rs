use thiserror::Error;

/// Errors raised while reading or validating settings.
#[derive(Debug, Error)]
pub enum SettingsError {
	#[error("failed to read configuration: {0}")]
	Config(#[from] config::ConfigError),

	#[error("invalid default_encoding '{label}'")]
	UnknownEncoding { label: String },
}
