use std::fmt::Write;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects, Style};
use resload::app_dirs;
use resload::settings::{self, SettingsSources};

/// Version banner listing where resources and settings come from.
pub(super) fn long_version() -> &'static str {
	let mut details = format!("resload {}\n", env!("CARGO_PKG_VERSION"));

	let _ = match app_dirs::settings_file() {
		Ok(path) => writeln!(details, "settings file:    {}", path.display()),
		Err(err) => writeln!(details, "settings file:    unavailable ({err})"),
	};

	match settings::load(&SettingsSources::default()) {
		Ok(settings) => {
			let _ = writeln!(details, "default encoding: {}", settings.default_encoding);
			if settings.resource_path.is_empty() {
				let _ = writeln!(details, "resource path:    (none)");
			}
			for (index, dir) in settings.resource_path.iter().enumerate() {
				let label = if index == 0 { "resource path:" } else { "" };
				let _ = writeln!(details, "{label:<18}{}", dir.display());
			}
		}
		Err(err) => {
			let _ = writeln!(details, "settings:         invalid ({err})");
		}
	}

	Box::leak(details.into_boxed_str())
}

/// Colours for help and error output.
pub(super) fn cli_styles() -> Styles {
	let heading = AnsiColor::Blue.on_default().effects(Effects::BOLD | Effects::UNDERLINE);
	Styles::styled()
		.header(heading)
		.usage(heading)
		.literal(AnsiColor::Magenta.on_default().effects(Effects::BOLD))
		.placeholder(Style::new().effects(Effects::ITALIC))
		.error(AnsiColor::Red.on_default().effects(Effects::BOLD))
		.valid(AnsiColor::Green.on_default())
		.invalid(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
}
