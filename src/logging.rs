//! Log output for the `resload` binary and for embedders that want it.
//!
//! The library itself only emits records through the `log` facade.

use env_logger::Env;

/// Environment variable holding the log filter, e.g. `RESLOAD_LOG=debug`.
pub const FILTER_ENV: &str = "RESLOAD_LOG";

/// Install an `env_logger` backend. Does nothing if a logger already exists.
pub fn initialize() {
	let env = Env::default()
		.filter_or(FILTER_ENV, "warn")
		.write_style("RESLOAD_LOG_STYLE");
	let _ = env_logger::Builder::from_env(env)
		.format_timestamp(None)
		.try_init();
}
