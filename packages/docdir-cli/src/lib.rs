use std::path::PathBuf;

use clap::{
	Args,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};

/// Crate version, git revision and target triple, as printed by `--version`.
pub const VERSION: &str = concat!(
	env!("CARGO_PKG_VERSION"),
	"-",
	env!("VERGEN_GIT_SHA"),
	"-",
	env!("VERGEN_CARGO_TARGET_TRIPLE"),
);

/// Flags every docdir binary takes to locate its TOML configuration.
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
	/// Path to the docdir TOML configuration.
	#[arg(long, short = 'c', value_name = "FILE", env = "DOCDIR_CONFIG")]
	pub config: PathBuf,
}

pub fn styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Cyan.on_default() | Effects::BOLD)
		.usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
		.literal(AnsiColor::Green.on_default() | Effects::BOLD)
		.placeholder(AnsiColor::Yellow.on_default())
		.error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[cfg(test)]
mod tests {
	use clap::Parser;

	use super::*;

	#[derive(Debug, Parser)]
	#[command(version = VERSION, styles = styles())]
	struct Cli {
		#[command(flatten)]
		config: ConfigArgs,
	}

	#[test]
	fn config_flag_accepts_short_and_long_forms() {
		let short = Cli::try_parse_from(["docdir", "-c", "docdir.toml"]).expect("short flag");
		let long =
			Cli::try_parse_from(["docdir", "--config", "/etc/docdir.toml"]).expect("long flag");

		assert_eq!(short.config.config, PathBuf::from("docdir.toml"));
		assert_eq!(long.config.config, PathBuf::from("/etc/docdir.toml"));
	}

	#[test]
	fn version_carries_the_package_version() {
		assert!(VERSION.starts_with(env!("CARGO_PKG_VERSION")));
	}
}
