use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};

use crate::cli::CliArgs;
use pickbox::app_dirs;

/// Project-local file names checked in the working directory, in order.
const LOCAL_CONFIG_FILES: [&str; 2] = [".pickbox.toml", "pickbox.toml"];

/// One configuration file in the merge order; later layers win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ConfigLayer {
	pub(super) path: PathBuf,
	/// Explicit `--config` files must exist; discovered ones may not.
	pub(super) required: bool,
}

/// Build a [`Config`] from the file layers followed by `PICKBOX__*` variables.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let user_file = app_dirs::user_config_file().ok();
	let working_dir = env::current_dir().ok();

	let layers = config_layers(cli, user_file, working_dir.as_deref());
	let builder = layers.into_iter().fold(Config::builder(), |builder, layer| {
		builder.add_source(File::from(layer.path).required(layer.required))
	});

	builder
		.add_source(
			Environment::with_prefix("pickbox")
				.prefix_separator("__")
				.separator("__")
				.try_parsing(true),
		)
		.build()
		.map_err(|err| match err {
			ConfigError::Frozen => anyhow!("configuration builder is frozen"),
			other => other.into(),
		})
}

/// The user file, then project-local files, then each `--config` in order.
/// `--no-config` drops the discovered files but keeps explicit ones.
pub(super) fn config_layers(
	cli: &CliArgs,
	user_file: Option<PathBuf>,
	working_dir: Option<&Path>,
) -> Vec<ConfigLayer> {
	let mut layers = Vec::new();

	if !cli.no_config {
		let local = working_dir
			.into_iter()
			.flat_map(|dir| LOCAL_CONFIG_FILES.iter().map(move |name| dir.join(name)));
		layers.extend(user_file.into_iter().chain(local).map(|path| ConfigLayer {
			path,
			required: false,
		}));
	}

	layers.extend(cli.config.iter().map(|path| ConfigLayer {
		path: path.clone(),
		required: true,
	}));
	layers
}

#[cfg(test)]
mod tests {
	use clap::Parser;

	use super::*;

	fn paths(layers: &[ConfigLayer]) -> Vec<(&Path, bool)> {
		layers
			.iter()
			.map(|layer| (layer.path.as_path(), layer.required))
			.collect()
	}

	#[test]
	fn discovered_files_come_before_explicit_ones() {
		let cli = CliArgs::parse_from(["pickbox", "-c", "extra.toml"]);
		let layers = config_layers(
			&cli,
			Some(PathBuf::from("/home/me/.config/pickbox/config.toml")),
			Some(Path::new("/work")),
		);

		assert_eq!(
			paths(&layers),
			vec![
				(Path::new("/home/me/.config/pickbox/config.toml"), false),
				(Path::new("/work/.pickbox.toml"), false),
				(Path::new("/work/pickbox.toml"), false),
				(Path::new("extra.toml"), true),
			]
		);
	}

	#[test]
	fn no_config_keeps_only_explicit_files() {
		let cli = CliArgs::parse_from(["pickbox", "-n", "-c", "a.toml", "-c", "b.toml"]);
		let layers = config_layers(
			&cli,
			Some(PathBuf::from("/cfg/config.toml")),
			Some(Path::new("/work")),
		);

		assert_eq!(
			paths(&layers),
			vec![(Path::new("a.toml"), true), (Path::new("b.toml"), true)]
		);
	}

	#[test]
	fn missing_locations_are_skipped() {
		let cli = CliArgs::parse_from(["pickbox"]);
		assert!(config_layers(&cli, None, None).is_empty());
	}
}
