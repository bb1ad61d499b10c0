//! Where `pickbox` looks for its configuration and writes its log.
//!
//! Each location can be redirected with an environment variable; otherwise the
//! platform directories from the `directories` crate are used.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

/// Name of the user-level configuration file inside [`AppDir::Config`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// The directories the picker touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppDir {
	/// Holds `config.toml`.
	Config,
	/// Holds `pickbox.log`.
	Data,
}

impl AppDir {
	/// Environment variable that overrides this directory.
	pub fn env_var(self) -> &'static str {
		match self {
			Self::Config => "PICKBOX_CONFIG_DIR",
			Self::Data => "PICKBOX_DATA_DIR",
		}
	}

	/// The override if set and non-empty, else the platform location.
	pub fn resolve(self) -> Result<PathBuf> {
		if let Some(dir) = override_dir(env::var_os(self.env_var())) {
			return Ok(dir);
		}

		let dirs = ProjectDirs::from("io", "albo", "pickbox").ok_or_else(|| {
			anyhow!("no home directory to place the pickbox {:?} directory in", self)
		})?;
		Ok(match self {
			Self::Config => dirs.config_local_dir(),
			Self::Data => dirs.data_local_dir(),
		}
		.to_path_buf())
	}
}

fn override_dir(value: Option<OsString>) -> Option<PathBuf> {
	value.filter(|value| !value.is_empty()).map(PathBuf::from)
}

pub fn get_config_dir() -> Result<PathBuf> {
	AppDir::Config.resolve()
}

pub fn get_data_dir() -> Result<PathBuf> {
	AppDir::Data.resolve()
}

/// The user-level `config.toml`, whether or not it exists.
pub fn user_config_file() -> Result<PathBuf> {
	Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}
