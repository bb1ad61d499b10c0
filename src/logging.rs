//! File logging for the picker.
//!
//! The terminal is owned by the UI while the picker runs, so records go to a
//! file through `simplelog`'s [`WriteLogger`].

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::app_dirs;

pub const LOG_FILE_NAME: &str = "pickbox.log";

/// Default log file location inside the data directory.
pub fn default_log_path() -> Result<PathBuf> {
	Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME))
}

/// Install a file logger at `path`. `LevelFilter::Off` installs nothing.
pub fn initialize(level: LevelFilter, path: &Path) -> Result<()> {
	if level == LevelFilter::Off {
		return Ok(());
	}

	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	let file = File::create(path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	let config = ConfigBuilder::new()
		.add_filter_allow_str(env!("CARGO_CRATE_NAME"))
		.build();
	WriteLogger::init(level, config, file).context("failed to install logger")?;
	log::info!("logging to {} at {level}", path.display());
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn off_level_creates_no_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("nested").join(LOG_FILE_NAME);
		initialize(LevelFilter::Off, &path).unwrap();
		assert!(!path.exists());
	}
}
