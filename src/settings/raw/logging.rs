use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::CliArgs;

pub(crate) const DEFAULT_LOG_LEVEL: &str = "off";

/// Logging configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) level: Option<String>,
	pub(super) file: Option<PathBuf>,
}

pub(crate) struct LoggingResolution {
	pub(crate) level: String,
	pub(crate) file: Option<PathBuf>,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(level) = cli.log_level {
			self.level = Some(level.as_str().to_string());
		}
	}

	pub(super) fn finalize(self) -> LoggingResolution {
		LoggingResolution {
			level: self
				.level
				.map(|level| level.trim().to_string())
				.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
			file: self.file,
		}
	}
}
