use std::path::PathBuf;

use log::LevelFilter;
use pickbox::{PickerConfig, Theme, ViewIds};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

use super::raw::{LoggingResolution, UiResolution};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub ids: ViewIds,
	pub selected: Option<String>,
	pub initial_query: String,
	pub open: bool,
	pub keep_open: bool,
	pub theme_name: String,
	pub theme: Theme,
	pub hint: String,
	pub log_level: LevelFilter,
	/// Explicit log file; `None` means the data directory default.
	pub log_file: Option<PathBuf>,
}

impl ResolvedConfig {
	pub(super) fn build(
		ui: UiResolution,
		logging: LoggingResolution,
		sources: &ConfigSources,
	) -> Result<Self, ConfigError> {
		validation::validate_label(&ui.ids.label, sources)?;
		validation::validate_ids(&ui.ids)?;
		let theme = validation::resolve_theme(&ui.theme_name, sources)?;
		let log_level = validation::resolve_log_level(&logging.level, sources)?;

		Ok(Self {
			ids: ui.ids,
			selected: ui.selected,
			initial_query: ui.initial_query,
			open: ui.open,
			keep_open: ui.keep_open,
			theme_name: ui.theme_name,
			theme,
			hint: ui.hint,
			log_level,
			log_file: logging.file,
		})
	}

	/// Picker configuration for `options` using these settings.
	pub fn picker_config(&self, options: Vec<String>) -> PickerConfig {
		PickerConfig {
			options,
			ids: self.ids.clone(),
			selected: self.selected.clone(),
			open: self.open,
			initial_query: self.initial_query.clone(),
			theme: self.theme,
			exit_on_select: !self.keep_open,
			hint: self.hint.clone(),
		}
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
