use std::str::FromStr;

use log::LevelFilter;
use pickbox::tui::theme;
use pickbox::{Theme, ViewIds};

use super::{ConfigError, ConfigSources};

pub(super) fn validate_label(label: &str, sources: &ConfigSources) -> Result<(), ConfigError> {
	if label.trim().is_empty() {
		return Err(ConfigError::BlankLabel {
			origin: sources.source_for_label(),
		});
	}
	Ok(())
}

pub(super) fn validate_ids(ids: &ViewIds) -> Result<(), ConfigError> {
	let fields = [
		("ui.ids.input_id", &ids.input_id),
		("ui.ids.toggle_id", &ids.toggle_id),
		("ui.ids.listbox_id", &ids.listbox_id),
		("ui.ids.option_id_prefix", &ids.option_id_prefix),
	];
	for (key, value) in fields {
		if value.trim().is_empty() || value.chars().any(char::is_whitespace) {
			return Err(ConfigError::InvalidId {
				key,
				value: value.clone(),
			});
		}
	}
	Ok(())
}

pub(super) fn resolve_theme(name: &str, sources: &ConfigSources) -> Result<Theme, ConfigError> {
	theme::by_name(name).ok_or_else(|| {
		ConfigError::unknown_theme(name, sources.source_for_theme(), &theme::names())
	})
}

pub(super) fn resolve_log_level(
	level: &str,
	sources: &ConfigSources,
) -> Result<LevelFilter, ConfigError> {
	LevelFilter::from_str(level).map_err(|_| ConfigError::UnknownLogLevel {
		level: level.to_string(),
		origin: sources.source_for_log_level(),
	})
}
