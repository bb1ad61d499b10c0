use thiserror::Error;

use super::SettingSource;

/// A setting that cannot configure the picker.
///
/// Each variant names the offending key so the message points at what to
/// edit, whether the value came from a flag, the environment or a file.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
	#[error("`ui.label` from {origin} is blank; the picker needs a visible label")]
	BlankLabel { origin: SettingSource },

	#[error("`{key}` = {value:?} is not usable as an element id (empty or contains whitespace)")]
	InvalidId { key: &'static str, value: String },

	#[error("`ui.theme` = {name:?} from {origin} is not a known theme; available: {available}")]
	UnknownTheme {
		name: String,
		origin: SettingSource,
		available: String,
	},

	#[error(
		"`logging.level` = {level:?} from {origin} is not a log level; expected off, error, warn, info, debug or trace"
	)]
	UnknownLogLevel { level: String, origin: SettingSource },
}

impl ConfigError {
	pub(crate) fn unknown_theme(name: &str, origin: SettingSource, available: &[&str]) -> Self {
		Self::UnknownTheme {
			name: name.to_string(),
			origin,
			available: available.join(", "),
		}
	}
}
