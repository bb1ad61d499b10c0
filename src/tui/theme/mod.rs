mod builtins;
mod types;

pub use builtins::{LIGHT, MONO, SLATE};
pub use types::{Theme, ThemeDefinition};

use builtins::BUILT_IN_DEFINITIONS;

/// Return the default theme.
#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

/// Look up a built-in theme by name or alias, ignoring case and `_`/`-`.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = normalize_name(name);
	BUILT_IN_DEFINITIONS
		.iter()
		.find(|definition| {
			normalize_name(definition.name) == wanted
				|| definition
					.aliases
					.iter()
					.any(|alias| normalize_name(alias) == wanted)
		})
		.map(|definition| definition.theme)
}

/// Canonical names of the built-in themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILT_IN_DEFINITIONS
		.iter()
		.map(|definition| definition.name)
		.collect()
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase().replace('_', "-")
}
