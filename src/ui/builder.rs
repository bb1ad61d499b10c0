use anyhow::Result;

use super::config::PickerConfig;
use super::runtime;
use super::state::PickOutcome;
use crate::tui::{Theme, theme};
use crate::view::ViewIds;

/// A small builder for configuring the interactive picker.
/// This presents an fzf-like API for setting the label, the initial
/// selection and the theme before running the combobox in the terminal.
#[derive(Debug, Clone)]
pub struct PickerBuilder {
	config: PickerConfig,
}

impl PickerBuilder {
	/// Create a picker over the provided options.
	pub fn new<I, S>(options: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			config: PickerConfig {
				options: options.into_iter().map(Into::into).collect(),
				..PickerConfig::default()
			},
		}
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.config.ids.label = label.into();
		self
	}

	pub fn with_ids(mut self, ids: ViewIds) -> Self {
		self.config.ids = ids;
		self
	}

	pub fn with_selected(mut self, value: impl Into<String>) -> Self {
		self.config.selected = Some(value.into());
		self
	}

	pub fn with_open(mut self, open: bool) -> Self {
		self.config.open = open;
		self
	}

	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.config.initial_query = query.into();
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.config.theme = theme;
		self
	}

	/// Use a built-in theme; unknown names keep the current theme.
	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = theme::by_name(name) {
			self.config.theme = theme;
		}
		self
	}

	pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
		self.config.hint = hint.into();
		self
	}

	/// Keep the picker running after a commit until the user leaves.
	pub fn exit_on_select(mut self, exit: bool) -> Self {
		self.config.exit_on_select = exit;
		self
	}

	pub fn config(&self) -> &PickerConfig {
		&self.config
	}

	pub fn into_config(self) -> PickerConfig {
		self.config
	}

	/// Run the interactive picker with the configured options.
	pub fn run(self) -> Result<PickOutcome> {
		runtime::run(self.config)
	}
}

impl From<PickerConfig> for PickerBuilder {
	fn from(config: PickerConfig) -> Self {
		Self { config }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tui::theme::{LIGHT, SLATE};

	#[test]
	fn builder_collects_configuration() {
		let builder = PickerBuilder::new(["apple", "banana"])
			.with_label("Select a fruit:")
			.with_selected("banana")
			.with_open(true)
			.with_initial_query("an")
			.with_theme_name("light")
			.exit_on_select(false);

		let config = builder.config();
		assert_eq!(config.options, vec!["apple", "banana"]);
		assert_eq!(config.ids.label, "Select a fruit:");
		assert_eq!(config.selected.as_deref(), Some("banana"));
		assert!(config.open);
		assert_eq!(config.initial_query, "an");
		assert_eq!(config.theme, LIGHT);
		assert!(!config.exit_on_select);
	}

	#[test]
	fn unknown_theme_name_is_ignored() {
		let config = PickerBuilder::new(Vec::<String>::new())
			.with_theme_name("does-not-exist")
			.into_config();
		assert_eq!(config.theme, SLATE);
	}
}
