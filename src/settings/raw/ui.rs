use pickbox::ViewIds;
use pickbox::ui::DEFAULT_HINT;
use serde::Deserialize;

use crate::cli::CliArgs;

pub(crate) const DEFAULT_THEME: &str = "slate";

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) label: Option<String>,
	pub(super) selected: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) open: Option<bool>,
	pub(super) keep_open: Option<bool>,
	pub(super) theme: Option<String>,
	pub(super) hint: Option<String>,
	pub(super) ids: IdsSection,
}

/// Element identifiers and the accessible name used by the projection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct IdsSection {
	pub(super) accessible_name: Option<String>,
	pub(super) input_id: Option<String>,
	pub(super) toggle_id: Option<String>,
	pub(super) listbox_id: Option<String>,
	pub(super) option_id_prefix: Option<String>,
}

pub(crate) struct UiResolution {
	pub(crate) ids: ViewIds,
	pub(crate) selected: Option<String>,
	pub(crate) initial_query: String,
	pub(crate) open: bool,
	pub(crate) keep_open: bool,
	pub(crate) theme_name: String,
	pub(crate) hint: String,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(label) = cli.label.clone() {
			self.label = Some(label);
		}
		if let Some(selected) = cli.selected.clone() {
			self.selected = Some(selected);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(open) = cli.open {
			self.open = Some(open);
		}
		if let Some(keep_open) = cli.keep_open {
			self.keep_open = Some(keep_open);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		let defaults = ViewIds::default();
		let ids = self.ids;
		let ids = ViewIds {
			label: self.label.unwrap_or(defaults.label),
			accessible_name: ids.accessible_name.unwrap_or(defaults.accessible_name),
			input_id: ids.input_id.unwrap_or(defaults.input_id),
			toggle_id: ids.toggle_id.unwrap_or(defaults.toggle_id),
			listbox_id: ids.listbox_id.unwrap_or(defaults.listbox_id),
			option_id_prefix: ids.option_id_prefix.unwrap_or(defaults.option_id_prefix),
		};

		UiResolution {
			ids,
			selected: self.selected.filter(|value| !value.is_empty()),
			initial_query: self.initial_query.unwrap_or_default(),
			open: self.open.unwrap_or(false),
			keep_open: self.keep_open.unwrap_or(false),
			theme_name: self
				.theme
				.map(|name| name.trim().to_string())
				.unwrap_or_else(|| DEFAULT_THEME.to_string()),
			hint: self.hint.unwrap_or_else(|| DEFAULT_HINT.to_string()),
		}
	}
}
