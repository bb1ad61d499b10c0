//! Render tree derived from combobox state.
//!
//! [`project`] is a pure function of the state and the configured
//! [`ViewIds`]. The terminal renderer draws the resulting [`ComboboxView`];
//! other hosts can consume it directly since it serializes with `serde`.

use serde::{Deserialize, Serialize};

use crate::combobox::ComboState;

/// Identifiers and accessible names used when projecting the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewIds {
	pub label: String,
	pub accessible_name: String,
	pub input_id: String,
	pub toggle_id: String,
	pub listbox_id: String,
	/// Rows are identified as `{option_id_prefix}-{index}`.
	pub option_id_prefix: String,
}

impl Default for ViewIds {
	fn default() -> Self {
		Self {
			label: "Select an option:".to_string(),
			accessible_name: "Options".to_string(),
			input_id: "pickbox-input".to_string(),
			toggle_id: "pickbox-toggle".to_string(),
			listbox_id: "pickbox-listbox".to_string(),
			option_id_prefix: "pickbox-option".to_string(),
		}
	}
}

impl ViewIds {
	#[must_use]
	pub fn option_id(&self, index: usize) -> String {
		format!("{}-{index}", self.option_id_prefix)
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComboboxView {
	pub label: LabelView,
	pub input: InputView,
	pub toggle: ToggleView,
	pub listbox: ListboxView,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LabelView {
	pub text: String,
	pub for_id: String,
}

/// The text field acting as the combobox (`role="combobox"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InputView {
	pub id: String,
	pub accessible_name: String,
	pub value: String,
	pub expanded: bool,
	pub controls: String,
	/// Id of the highlighted row, if any.
	pub active_descendant: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ToggleView {
	pub id: String,
	pub accessible_name: String,
	pub expanded: bool,
	pub controls: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListboxView {
	pub id: String,
	pub accessible_name: String,
	pub visible: bool,
	pub options: Vec<OptionView>,
}

/// One entry of the filtered list (`role="option"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OptionView {
	pub id: String,
	pub index: usize,
	pub label: String,
	/// Keyboard highlight.
	pub active: bool,
	/// Label equals the committed selection.
	pub selected: bool,
}

impl ListboxView {
	pub fn active(&self) -> Option<&OptionView> {
		self.options.iter().find(|option| option.active)
	}
}

/// Derive the render tree for `state`.
#[must_use]
pub fn project(state: &ComboState, ids: &ViewIds) -> ComboboxView {
	let expanded = state.is_open();
	let options = state
		.filtered()
		.iter()
		.enumerate()
		.map(|(index, label)| OptionView {
			id: ids.option_id(index),
			index,
			label: label.clone(),
			active: state.active_index() == Some(index),
			selected: state.selected() == Some(label.as_str()),
		})
		.collect();

	ComboboxView {
		label: LabelView {
			text: ids.label.clone(),
			for_id: ids.input_id.clone(),
		},
		input: InputView {
			id: ids.input_id.clone(),
			accessible_name: ids.accessible_name.clone(),
			value: state.input_value().to_string(),
			expanded,
			controls: ids.listbox_id.clone(),
			active_descendant: state.active_index().map(|index| ids.option_id(index)),
		},
		toggle: ToggleView {
			id: ids.toggle_id.clone(),
			accessible_name: ids.accessible_name.clone(),
			expanded,
			controls: ids.listbox_id.clone(),
		},
		listbox: ListboxView {
			id: ids.listbox_id.clone(),
			accessible_name: ids.accessible_name.clone(),
			visible: expanded,
			options,
		},
	}
}

#[cfg(test)]
mod tests;
