use std::sync::mpsc::Receiver;

use serde::Serialize;

use super::config::PickerConfig;
use crate::combobox::{Combobox, SelectionChanged};
use crate::tui::{ComboboxLayout, Theme};

/// Result of an interactive picker session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickOutcome {
	/// Whether the session ended with a selection.
	pub accepted: bool,
	pub selection: Option<String>,
	/// Filter text at the time the session ended.
	pub query: String,
}

/// A combobox hosted in the terminal.
pub struct App {
	pub combobox: Combobox,
	pub theme: Theme,
	pub(crate) hint: String,
	pub(crate) layout: ComboboxLayout,
	pub(crate) exit_on_select: bool,
	pub(crate) last_selection: Option<String>,
	selections: Receiver<SelectionChanged>,
}

impl App {
	pub fn new(config: PickerConfig) -> Self {
		let PickerConfig {
			options,
			ids,
			selected,
			open,
			initial_query,
			theme,
			exit_on_select,
			hint,
		} = config;

		let mut combobox = Combobox::new(options).with_ids(ids);
		if let Some(value) = selected {
			combobox.set_selected(value);
		}
		if !initial_query.is_empty() {
			combobox.input(&initial_query);
		}
		combobox.set_open(open || !initial_query.is_empty());
		let selections = combobox.subscribe_channel();

		Self {
			combobox,
			theme,
			hint,
			layout: ComboboxLayout::default(),
			exit_on_select,
			last_selection: None,
			selections,
		}
	}

	/// Hit areas from the last draw.
	pub fn layout(&self) -> &ComboboxLayout {
		&self.layout
	}

	/// Pull committed selections delivered since the last call.
	pub(crate) fn drain_selections(&mut self) -> Option<String> {
		let mut latest = None;
		while let Ok(event) = self.selections.try_recv() {
			latest = Some(event.value);
		}
		if latest.is_some() {
			self.last_selection.clone_from(&latest);
		}
		latest
	}

	pub(crate) fn accepted(&self, selection: String) -> PickOutcome {
		PickOutcome {
			accepted: true,
			selection: Some(selection),
			query: self.combobox.state().filter_text().to_string(),
		}
	}

	/// Outcome when the user leaves without committing in this step.
	pub(crate) fn finished(&self) -> PickOutcome {
		let selection = if self.exit_on_select {
			None
		} else {
			self.last_selection.clone()
		};
		PickOutcome {
			accepted: selection.is_some(),
			selection,
			query: self.combobox.state().filter_text().to_string(),
		}
	}
}
