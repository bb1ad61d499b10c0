//! The searchable dropdown widget.
//!
//! [`Combobox`] owns a [`ComboState`], re-projects its [`ComboboxView`] after
//! every mutation, and notifies listeners once per committed selection.
//! Everything runs synchronously on the caller's thread.

mod events;
mod filter;
mod keys;
mod state;

use std::sync::mpsc::Receiver;

use log::{debug, trace};
use ratatui::crossterm::event::KeyEvent;

pub use events::{ListenerId, SelectionChanged};
pub use filter::filter_options;
pub use keys::{ComboKey, KeyDisposition};
pub use state::ComboState;

use crate::view::{self, ComboboxView, ViewIds};
use events::Listeners;

#[derive(Debug)]
pub struct Combobox {
	state: ComboState,
	ids: ViewIds,
	view: ComboboxView,
	listeners: Listeners,
}

impl Default for Combobox {
	fn default() -> Self {
		Self::new(Vec::new())
	}
}

impl Combobox {
	/// Create a closed combobox over `options` with nothing selected.
	#[must_use]
	pub fn new(options: Vec<String>) -> Self {
		let state = ComboState::new(options);
		let ids = ViewIds::default();
		let view = view::project(&state, &ids);
		Self {
			state,
			ids,
			view,
			listeners: Listeners::default(),
		}
	}

	#[must_use]
	pub fn with_ids(mut self, ids: ViewIds) -> Self {
		self.ids = ids;
		self.refresh();
		self
	}

	#[must_use]
	pub fn with_selected(mut self, value: impl Into<String>) -> Self {
		self.set_selected(value);
		self
	}

	#[must_use]
	pub fn with_open(mut self, open: bool) -> Self {
		self.set_open(open);
		self
	}

	pub fn state(&self) -> &ComboState {
		&self.state
	}

	pub fn ids(&self) -> &ViewIds {
		&self.ids
	}

	/// The projection of the current state.
	pub fn view(&self) -> &ComboboxView {
		&self.view
	}

	pub fn options(&self) -> &[String] {
		self.state.options()
	}

	pub fn filtered(&self) -> &[String] {
		self.state.filtered()
	}

	pub fn selected(&self) -> Option<&str> {
		self.state.selected()
	}

	pub fn is_open(&self) -> bool {
		self.state.is_open()
	}

	pub fn active_index(&self) -> Option<usize> {
		self.state.active_index()
	}

	/// Replace the option list and reset the filtered view to all of it.
	pub fn set_options(&mut self, options: Vec<String>) {
		debug!("combobox options replaced ({} entries)", options.len());
		self.state.set_options(options);
		self.refresh();
	}

	/// Pre-select `value` without notifying listeners.
	pub fn set_selected(&mut self, value: impl Into<String>) {
		self.state.set_selected(value.into());
		self.refresh();
	}

	pub fn set_open(&mut self, open: bool) {
		self.state.set_open(open);
		self.refresh();
	}

	/// Text entry: filter the options and open the panel.
	pub fn input(&mut self, text: &str) {
		self.state.apply_filter(text);
		trace!(
			"filter {text:?} matched {} of {}",
			self.state.filtered().len(),
			self.state.options().len()
		);
		self.refresh();
	}

	pub fn handle_key(&mut self, key: ComboKey) -> KeyDisposition {
		match key {
			ComboKey::ArrowDown => {
				self.state.move_down();
				self.refresh();
				KeyDisposition::Handled
			}
			ComboKey::ArrowUp => {
				self.state.move_up();
				self.refresh();
				KeyDisposition::Handled
			}
			ComboKey::Enter => {
				let committed = self.state.commit_active();
				self.finish_commit(committed);
				KeyDisposition::Handled
			}
			ComboKey::Escape => {
				self.state.close();
				self.refresh();
				KeyDisposition::Passthrough
			}
		}
	}

	/// Route a terminal key event; non-combobox keys are ignored.
	pub fn handle_key_event(&mut self, key: &KeyEvent) -> KeyDisposition {
		match ComboKey::from_key_event(key) {
			Some(combo_key) => self.handle_key(combo_key),
			None => KeyDisposition::Ignored,
		}
	}

	/// Pointer activation of the filtered option at `index`.
	///
	/// Returns the committed value, or `None` when `index` is out of range, in
	/// which case the panel just closes.
	pub fn activate_option(&mut self, index: usize) -> Option<String> {
		let committed = self.state.commit_index(index);
		self.finish_commit(committed.clone());
		committed
	}

	/// Click on the input or the toggle control.
	pub fn toggle(&mut self) {
		self.state.toggle();
		self.refresh();
	}

	/// Register an observer for [`SelectionChanged`].
	pub fn subscribe<F>(&mut self, callback: F) -> ListenerId
	where
		F: FnMut(&SelectionChanged) + 'static,
	{
		self.listeners.subscribe(callback)
	}

	pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
		self.listeners.unsubscribe(id)
	}

	/// Receive [`SelectionChanged`] events over a channel.
	pub fn subscribe_channel(&mut self) -> Receiver<SelectionChanged> {
		self.listeners.channel()
	}

	fn finish_commit(&mut self, committed: Option<String>) {
		self.refresh();
		match committed {
			Some(value) => {
				debug!(
					"selection committed: {value:?} ({} listeners)",
					self.listeners.len()
				);
				self.listeners.emit(&SelectionChanged { value });
			}
			None => trace!("closed without a highlighted option"),
		}
	}

	fn refresh(&mut self) {
		self.view = view::project(&self.state, &self.ids);
	}
}

#[cfg(test)]
mod tests;
