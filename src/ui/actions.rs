use log::debug;
use ratatui::crossterm::event::{
	Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;
use super::state::PickOutcome;
use crate::combobox::KeyDisposition;
use crate::tui::Hit;

impl App {
	/// Feed one terminal event through the combobox; `Some` ends the session.
	pub fn handle_event(&mut self, event: Event) -> Option<PickOutcome> {
		match event {
			Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
			Event::Mouse(mouse) => self.handle_mouse(mouse),
			Event::Paste(text) => {
				self.edit_input(|value| value.push_str(&text));
				None
			}
			_ => None,
		}
	}

	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<PickOutcome> {
		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
			debug!("picker cancelled");
			return Some(self.finished());
		}

		let was_open = self.combobox.is_open();
		match self.combobox.handle_key_event(&key) {
			KeyDisposition::Handled => {}
			KeyDisposition::Passthrough => {
				if !was_open {
					return Some(self.finished());
				}
			}
			KeyDisposition::Ignored => self.edit_with_key(key),
		}

		self.after_interaction()
	}

	fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<PickOutcome> {
		if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
			return None;
		}

		match self.layout.hit_test(mouse.column, mouse.row) {
			Some(Hit::Input | Hit::Toggle) => self.combobox.toggle(),
			Some(Hit::Option(index)) => {
				self.combobox.activate_option(index);
			}
			Some(Hit::Listbox) | None => {}
		}

		self.after_interaction()
	}

	fn edit_with_key(&mut self, key: KeyEvent) {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Char('u') if ctrl => self.edit_input(String::clear),
			KeyCode::Char(ch) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
				self.edit_input(|value| value.push(ch));
			}
			KeyCode::Backspace => self.edit_input(|value| {
				value.pop();
			}),
			_ => {}
		}
	}

	/// Apply `edit` to the text shown in the input and re-filter with the result.
	fn edit_input<F>(&mut self, edit: F)
	where
		F: FnOnce(&mut String),
	{
		let mut value = self.combobox.state().input_value().to_string();
		edit(&mut value);
		self.combobox.input(&value);
	}

	fn after_interaction(&mut self) -> Option<PickOutcome> {
		let selection = self.drain_selections()?;
		if self.exit_on_select {
			Some(self.accepted(selection))
		} else {
			None
		}
	}
}
