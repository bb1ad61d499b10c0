use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Keys the combobox state machine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboKey {
	ArrowDown,
	ArrowUp,
	Enter,
	Escape,
}

impl ComboKey {
	/// Map a terminal key event onto a combobox key, if it is one.
	///
	/// Modified arrows and Enter are left to the host.
	#[must_use]
	pub fn from_key_event(key: &KeyEvent) -> Option<Self> {
		if key
			.modifiers
			.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
		{
			return None;
		}

		match key.code {
			KeyCode::Down => Some(Self::ArrowDown),
			KeyCode::Up => Some(Self::ArrowUp),
			KeyCode::Enter => Some(Self::Enter),
			KeyCode::Esc => Some(Self::Escape),
			_ => None,
		}
	}
}

/// What the host should do with a key after the combobox saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
	/// The combobox consumed the key; suppress default handling.
	Handled,
	/// The combobox acted on the key but the host may handle it too.
	Passthrough,
	/// Not a combobox key.
	Ignored,
}

impl KeyDisposition {
	#[must_use]
	pub fn prevents_default(self) -> bool {
		matches!(self, Self::Handled)
	}
}
