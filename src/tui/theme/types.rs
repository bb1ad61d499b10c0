use ratatui::style::{Color, Modifier, Style};

/// A theme containing styles for the combobox elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Style for the label line above the input.
	pub label: Style,
	/// Style for the input text and its border.
	pub input: Style,
	/// Style for the toggle glyph.
	pub toggle: Style,
	/// Style for the listbox border.
	pub list_border: Style,
	/// Style for the keyboard-highlighted row.
	pub row_highlight: Style,
	/// Style for the committed selection.
	pub selected: Style,
	/// Style for empty states.
	pub empty: Style,
}

impl Theme {
	/// Returns the style for the highlighted row when it is also selected.
	#[must_use]
	pub fn highlight_selected_style(&self) -> Style {
		self.row_highlight.add_modifier(Modifier::BOLD)
	}

	/// Returns the border style for the input, brighter while the panel is open.
	#[must_use]
	pub fn input_border_style(&self, expanded: bool) -> Style {
		if expanded {
			self.input
				.fg(self.toggle.fg.unwrap_or(Color::Reset))
				.add_modifier(Modifier::BOLD)
		} else {
			self.input
		}
	}
}

/// A named built-in theme.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub aliases: &'static [&'static str],
	pub theme: Theme,
}
