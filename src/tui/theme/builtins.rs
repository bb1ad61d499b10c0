use ratatui::style::{Color, Modifier, Style};

use super::types::{Theme, ThemeDefinition};

pub const SLATE: Theme = Theme {
	label: Style::new().fg(Color::Rgb(148, 163, 184)),
	input: Style::new().fg(Color::Rgb(226, 232, 240)),
	toggle: Style::new().fg(Color::LightCyan),
	list_border: Style::new().fg(Color::Rgb(71, 85, 105)),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	selected: Style::new()
		.fg(Color::Yellow)
		.add_modifier(Modifier::BOLD),
	empty: Style::new().fg(Color::DarkGray),
};

pub const LIGHT: Theme = Theme {
	label: Style::new().fg(Color::Rgb(71, 85, 105)),
	input: Style::new().fg(Color::Black),
	toggle: Style::new().fg(Color::Rgb(0, 90, 156)),
	list_border: Style::new().fg(Color::Gray),
	row_highlight: Style::new().bg(Color::Rgb(221, 238, 255)).fg(Color::Black),
	selected: Style::new()
		.fg(Color::Rgb(0, 90, 156))
		.add_modifier(Modifier::BOLD),
	empty: Style::new().fg(Color::Gray),
};

pub const MONO: Theme = Theme {
	label: Style::new(),
	input: Style::new(),
	toggle: Style::new(),
	list_border: Style::new(),
	row_highlight: Style::new().add_modifier(Modifier::REVERSED),
	selected: Style::new().add_modifier(Modifier::BOLD),
	empty: Style::new().add_modifier(Modifier::DIM),
};

pub(super) const BUILT_IN_DEFINITIONS: &[ThemeDefinition] = &[
	ThemeDefinition {
		name: "slate",
		aliases: &["default", "dark"],
		theme: SLATE,
	},
	ThemeDefinition {
		name: "light",
		aliases: &[],
		theme: LIGHT,
	},
	ThemeDefinition {
		name: "mono",
		aliases: &["plain", "no-color"],
		theme: MONO,
	},
];
