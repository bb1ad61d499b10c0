use crate::tui::Theme;
use crate::view::ViewIds;

/// Everything the interactive picker needs to start.
#[derive(Debug, Clone)]
pub struct PickerConfig {
	pub options: Vec<String>,
	pub ids: ViewIds,
	pub selected: Option<String>,
	pub open: bool,
	pub initial_query: String,
	pub theme: Theme,
	/// Return as soon as a selection is committed.
	pub exit_on_select: bool,
	/// Footer line with key hints; empty hides it.
	pub hint: String,
}

impl Default for PickerConfig {
	fn default() -> Self {
		Self {
			options: Vec::new(),
			ids: ViewIds::default(),
			selected: None,
			open: false,
			initial_query: String::new(),
			theme: Theme::default(),
			exit_on_select: true,
			hint: DEFAULT_HINT.to_string(),
		}
	}
}

pub const DEFAULT_HINT: &str = "↑/↓ move  Enter select  Esc close/quit  Ctrl-C cancel";
