use super::filter::filter_options;

/// Raw combobox state and its transitions.
///
/// Transitions keep `active` a valid index into `filtered` (or `None`). They
/// never notify anyone; [`Combobox`](super::Combobox) layers the projection and
/// listeners on top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComboState {
	options: Vec<String>,
	filter_text: String,
	input_value: String,
	filtered: Vec<String>,
	active: Option<usize>,
	is_open: bool,
	selected: Option<String>,
}

impl ComboState {
	#[must_use]
	pub fn new(options: Vec<String>) -> Self {
		Self {
			filtered: options.clone(),
			options,
			..Self::default()
		}
	}

	pub fn options(&self) -> &[String] {
		&self.options
	}

	pub fn filter_text(&self) -> &str {
		&self.filter_text
	}

	/// Text currently shown in the input field.
	pub fn input_value(&self) -> &str {
		&self.input_value
	}

	pub fn filtered(&self) -> &[String] {
		&self.filtered
	}

	pub fn active_index(&self) -> Option<usize> {
		self.active
	}

	pub fn active_option(&self) -> Option<&str> {
		self.active
			.and_then(|index| self.filtered.get(index))
			.map(String::as_str)
	}

	pub fn is_open(&self) -> bool {
		self.is_open
	}

	/// The committed option; `None` until something is selected.
	pub fn selected(&self) -> Option<&str> {
		self.selected.as_deref()
	}

	/// Replace the option list. The filter text is kept but not reapplied.
	pub(crate) fn set_options(&mut self, options: Vec<String>) {
		self.filtered = options.clone();
		self.options = options;
		self.active = None;
	}

	pub(crate) fn set_selected(&mut self, value: String) {
		self.input_value = value.clone();
		self.selected = Some(value);
	}

	pub(crate) fn set_open(&mut self, open: bool) {
		if open {
			self.is_open = true;
		} else {
			self.close();
		}
	}

	pub(crate) fn apply_filter(&mut self, text: &str) {
		self.filter_text = text.to_string();
		self.input_value = text.to_string();
		self.filtered = filter_options(&self.options, text);
		self.active = None;
		self.is_open = true;
	}

	pub(crate) fn move_down(&mut self) {
		self.is_open = true;
		let len = self.filtered.len();
		self.active = match self.active {
			_ if len == 0 => None,
			Some(index) if index + 1 < len => Some(index + 1),
			_ => Some(0),
		};
	}

	pub(crate) fn move_up(&mut self) {
		self.is_open = true;
		let len = self.filtered.len();
		self.active = match self.active {
			_ if len == 0 => None,
			Some(index) if index > 0 && index < len => Some(index - 1),
			_ => Some(len - 1),
		};
	}

	/// Commit the highlighted option, or just close when nothing valid is highlighted.
	pub(crate) fn commit_active(&mut self) -> Option<String> {
		match self.active_option().map(str::to_string) {
			Some(option) => {
				self.commit(option.clone());
				Some(option)
			}
			None => {
				self.close();
				None
			}
		}
	}

	/// Commit the filtered option at `index`; out of range closes without commit.
	pub(crate) fn commit_index(&mut self, index: usize) -> Option<String> {
		match self.filtered.get(index).cloned() {
			Some(option) => {
				self.commit(option.clone());
				Some(option)
			}
			None => {
				self.close();
				None
			}
		}
	}

	pub(crate) fn close(&mut self) {
		self.is_open = false;
		self.active = None;
	}

	pub(crate) fn toggle(&mut self) {
		if self.is_open {
			self.close();
		} else {
			self.is_open = true;
		}
	}

	fn commit(&mut self, option: String) {
		self.input_value = option.clone();
		self.selected = Some(option);
		self.is_open = false;
		self.active = None;
	}
}
