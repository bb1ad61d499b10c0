//! Draw a [`ComboboxView`] into a ratatui frame.

use ratatui::{
	Frame,
	layout::{Alignment, Position, Rect},
	text::{Line, Span},
	widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::Theme;
use crate::view::{ComboboxView, OptionView};

const INPUT_HEIGHT: u16 = 3;
const TOGGLE_WIDTH: u16 = 3;
const SELECTED_MARKER: &str = "✓ ";
const UNSELECTED_MARKER: &str = "  ";

/// Screen regions produced by the last draw, used for pointer routing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComboboxLayout {
	pub label: Rect,
	pub input: Rect,
	pub toggle: Rect,
	pub listbox: Option<Rect>,
	/// Visible rows as `(filtered index, area)`.
	pub rows: Vec<(usize, Rect)>,
}

/// What a pointer position landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
	Input,
	Toggle,
	Option(usize),
	Listbox,
}

impl ComboboxLayout {
	#[must_use]
	pub fn hit_test(&self, column: u16, row: u16) -> Option<Hit> {
		let position = Position::new(column, row);
		if let Some((index, _)) = self
			.rows
			.iter()
			.find(|(_, area)| area.contains(position))
		{
			return Some(Hit::Option(*index));
		}
		if self.toggle.contains(position) {
			return Some(Hit::Toggle);
		}
		if self.input.contains(position) {
			return Some(Hit::Input);
		}
		if self.listbox.is_some_and(|area| area.contains(position)) {
			return Some(Hit::Listbox);
		}
		None
	}
}

/// Render the label, input, toggle and (when visible) the listbox.
pub fn render_combobox(
	frame: &mut Frame,
	area: Rect,
	view: &ComboboxView,
	theme: &Theme,
) -> ComboboxLayout {
	let mut layout = ComboboxLayout::default();
	if area.width == 0 || area.height == 0 {
		return layout;
	}

	layout.label = Rect::new(area.x, area.y, area.width, 1);
	frame.render_widget(
		Paragraph::new(view.label.text.as_str()).style(theme.label),
		layout.label,
	);

	let remaining = area.height.saturating_sub(1);
	if remaining == 0 {
		return layout;
	}

	let input_area = Rect::new(area.x, area.y + 1, area.width, remaining.min(INPUT_HEIGHT));
	layout.input = input_area;
	render_input(frame, input_area, view, theme, &mut layout);

	let list_top = input_area.bottom();
	let list_space = area.bottom().saturating_sub(list_top);
	if view.listbox.visible && list_space > 2 {
		let rows = u16::try_from(view.listbox.options.len().max(1)).unwrap_or(u16::MAX);
		let wanted = rows.saturating_add(2);
		let list_area = Rect::new(area.x, list_top, area.width, wanted.min(list_space));
		layout.listbox = Some(list_area);
		render_listbox(frame, list_area, view, theme, &mut layout);
	}

	layout
}

fn render_input(
	frame: &mut Frame,
	area: Rect,
	view: &ComboboxView,
	theme: &Theme,
	layout: &mut ComboboxLayout,
) {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(theme.input_border_style(view.input.expanded));
	let inner = block.inner(area);
	frame.render_widget(block, area);
	if inner.width == 0 || inner.height == 0 {
		return;
	}

	let toggle_width = if inner.width > TOGGLE_WIDTH { TOGGLE_WIDTH } else { 0 };
	let value_area = Rect::new(inner.x, inner.y, inner.width - toggle_width, 1);
	layout.toggle = Rect::new(value_area.right(), inner.y, toggle_width, 1);

	let visible = tail_fitting(&view.input.value, value_area.width.saturating_sub(1));
	frame.render_widget(Paragraph::new(visible).style(theme.input), value_area);
	let cursor_x = value_area.x + visible.width() as u16;
	frame.set_cursor_position(Position::new(cursor_x, value_area.y));

	if toggle_width > 0 {
		let glyph = if view.toggle.expanded { "▲" } else { "▼" };
		frame.render_widget(
			Paragraph::new(glyph)
				.alignment(Alignment::Center)
				.style(theme.toggle),
			layout.toggle,
		);
	}
}

fn render_listbox(
	frame: &mut Frame,
	area: Rect,
	view: &ComboboxView,
	theme: &Theme,
	layout: &mut ComboboxLayout,
) {
	frame.render_widget(Clear, area);
	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(theme.list_border);
	let inner = block.inner(area);
	frame.render_widget(block, area);
	if inner.width == 0 || inner.height == 0 {
		return;
	}

	let options = &view.listbox.options;
	if options.is_empty() {
		frame.render_widget(
			Paragraph::new("No matches")
				.alignment(Alignment::Center)
				.style(theme.empty),
			inner,
		);
		return;
	}

	let capacity = inner.height as usize;
	let offset = scroll_offset(view.listbox.active().map(|o| o.index), capacity);
	for (slot, option) in options.iter().skip(offset).take(capacity).enumerate() {
		let row = Rect::new(inner.x, inner.y + slot as u16, inner.width, 1);
		frame.render_widget(Paragraph::new(option_line(option, theme)), row);
		layout.rows.push((option.index, row));
	}
}

fn option_line<'a>(option: &'a OptionView, theme: &Theme) -> Line<'a> {
	let marker = if option.selected {
		SELECTED_MARKER
	} else {
		UNSELECTED_MARKER
	};
	let style = match (option.active, option.selected) {
		(true, true) => theme.highlight_selected_style(),
		(true, false) => theme.row_highlight,
		(false, true) => theme.selected,
		(false, false) => theme.input,
	};
	Line::from(vec![Span::raw(marker), Span::raw(option.label.as_str())]).style(style)
}

/// First visible row so that the highlighted row stays on screen.
fn scroll_offset(active: Option<usize>, capacity: usize) -> usize {
	match active {
		Some(index) if capacity > 0 && index >= capacity => index + 1 - capacity,
		_ => 0,
	}
}

/// Longest suffix of `text` whose display width fits in `width` columns.
fn tail_fitting(text: &str, width: u16) -> &str {
	let width = width as usize;
	if text.width() <= width {
		return text;
	}
	let mut used = 0;
	let mut start = text.len();
	for (index, ch) in text.char_indices().rev() {
		let ch_width = ch.width().unwrap_or(0);
		if used + ch_width > width {
			break;
		}
		used += ch_width;
		start = index;
	}
	&text[start..]
}

#[cfg(test)]
mod tests;
