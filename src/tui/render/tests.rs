use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

use super::*;
use crate::combobox::{ComboKey, Combobox};

fn combobox(options: &[&str]) -> Combobox {
	Combobox::new(options.iter().map(|s| s.to_string()).collect())
}

fn draw(combobox: &Combobox, width: u16, height: u16) -> (Vec<String>, ComboboxLayout) {
	let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
	let mut layout = ComboboxLayout::default();
	terminal
		.draw(|frame| {
			layout = render_combobox(frame, frame.area(), combobox.view(), &Theme::default());
		})
		.unwrap();
	(buffer_lines(terminal.backend().buffer()), layout)
}

fn buffer_lines(buffer: &Buffer) -> Vec<String> {
	let area = buffer.area;
	(area.top()..area.bottom())
		.map(|y| {
			(area.left()..area.right())
				.map(|x| buffer[(x, y)].symbol())
				.collect::<String>()
		})
		.collect()
}

fn screen_contains(lines: &[String], needle: &str) -> bool {
	lines.iter().any(|line| line.contains(needle))
}

#[test]
fn closed_combobox_draws_label_input_and_toggle_only() {
	let combobox = combobox(&["apple", "banana", "cherry"]);
	let (lines, layout) = draw(&combobox, 30, 10);

	assert!(lines[0].starts_with("Select an option:"));
	assert!(screen_contains(&lines, "▼"));
	assert!(!screen_contains(&lines, "banana"));
	assert_eq!(layout.listbox, None);
	assert!(layout.rows.is_empty());
}

#[test]
fn open_combobox_lists_filtered_rows_with_hit_areas() {
	let mut combobox = combobox(&["apple", "banana", "cherry"]);
	combobox.handle_key(ComboKey::ArrowDown);
	let (lines, layout) = draw(&combobox, 30, 10);

	assert!(screen_contains(&lines, "▲"));
	for label in ["apple", "banana", "cherry"] {
		assert!(screen_contains(&lines, label), "missing {label}");
	}
	assert_eq!(layout.rows.len(), 3);

	let (index, row) = layout.rows[1];
	assert_eq!(index, 1);
	assert_eq!(layout.hit_test(row.x + 2, row.y), Some(Hit::Option(1)));
	assert_eq!(
		layout.hit_test(layout.toggle.x, layout.toggle.y),
		Some(Hit::Toggle)
	);
	assert_eq!(layout.hit_test(layout.input.x, layout.input.y), Some(Hit::Input));
}

#[test]
fn typed_text_is_shown_in_the_input() {
	let mut combobox = combobox(&["apple", "banana"]);
	combobox.input("ban");
	let (lines, _) = draw(&combobox, 30, 10);
	assert!(lines[2].contains("ban"));
}

#[test]
fn empty_result_shows_no_matches() {
	let mut combobox = combobox(&["apple"]);
	combobox.input("zzz");
	let (lines, layout) = draw(&combobox, 30, 10);
	assert!(screen_contains(&lines, "No matches"));
	assert!(layout.rows.is_empty());
	assert!(layout.listbox.is_some());
}

#[test]
fn selected_row_carries_a_marker() {
	let combobox = combobox(&["apple", "banana"])
		.with_selected("banana")
		.with_open(true);
	let (lines, _) = draw(&combobox, 30, 10);
	assert!(screen_contains(&lines, "✓ banana"));
	assert!(!screen_contains(&lines, "✓ apple"));
}

#[test]
fn highlighted_row_stays_visible_in_short_panels() {
	let options: Vec<String> = (0..10).map(|i| format!("item {i}")).collect();
	let mut combobox = Combobox::new(options);
	for _ in 0..9 {
		combobox.handle_key(ComboKey::ArrowDown);
	}
	assert_eq!(combobox.active_index(), Some(8));

	let (_, layout) = draw(&combobox, 30, 9);
	let visible: Vec<usize> = layout.rows.iter().map(|(index, _)| *index).collect();
	assert_eq!(visible, vec![6, 7, 8]);
}

#[test]
fn zero_sized_area_draws_nothing() {
	let combobox = combobox(&["apple"]);
	let mut terminal = Terminal::new(TestBackend::new(10, 5)).unwrap();
	terminal
		.draw(|frame| {
			let layout = render_combobox(frame, Rect::default(), combobox.view(), &Theme::default());
			assert_eq!(layout, ComboboxLayout::default());
		})
		.unwrap();
}

#[test]
fn long_values_keep_their_tail() {
	assert_eq!(tail_fitting("strawberry", 5), "berry");
	assert_eq!(tail_fitting("fig", 5), "fig");
	assert_eq!(tail_fitting("", 0), "");
}

#[test]
fn scroll_offset_tracks_highlight() {
	assert_eq!(scroll_offset(None, 3), 0);
	assert_eq!(scroll_offset(Some(2), 3), 0);
	assert_eq!(scroll_offset(Some(5), 3), 3);
}

#[test]
fn very_long_lists_still_fill_the_panel() {
	for count in [65_534_usize, 65_535, 65_536, 70_000] {
		let combobox =
			Combobox::new((0..count).map(|i| format!("item {i}")).collect()).with_open(true);
		let (lines, layout) = draw(&combobox, 40, 20);

		assert!(layout.listbox.is_some(), "no panel for {count} options");
		assert_eq!(layout.rows.len(), 14, "{count} options");
		assert_eq!(layout.rows[0].0, 0);
		assert!(screen_contains(&lines, "item 0"));
	}
}
