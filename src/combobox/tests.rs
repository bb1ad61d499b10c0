use std::cell::RefCell;
use std::rc::Rc;

use ratatui::crossterm::event::{KeyCode, KeyModifiers};

use super::*;

fn combobox(options: &[&str]) -> Combobox {
	Combobox::new(options.iter().map(|s| s.to_string()).collect())
}

fn record(combobox: &mut Combobox) -> Rc<RefCell<Vec<String>>> {
	let seen = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&seen);
	combobox.subscribe(move |event| sink.borrow_mut().push(event.value.clone()));
	seen
}

#[test]
fn typing_filters_highlighting_and_enter_commits() {
	let mut combobox = combobox(&["apple", "banana", "cherry"]);
	let seen = record(&mut combobox);

	combobox.input("an");
	assert_eq!(combobox.filtered(), ["banana"]);
	assert!(combobox.is_open());

	assert_eq!(combobox.handle_key(ComboKey::ArrowDown), KeyDisposition::Handled);
	assert_eq!(combobox.active_index(), Some(0));

	assert_eq!(combobox.handle_key(ComboKey::Enter), KeyDisposition::Handled);
	assert_eq!(combobox.selected(), Some("banana"));
	assert!(!combobox.is_open());
	assert_eq!(combobox.active_index(), None);
	assert_eq!(*seen.borrow(), vec!["banana"]);
}

#[test]
fn enter_without_highlight_closes_silently() {
	let mut combobox = combobox(&["apple"]).with_open(true);
	let seen = record(&mut combobox);

	combobox.handle_key(ComboKey::Enter);
	assert!(!combobox.is_open());
	assert_eq!(combobox.selected(), None);
	assert!(seen.borrow().is_empty());
}

#[test]
fn empty_option_list_never_commits() {
	let mut combobox = combobox(&[]);
	let seen = record(&mut combobox);

	for text in ["", "a", "zzz"] {
		combobox.input(text);
		assert!(combobox.filtered().is_empty());
		combobox.handle_key(ComboKey::ArrowDown);
		combobox.handle_key(ComboKey::Enter);
		assert!(!combobox.is_open());
	}
	assert!(seen.borrow().is_empty());
}

#[test]
fn escape_closes_without_commit_and_passes_through() {
	let mut combobox = combobox(&["apple", "banana"]);
	let seen = record(&mut combobox);
	combobox.handle_key(ComboKey::ArrowDown);

	assert_eq!(
		combobox.handle_key(ComboKey::Escape),
		KeyDisposition::Passthrough
	);
	assert!(!combobox.is_open());
	assert_eq!(combobox.active_index(), None);
	assert!(seen.borrow().is_empty());
}

#[test]
fn pointer_activation_commits_exactly_once() {
	let mut combobox = combobox(&["apple", "banana", "cherry"]);
	let seen = record(&mut combobox);
	let events = combobox.subscribe_channel();

	combobox.toggle();
	assert_eq!(combobox.activate_option(2).as_deref(), Some("cherry"));
	assert_eq!(combobox.selected(), Some("cherry"));
	assert!(!combobox.is_open());
	assert_eq!(*seen.borrow(), vec!["cherry"]);
	assert_eq!(
		events.try_recv().unwrap(),
		SelectionChanged {
			value: "cherry".into()
		}
	);
	assert!(events.try_recv().is_err());
}

#[test]
fn out_of_range_activation_is_not_a_commit() {
	let mut combobox = combobox(&["apple"]).with_open(true);
	let seen = record(&mut combobox);
	assert_eq!(combobox.activate_option(3), None);
	assert!(!combobox.is_open());
	assert!(seen.borrow().is_empty());
}

#[test]
fn replacing_options_resets_filtered_view() {
	let mut combobox = combobox(&["apple", "banana"]);
	combobox.input("app");
	combobox.handle_key(ComboKey::ArrowDown);

	combobox.set_options(vec!["grape".into(), "guava".into(), "kiwi".into()]);
	assert_eq!(combobox.filtered(), ["grape", "guava", "kiwi"]);
	assert_eq!(combobox.active_index(), None);
	assert_eq!(combobox.view().listbox.options.len(), 3);
}

#[test]
fn external_selection_emits_nothing() {
	let mut combobox = combobox(&["apple"]);
	let seen = record(&mut combobox);
	combobox.set_selected("apple");
	assert_eq!(combobox.selected(), Some("apple"));
	assert!(combobox.view().listbox.options[0].selected);
	assert!(seen.borrow().is_empty());
}

#[test]
fn toggle_flips_open_state() {
	let mut combobox = combobox(&["apple", "banana"]);
	combobox.input("ban");
	combobox.handle_key(ComboKey::ArrowDown);

	combobox.toggle();
	assert!(!combobox.is_open());
	assert_eq!(combobox.active_index(), None);

	combobox.toggle();
	assert!(combobox.is_open());
	assert_eq!(combobox.filtered(), ["banana"]);
}

#[test]
fn view_is_refreshed_after_each_mutation() {
	let mut combobox = combobox(&["apple", "banana"]);
	assert!(!combobox.view().listbox.visible);

	combobox.handle_key(ComboKey::ArrowUp);
	assert!(combobox.view().listbox.visible);
	assert_eq!(
		combobox.view().input.active_descendant.as_deref(),
		Some("pickbox-option-1")
	);

	combobox.handle_key(ComboKey::Enter);
	assert!(!combobox.view().listbox.visible);
	assert_eq!(combobox.view().input.value, "banana");
	assert_eq!(combobox.view().input.active_descendant, None);
}

#[test]
fn unsubscribed_listeners_stop_receiving() {
	let mut combobox = combobox(&["apple"]);
	let seen = Rc::new(RefCell::new(0));
	let sink = Rc::clone(&seen);
	let id = combobox.subscribe(move |_| *sink.borrow_mut() += 1);

	combobox.activate_option(0);
	assert!(combobox.unsubscribe(id));
	combobox.activate_option(0);
	assert_eq!(*seen.borrow(), 1);
}

#[test]
fn key_events_are_routed_through_the_state_machine() {
	let mut combobox = combobox(&["apple", "banana"]);
	let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
	let typed = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);

	assert!(combobox.handle_key_event(&down).prevents_default());
	assert_eq!(combobox.active_index(), Some(0));
	assert_eq!(combobox.handle_key_event(&typed), KeyDisposition::Ignored);
	assert_eq!(combobox.active_index(), Some(0));
}
