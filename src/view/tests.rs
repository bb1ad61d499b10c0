use super::*;

fn fruits() -> ComboState {
	ComboState::new(
		["apple", "banana", "cherry"]
			.into_iter()
			.map(String::from)
			.collect(),
	)
}

#[test]
fn closed_state_projects_hidden_listbox() {
	let view = project(&fruits(), &ViewIds::default());
	assert!(!view.input.expanded);
	assert!(!view.toggle.expanded);
	assert!(!view.listbox.visible);
	assert_eq!(view.input.active_descendant, None);
	assert_eq!(view.listbox.options.len(), 3);
}

#[test]
fn rows_are_identified_by_filtered_position() {
	let mut state = fruits();
	state.apply_filter("e");
	let view = project(&state, &ViewIds::default());
	let ids: Vec<_> = view.listbox.options.iter().map(|o| o.id.as_str()).collect();
	let labels: Vec<_> = view
		.listbox
		.options
		.iter()
		.map(|o| o.label.as_str())
		.collect();
	assert_eq!(ids, ["pickbox-option-0", "pickbox-option-1"]);
	assert_eq!(labels, ["apple", "cherry"]);
}

#[test]
fn highlight_drives_active_descendant() {
	let mut state = fruits();
	state.move_down();
	state.move_down();
	let view = project(&state, &ViewIds::default());
	assert_eq!(
		view.input.active_descendant.as_deref(),
		Some("pickbox-option-1")
	);
	assert_eq!(view.listbox.active().map(|o| o.label.as_str()), Some("banana"));
	assert!(view.listbox.visible);
}

#[test]
fn selection_is_marked_on_matching_rows() {
	let mut state = fruits();
	state.set_selected("cherry".into());
	let view = project(&state, &ViewIds::default());
	let selected: Vec<_> = view
		.listbox
		.options
		.iter()
		.filter(|o| o.selected)
		.map(|o| o.index)
		.collect();
	assert_eq!(selected, vec![2]);
	assert_eq!(view.input.value, "cherry");
}

#[test]
fn empty_label_is_marked_only_once_committed() {
	let mut state = ComboState::new(vec![String::new(), "apple".into()]);
	let view = project(&state, &ViewIds::default());
	assert!(view.listbox.options.iter().all(|option| !option.selected));

	state.set_open(true);
	assert_eq!(state.commit_index(0).as_deref(), Some(""));
	let view = project(&state, &ViewIds::default());
	assert!(view.listbox.options[0].selected);
	assert!(!view.listbox.options[1].selected);
}

#[test]
fn custom_ids_flow_through() {
	let ids = ViewIds {
		label: "Select a fruit:".into(),
		accessible_name: "Fruits".into(),
		input_id: "fruits-input".into(),
		toggle_id: "fruits-button".into(),
		listbox_id: "fruits-listbox".into(),
		option_id_prefix: "lb-fruit".into(),
	};
	let mut state = fruits();
	state.move_up();
	let view = project(&state, &ids);
	assert_eq!(view.label.for_id, "fruits-input");
	assert_eq!(view.input.controls, "fruits-listbox");
	assert_eq!(view.toggle.controls, "fruits-listbox");
	assert_eq!(view.input.active_descendant.as_deref(), Some("lb-fruit-2"));
}

#[test]
fn view_serializes_for_other_hosts() {
	let view = project(&fruits(), &ViewIds::default());
	let json = serde_json::to_value(&view).expect("serialize");
	assert_eq!(json["listbox"]["options"][1]["label"], "banana");
	assert_eq!(json["input"]["expanded"], false);
}
