use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!("  Label: {}", config.ids.label);
	println!("  Theme: {}", config.theme_name);
	println!("  Start open: {}", bool_to_word(config.open));
	println!("  Keep open after selection: {}", bool_to_word(config.keep_open));
	match &config.selected {
		Some(value) => println!("  Pre-selected: {value}"),
		None => println!("  Pre-selected: (none)"),
	}
	if !config.initial_query.is_empty() {
		println!("  Initial query: {}", config.initial_query);
	}
	println!(
		"  Element ids: input={}, toggle={}, listbox={}, options={}-N",
		config.ids.input_id,
		config.ids.toggle_id,
		config.ids.listbox_id,
		config.ids.option_id_prefix
	);
	println!("  Log level: {}", config.log_level);
	match &config.log_file {
		Some(path) => println!("  Log file: {}", path.display()),
		None => println!("  Log file: (data directory default)"),
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
