//! Case-insensitive substring filtering over the option list.

/// Return the options whose lowercase form contains the lowercase `filter`.
///
/// Order is preserved and an empty filter yields every option.
#[must_use]
pub fn filter_options(options: &[String], filter: &str) -> Vec<String> {
	let needle = filter.to_lowercase();
	if needle.is_empty() {
		return options.to_vec();
	}

	options
		.iter()
		.filter(|option| option.to_lowercase().contains(&needle))
		.cloned()
		.collect()
}
