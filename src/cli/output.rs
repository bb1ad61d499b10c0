use anyhow::Result;
use pickbox::PickOutcome;
use serde_json::json;

/// Print a plain-text representation of the picker outcome.
///
/// The selection goes to stdout so it can be captured; cancellation is reported
/// on stderr.
pub(crate) fn print_plain(outcome: &PickOutcome) {
	match (&outcome.selection, outcome.accepted) {
		(Some(selection), true) => println!("{selection}"),
		_ => eprintln!("Selection cancelled (query: '{}')", outcome.query),
	}
}

/// Format the picker outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &PickOutcome) -> Result<String> {
	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": outcome.selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the picker outcome.
pub(crate) fn print_json(outcome: &PickOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
