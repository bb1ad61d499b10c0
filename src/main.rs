mod cli;
mod settings;
mod workflow;

use std::process::ExitCode;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use workflow::PickWorkflow;

fn main() -> Result<ExitCode> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in pickbox::tui::theme::names() {
			println!("{name}");
		}
		return Ok(ExitCode::SUCCESS);
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let outcome = PickWorkflow::prepare(&cli, &resolved)?.run()?;

	match cli.output {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(if outcome.accepted {
		ExitCode::SUCCESS
	} else {
		ExitCode::FAILURE
	})
}
