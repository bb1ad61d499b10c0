use std::fs;
use std::io::{self, BufRead, IsTerminal};
use std::path::Path;

use anyhow::{Context, Result};

/// Gather options from positional arguments and an optional file.
///
/// `-` reads stdin. With no positional options and no file, stdin is read when
/// it is not a terminal. Blank lines are skipped and trailing `\r` is trimmed.
pub(crate) fn collect_options(positional: &[String], file: Option<&Path>) -> Result<Vec<String>> {
	let mut options = positional.to_vec();

	match file {
		Some(path) if path == Path::new("-") => options.extend(read_stdin()?),
		Some(path) => {
			let contents = fs::read_to_string(path)
				.with_context(|| format!("failed to read options from {}", path.display()))?;
			options.extend(parse_lines(&contents));
		}
		None if positional.is_empty() && !io::stdin().is_terminal() => {
			options.extend(read_stdin()?);
		}
		None => {}
	}

	Ok(options)
}

fn read_stdin() -> Result<Vec<String>> {
	let mut options = Vec::new();
	for line in io::stdin().lock().lines() {
		let line = line.context("failed to read options from stdin")?;
		options.extend(parse_lines(&line));
	}
	Ok(options)
}

fn parse_lines(contents: &str) -> impl Iterator<Item = String> + '_ {
	contents
		.lines()
		.map(|line| line.trim_end_matches('\r'))
		.filter(|line| !line.trim().is_empty())
		.map(str::to_string)
}
