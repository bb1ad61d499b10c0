use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::{LogLevelArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `pickbox` binary.
#[derive(Parser, Debug)]
#[command(
	name = "pickbox",
	version,
	long_version = long_version(),
	about = "Searchable dropdown picker for the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		value_name = "OPTION",
		help = "Options to choose from, in display order"
	)]
	pub(crate) options: Vec<String>,
	#[arg(
		short = 'f',
		long = "from-file",
		value_name = "FILE",
		help = "Read options from a file, one per line; `-` reads stdin (default: none)"
	)]
	pub(crate) from_file: Option<PathBuf>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "PICKBOX_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long = "print-config",
		help = "Print the effective configuration before starting (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(long = "list-themes", help = "List the built-in themes and exit")]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'l',
		long,
		value_name = "TEXT",
		help = "Label shown above the input (default: \"Select an option:\")"
	)]
	pub(crate) label: Option<String>,
	#[arg(
		short = 's',
		long,
		value_name = "OPTION",
		help = "Pre-select an option (default: none)"
	)]
	pub(crate) selected: Option<String>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial filter text (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "BOOL",
		num_args = 0..=1,
		require_equals = true,
		default_missing_value = "true",
		value_parser = BoolishValueParser::new(),
		help = "Start with the option list expanded (default: disabled)"
	)]
	pub(crate) open: Option<bool>,
	#[arg(
		long = "keep-open",
		value_name = "BOOL",
		num_args = 0..=1,
		require_equals = true,
		default_missing_value = "true",
		value_parser = BoolishValueParser::new(),
		help = "Keep running after a selection until Esc (default: disabled)"
	)]
	pub(crate) keep_open: Option<bool>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "log-level",
		value_enum,
		help = "Log verbosity written to the data directory (default: off)"
	)]
	pub(crate) log_level: Option<LogLevelArg>,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
