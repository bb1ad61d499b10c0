use anyhow::{Context, Result, bail};
use pickbox::{PickOutcome, PickerBuilder, logging};

use crate::cli::{CliArgs, collect_options};
use crate::settings::ResolvedConfig;

/// Coordinates gathering options, logging setup and the interactive picker.
pub(crate) struct PickWorkflow {
	picker: PickerBuilder,
}

impl PickWorkflow {
	pub(crate) fn prepare(cli: &CliArgs, config: &ResolvedConfig) -> Result<Self> {
		let options = collect_options(&cli.options, cli.from_file.as_deref())?;
		if options.is_empty() {
			bail!("no options to choose from; pass them as arguments, --from-file, or stdin");
		}

		init_logging(config)?;
		log::debug!("loaded {} options", options.len());

		let picker = PickerBuilder::from(config.picker_config(options));
		Ok(Self { picker })
	}

	pub(crate) fn run(self) -> Result<PickOutcome> {
		self.picker.run()
	}
}

fn init_logging(config: &ResolvedConfig) -> Result<()> {
	let path = match &config.log_file {
		Some(path) => path.clone(),
		None if config.log_level == log::LevelFilter::Off => return Ok(()),
		None => logging::default_log_path().context("failed to resolve log file location")?,
	};
	logging::initialize(config.log_level, &path)
}
