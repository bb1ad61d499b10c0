use std::io::{self, Write, stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use log::info;
use ratatui::crossterm::event::{
	self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use ratatui::crossterm::execute;

use super::App;
use super::config::PickerConfig;
use super::state::PickOutcome;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Construct an [`App`] for the provided configuration and run it to completion.
pub fn run(config: PickerConfig) -> Result<PickOutcome> {
	let mut app = App::new(config);
	app.run()
}

impl App {
	/// Pump the terminal event loop until the user commits or leaves.
	pub fn run(&mut self) -> Result<PickOutcome> {
		info!(
			"starting picker with {} options",
			self.combobox.options().len()
		);
		let mut terminal = ratatui::init();
		let result = enable_input_modes(&mut stdout())
			.context("failed to enable mouse capture and bracketed paste")
			.and_then(|()| self.event_loop(&mut terminal));

		let restored = disable_input_modes(&mut stdout());
		ratatui::restore();
		let outcome = result?;
		restored.context("failed to disable mouse capture and bracketed paste")?;

		info!(
			"picker finished (accepted: {}, selection: {:?})",
			outcome.accepted, outcome.selection
		);
		Ok(outcome)
	}

	fn event_loop(&mut self, terminal: &mut ratatui::DefaultTerminal) -> Result<PickOutcome> {
		terminal.clear()?;
		loop {
			terminal.draw(|frame| self.draw(frame))?;

			if !event::poll(POLL_INTERVAL).context("failed to poll terminal events")? {
				continue;
			}
			let event = event::read().context("failed to read terminal event")?;
			if let Some(outcome) = self.handle_event(event) {
				return Ok(outcome);
			}
		}
	}
}

/// Clicks and pasted text reach the picker as single events.
fn enable_input_modes<W: Write>(out: &mut W) -> io::Result<()> {
	execute!(out, EnableMouseCapture, EnableBracketedPaste)
}

fn disable_input_modes<W: Write>(out: &mut W) -> io::Result<()> {
	execute!(out, DisableBracketedPaste, DisableMouseCapture)
}
