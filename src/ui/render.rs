use ratatui::{
	Frame,
	layout::{Margin, Rect},
	widgets::Paragraph,
};

use super::App;
use crate::tui::render_combobox;

impl App {
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let show_hint = !self.hint.is_empty() && area.height > 1;
		let widget_area = if show_hint {
			Rect::new(area.x, area.y, area.width, area.height - 1)
		} else {
			area
		};

		self.layout = render_combobox(frame, widget_area, self.combobox.view(), &self.theme);

		if show_hint {
			let hint_area = Rect::new(area.x, area.bottom() - 1, area.width, 1);
			frame.render_widget(
				Paragraph::new(self.hint.as_str()).style(self.theme.empty),
				hint_area,
			);
		}
	}
}
