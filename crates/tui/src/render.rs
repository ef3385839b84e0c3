//! Drawing of the input line, the results overlay and the preview line.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use throbber_widgets_tui::Throbber;
use unicode_width::UnicodeWidthStr;

use crate::App;

const SPINNER_WIDTH: u16 = 12;

impl<'a> App<'a> {
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let rows = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
			.split(area);

		let input_area = self.render_prompt(frame, rows[0]);
		if self.page.set_anchor(self.combo, input_area).is_err() {
			return;
		}
		self.render_preview(frame, rows[2]);
		self.render_overlay(frame, area);
	}

	/// Draw title, input and spinner; returns the input's geometry.
	fn render_prompt(&mut self, frame: &mut Frame, area: Rect) -> Rect {
		let label = match (&self.error, &self.title) {
			(Some(error), _) => Span::styled(format!("{error} › "), self.theme.error),
			(None, Some(title)) => Span::styled(format!("{title} › "), self.theme.prompt),
			(None, None) => Span::styled("› ", self.theme.prompt),
		};
		let label_width = u16::try_from(label.content.width())
			.unwrap_or(u16::MAX)
			.min(area.width / 2);
		let spinner_width = if self.is_searching() {
			SPINNER_WIDTH.min(area.width.saturating_sub(label_width))
		} else {
			0
		};

		let columns = Layout::default()
			.direction(Direction::Horizontal)
			.constraints([
				Constraint::Length(label_width),
				Constraint::Min(1),
				Constraint::Length(spinner_width),
			])
			.split(area);

		frame.render_widget(Paragraph::new(Line::from(label)), columns[0]);
		self.input.render(frame, columns[1], self.theme.input);
		if spinner_width > 0 {
			let throbber = Throbber::default().label("searching");
			frame.render_stateful_widget(throbber, columns[2], &mut self.throbber_state);
		}
		columns[1]
	}

	fn render_preview(&self, frame: &mut Frame, area: Rect) {
		let Some(record) = &self.preview else {
			return;
		};
		let text = truncate(&record.to_string(), usize::from(area.width));
		frame.render_widget(
			Paragraph::new(Line::styled(text, self.theme.preview)),
			area,
		);
	}

	/// Draw the overlay at the position computed by the engine, clipped to
	/// the visible screen.
	fn render_overlay(&self, frame: &mut Frame, bounds: Rect) {
		let Some(combo) = self.page.get(self.combo) else {
			return;
		};
		let overlay = combo.overlay();
		if !overlay.is_open() {
			return;
		}
		let area = overlay.area().intersection(bounds);
		if area.is_empty() {
			return;
		}

		let highlighted = combo.highlight().index();
		let width = usize::from(area.width);
		let lines: Vec<Line> = overlay
			.visible_range()
			.map(|index| {
				let style = if Some(index) == highlighted {
					self.theme.highlight
				} else {
					self.theme.results
				};
				let text = truncate(&overlay.rows()[index], width);
				Line::styled(format!("{text:<width$}"), style)
			})
			.collect();

		frame.render_widget(Clear, area);
		frame.render_widget(Paragraph::new(lines).style(self.theme.results), area);
	}
}

/// Cut `text` to at most `width` display columns.
fn truncate(text: &str, width: usize) -> String {
	if text.width() <= width {
		return text.to_string();
	}
	let mut out = String::new();
	let mut used = 0;
	for ch in text.chars() {
		let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
		if used + ch_width > width {
			break;
		}
		used += ch_width;
		out.push(ch);
	}
	out
}
